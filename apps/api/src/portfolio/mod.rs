pub mod aliases;
pub mod coerce;
pub mod demo;
pub mod intent;
pub mod schema;
