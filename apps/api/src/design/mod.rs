pub mod tables;
pub mod tokens;
