pub mod initials;
pub mod plan;
