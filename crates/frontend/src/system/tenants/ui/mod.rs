pub mod list;
pub mod plans;
