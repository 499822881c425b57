pub mod list;
pub mod role_assign;
