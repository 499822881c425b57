pub mod crud;
pub mod metadata;
