//! CLI command implementations

pub mod crud;

pub use crud::CrudCommand;
