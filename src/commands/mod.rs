//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the notebook.

pub mod config;
pub mod list;
pub mod new;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use list::execute as list;
pub use new::execute as new;
