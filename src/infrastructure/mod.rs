//! Infrastructure layer - external adapters (filesystem, terminal).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod config;
pub mod terminal;
pub mod vault;

pub use config::JsonSettingsStore;
pub use terminal::{TerminalDialog, TerminalNotifier};
pub use vault::FsVault;
