pub mod config;
pub mod environment;
pub mod scaffold;

// Re-export commonly used types
pub use config::ScaffoldConfig;
pub use scaffold::{Scaffold, ScaffoldReport};
