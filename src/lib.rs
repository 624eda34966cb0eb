pub mod cli;
pub mod config;
pub mod context;
pub mod pipeline;
pub mod stage;
pub mod style;

// Convenience re-exports
pub use cli::Mode;
pub use config::{AliasDefinition, Config, StageDefinition};
pub use context::ContextEnv;
pub use pipeline::{run, run_with};
pub use stage::StageError;
pub use style::{Printer, StyleRenderer};
