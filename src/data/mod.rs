pub mod config;
pub mod expansion;
pub mod types;

pub use config::{Command, OutputFormat, Parameters};
pub use expansion::*;
pub use types::*;
