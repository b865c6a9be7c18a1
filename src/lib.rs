pub mod commands;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod paths;

pub use config::{AliasMode, GenerateOptions};
pub use error::{Error, Result};
pub use generate::{generate, GenerateReport, ResourceEntry};
