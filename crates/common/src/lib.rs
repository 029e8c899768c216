pub mod config;
pub mod environment;
mod environment_variables;

pub use config::{AutoscanConfig, RemapRule, RemapTable};
