pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::env::{ProcessEnv, StaticOverride};
pub use config::{toml_config::TomlConfig, UaSettings};
pub use core::parser::parse;
pub use core::user_agent::{compose, default_base, UserAgent, DEFAULT_OVERRIDE_VAR};
pub use domain::model::{Product, ProductList};
pub use domain::ports::OverrideSource;
pub use utils::error::{ParseError, ParseErrorKind, Result, UaError};
