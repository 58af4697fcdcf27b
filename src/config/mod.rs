#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::env::{ProcessEnv, StaticOverride};
use crate::core::user_agent::UserAgent;
use crate::domain::model::ProductList;
use crate::domain::ports::OverrideSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_env_var_name, validate_product_list, Validate};

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

/// Resolved configuration: everything needed to build a `UserAgent`.
#[derive(Debug, Clone)]
pub struct UaSettings {
    pub base: ProductList,
    pub override_var: String,
    pub override_enabled: bool,
}

impl UaSettings {
    /// Build a `UserAgent` that reads the process environment, or nothing
    /// when the override is disabled.
    pub fn into_user_agent(self) -> UserAgent<Box<dyn OverrideSource>> {
        let source: Box<dyn OverrideSource> = if self.override_enabled {
            Box::new(ProcessEnv)
        } else {
            Box::new(StaticOverride::none())
        };
        UserAgent::with_override_var(self.base, source, self.override_var)
    }
}

impl Validate for UaSettings {
    fn validate(&self) -> Result<()> {
        validate_product_list("base", &self.base)?;
        validate_env_var_name("override_var", &self.override_var)
    }
}
