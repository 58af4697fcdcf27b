use crate::config::toml_config::TomlConfig;
use crate::config::UaSettings;
use crate::core::parser;
use crate::core::user_agent::{default_base, DEFAULT_OVERRIDE_VAR};
use crate::utils::error::{Result, UaError};
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ua-compose")]
#[command(about = "Compose and parse User-Agent header values")]
pub struct CliConfig {
    /// TOML file holding the base product list
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra base product, e.g. --product "MyTool/1.0 (linux)"
    #[arg(long = "product", global = true)]
    pub products: Vec<String>,

    /// Environment variable holding appended products
    #[arg(long, global = true)]
    pub env_var: Option<String>,

    /// Ignore the override environment variable
    #[arg(long, global = true)]
    pub no_override: bool,

    /// Print products as JSON instead of the header value
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the base products with the override appended (default)
    Compose,
    /// Parse a User-Agent string and print its products as JSON
    Parse { text: String },
}

impl CliConfig {
    /// Merge the TOML file (if any) with the command line flags.
    /// Flags win over the file; `--product` entries come after file products.
    /// With no products configured anywhere the base is `ua-compose/<version>`.
    pub fn resolve(&self) -> Result<UaSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut base = file.base_products();
        for (i, text) in self.products.iter().enumerate() {
            let parsed = parser::parse(text).map_err(|e| UaError::InvalidConfigValueError {
                field: format!("--product[{}]", i),
                value: text.clone(),
                reason: e.to_string(),
            })?;
            base = base.append_all(parsed);
        }
        if base.is_empty() {
            base = default_base();
        }

        let override_var = self
            .env_var
            .clone()
            .or_else(|| {
                file.override_settings
                    .as_ref()
                    .and_then(|o| o.env_var.clone())
            })
            .unwrap_or_else(|| DEFAULT_OVERRIDE_VAR.to_string());

        let settings = UaSettings {
            base,
            override_var,
            override_enabled: file.override_enabled() && !self.no_override,
        };
        settings.validate()?;
        Ok(settings)
    }
}
