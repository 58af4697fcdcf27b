use crate::domain::ports::OverrideSource;
use crate::utils::error::{Result, UaError};

/// Reads the override from the process environment on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl OverrideSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(raw)) => {
                tracing::warn!("{} is not valid UTF-8: {:?}", key, raw);
                Err(UaError::UnreadableOverride {
                    var: key.to_string(),
                })
            }
        }
    }
}

/// A fixed override value, independent of the key asked for.
#[derive(Debug, Clone, Default)]
pub struct StaticOverride {
    value: Option<String>,
}

impl StaticOverride {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn none() -> Self {
        Self { value: None }
    }
}

impl OverrideSource for StaticOverride {
    fn lookup(&self, _key: &str) -> Result<Option<String>> {
        Ok(self.value.clone())
    }
}
