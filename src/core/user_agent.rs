use crate::core::parser;
use crate::domain::model::{Product, ProductList};
use crate::domain::ports::OverrideSource;
use crate::utils::error::{ParseError, Result, UaError};

/// Environment variable consulted for extra products when none is configured.
pub const DEFAULT_OVERRIDE_VAR: &str = "APPEND_USER_AGENT";

pub const DEFAULT_PRODUCT_NAME: &str = "ua-compose";
pub const DEFAULT_PRODUCT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base identity used when no products are configured: `ua-compose/<version>`.
pub fn default_base() -> ProductList {
    ProductList::new(vec![Product::new(
        DEFAULT_PRODUCT_NAME,
        DEFAULT_PRODUCT_VERSION,
        "",
    )])
}

/// Append the products parsed from `override_text` to `base`.
///
/// `None` or blank text leaves the base list as it is. The base list is
/// never modified.
pub fn compose(
    base: &ProductList,
    override_text: Option<&str>,
) -> std::result::Result<ProductList, ParseError> {
    match override_text {
        Some(text) => {
            let extra = parser::parse(text)?;
            if extra.is_empty() {
                Ok(base.clone())
            } else {
                Ok(base.append_all(extra))
            }
        }
        None => Ok(base.clone()),
    }
}

/// Produces the `User-Agent` header value for outgoing requests.
pub struct UserAgent<S: OverrideSource> {
    base: ProductList,
    source: S,
    override_var: String,
}

impl<S: OverrideSource> UserAgent<S> {
    pub fn new(base: ProductList, source: S) -> Self {
        Self::with_override_var(base, source, DEFAULT_OVERRIDE_VAR)
    }

    pub fn with_override_var(base: ProductList, source: S, override_var: impl Into<String>) -> Self {
        Self {
            base,
            source,
            override_var: override_var.into(),
        }
    }

    pub fn base(&self) -> &ProductList {
        &self.base
    }

    pub fn override_var(&self) -> &str {
        &self.override_var
    }

    /// Base list plus the products of the override, read once per call.
    pub fn products(&self) -> Result<ProductList> {
        let value = self.source.lookup(&self.override_var)?;
        let composed =
            compose(&self.base, value.as_deref()).map_err(|source| UaError::Override {
                var: self.override_var.clone(),
                source,
            })?;

        if composed.len() != self.base.len() {
            tracing::debug!("Using modified User-Agent: {}", composed);
        }

        Ok(composed)
    }

    pub fn user_agent_string(&self) -> Result<String> {
        Ok(self.products()?.to_string())
    }
}
