use crate::core::user_agent::DEFAULT_OVERRIDE_VAR;
use crate::domain::model::{Product, ProductList};
use crate::utils::error::{Result, UaError};
use crate::utils::validation::{validate_env_var_name, validate_product_list, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base User-Agent configuration, e.g.
///
/// ```toml
/// [[product]]
/// name = "MyTool"
/// version = "${MYTOOL_VERSION}"
/// comment = "+https://example.com"
///
/// [override]
/// env_var = "APPEND_USER_AGENT"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(rename = "product", default)]
    pub products: Vec<Product>,
    #[serde(rename = "override")]
    pub override_settings: Option<OverrideConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideConfig {
    pub env_var: Option<String>,
    pub enabled: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MYTOOL_VERSION})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UaError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得基礎產品清單
    pub fn base_products(&self) -> ProductList {
        ProductList::new(self.products.clone())
    }

    /// 取得覆蓋用的環境變數名稱
    pub fn override_var(&self) -> &str {
        self.override_settings
            .as_ref()
            .and_then(|o| o.env_var.as_deref())
            .unwrap_or(DEFAULT_OVERRIDE_VAR)
    }

    /// 是否允許環境變數覆蓋
    pub fn override_enabled(&self) -> bool {
        self.override_settings
            .as_ref()
            .and_then(|o| o.enabled)
            .unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_product_list("product", &self.base_products())?;
        validate_env_var_name("override.env_var", self.override_var())?;

        // 未替換的 ${VAR} 代表環境變數不存在
        for (i, product) in self.products.iter().enumerate() {
            let fields = [
                ("name", product.name()),
                ("version", product.version()),
                ("comment", product.comment().unwrap_or_default()),
            ];
            for (field, value) in fields {
                if value.contains("${") {
                    return Err(UaError::InvalidConfigValueError {
                        field: format!("product[{}].{}", i, field),
                        value: value.to_string(),
                        reason: "Referenced environment variable is not set".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
