use crate::domain::model::{Product, ProductList};
use crate::utils::error::{UaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_product(field_name: &str, product: &Product) -> Result<()> {
    let invalid = |value: &str, reason: &str| UaError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let name = product.name();
    if name.is_empty() {
        return Err(invalid(name, "Product name cannot be empty"));
    }
    if name.contains(|c: char| c.is_whitespace() || c == '/' || c == '(') {
        return Err(invalid(name, "Product name cannot contain whitespace, '/' or '('"));
    }

    let version = product.version();
    if version.is_empty() {
        return Err(invalid(version, "Product version cannot be empty"));
    }
    if version.contains(|c: char| c.is_whitespace() || c == '(') {
        return Err(invalid(version, "Product version cannot contain whitespace or '('"));
    }

    if let Some(comment) = product.comment() {
        if comment.contains(')') {
            return Err(invalid(comment, "Product comment cannot contain ')'"));
        }
    }

    Ok(())
}

pub fn validate_product_list(field_name: &str, products: &ProductList) -> Result<()> {
    for (i, product) in products.iter().enumerate() {
        validate_product(&format!("{}[{}]", field_name, i), product)?;
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_env_var_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains(|c: char| c == '=' || c == '\0' || c.is_whitespace()) {
        return Err(UaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Environment variable names cannot contain '=', NUL or whitespace"
                .to_string(),
        });
    }
    Ok(())
}
