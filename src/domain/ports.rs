use crate::utils::error::Result;
use std::collections::HashMap;

/// Where the User-Agent override text comes from.
///
/// `Ok(None)` means no override is set. A value that exists but cannot be
/// read is an error, never a silent `None`.
pub trait OverrideSource: Send + Sync {
    fn lookup(&self, key: &str) -> Result<Option<String>>;
}

impl OverrideSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl<T: OverrideSource + ?Sized> OverrideSource for &T {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        (**self).lookup(key)
    }
}

impl<T: OverrideSource + ?Sized> OverrideSource for Box<T> {
    fn lookup(&self, key: &str) -> Result<Option<String>> {
        (**self).lookup(key)
    }
}
