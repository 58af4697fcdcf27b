use crate::utils::error::{ParseError, Result};
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single `Name/Version[ (Comment)]` unit of a User-Agent string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    comment: String,
}

impl Product {
    /// An empty `comment` means no comment is attached.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            comment: comment.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn comment(&self) -> Option<&str> {
        if self.comment.is_empty() {
            None
        } else {
            Some(&self.comment)
        }
    }

    pub fn equal(&self, other: &Product) -> bool {
        self == other
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)?;
        if !self.comment.is_empty() {
            write!(f, " ({})", self.comment)?;
        }
        Ok(())
    }
}

/// Ordered products rendered as one header value.
///
/// Order is significant and duplicates are allowed. The list is never
/// modified in place: [`ProductList::append`] returns a new list, so a shared
/// base list can be reused for every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductList {
    products: Vec<Product>,
}

impl ProductList {
    /// Hand-built lists are trusted, nothing is validated here.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn equal(&self, other: &ProductList) -> bool {
        self == other
    }

    pub fn append(&self, product: Product) -> ProductList {
        let mut products = Vec::with_capacity(self.products.len() + 1);
        products.extend(self.products.iter().cloned());
        products.push(product);
        ProductList { products }
    }

    pub fn append_all<I>(&self, products: I) -> ProductList
    where
        I: IntoIterator<Item = Product>,
    {
        let mut combined = self.products.clone();
        combined.extend(products);
        ProductList { products: combined }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn into_inner(self) -> Vec<Product> {
        self.products
    }

    /// Render as a `User-Agent` header value for an HTTP client.
    pub fn to_header_value(&self) -> Result<HeaderValue> {
        Ok(HeaderValue::from_str(&self.to_string())?)
    }
}

impl fmt::Display for ProductList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", product)?;
        }
        Ok(())
    }
}

impl FromStr for ProductList {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        crate::core::parser::parse(s).map(ProductList::new)
    }
}

impl From<Vec<Product>> for ProductList {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl FromIterator<Product> for ProductList {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ProductList {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProductList {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
