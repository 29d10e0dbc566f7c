use mongodb::bson::{Document, doc};
use serde::{Deserialize, Deserializer, Serialize, de};
use validator::Validate;

use crate::{
    error::{AppError, Result},
    models::serialize_document,
};

pub const DEFAULT_BRAND: &str = "Lapiòzo";
pub const DEFAULT_PRODUCT_LIMIT: i64 = 50;
pub const DEFAULT_FEATURED_LIMIT: i64 = 8;

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_in_stock() -> bool {
    true
}

fn default_product_limit() -> i64 {
    DEFAULT_PRODUCT_LIMIT
}

fn default_featured_limit() -> i64 {
    DEFAULT_FEATURED_LIMIT
}

/// Accepts the usual query-string spellings of a flag, case-insensitively:
/// `true/false`, `1/0`, `yes/no`, `y/n`, `on/off`, `t/f`.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" | "t" => Ok(Some(true)),
        "false" | "0" | "no" | "n" | "off" | "f" => Ok(Some(false)),
        _ => Err(de::Error::custom(format!(
            "`{}` is not a valid boolean",
            raw
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub alt: Option<String>,
}

/// Document stored in the `product` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub price: f64,
    pub category: String,
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    #[serde(flatten)]
    pub product: Product,
}

impl TryFrom<Document> for ProductResponse {
    type Error = AppError;

    fn try_from(document: Document) -> Result<Self> {
        let value = serde_json::Value::Object(serialize_document(document));
        let response = serde_json::from_value(value)?;

        Ok(response)
    }
}

// Query types

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductQuery {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub featured: Option<bool>,
    #[serde(default = "default_product_limit")]
    pub limit: i64,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            featured: None,
            limit: DEFAULT_PRODUCT_LIMIT,
        }
    }
}

impl ProductQuery {
    /// Equality filter over the parameters that are present. An empty
    /// category is treated as absent.
    pub fn filter(&self) -> Document {
        let mut filter = Document::new();

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            filter.insert("category", category);
        }

        if let Some(featured) = self.featured {
            filter.insert("featured", featured);
        }

        filter
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeaturedQuery {
    #[serde(default = "default_featured_limit")]
    pub limit: i64,
}

impl FeaturedQuery {
    pub fn filter(&self) -> Document {
        doc! { "featured": true }
    }
}

// Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub inserted: u64,
}
