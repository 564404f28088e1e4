//! Data models for scraped noon product records.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Wire sentinel for fields the page did not yield.
const NOT_FOUND: &str = "not found";

/// Wire sentinel for the monthly sales value, which the page never exposes.
const UNAVAILABLE: &str = "unavailable";

/// Structured record extracted from one noon product page.
///
/// Absent fields are `None` internally; the JSON boundary serializes them
/// to the `"not found"` sentinel so existing consumers keep working. The
/// record is constructed fresh per request and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedProduct {
    /// Free text such as "500+ sold in the last month".
    pub monthly_sales_volume: Option<String>,
    /// Absolute brand page URL.
    pub brand_link: Option<String>,
    /// Absolute seller page URL.
    pub seller_link: Option<String>,
    /// Specification name/value pairs in document order.
    pub specifications: Specifications,
}

impl Serialize for ScrapedProduct {
    /// Emits the wire contract: camelCase field names, sentinels for absent
    /// values, and the constant `monthlySalesValue` kept for schema
    /// stability with callers.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry(
            "monthlySalesVolume",
            self.monthly_sales_volume.as_deref().unwrap_or(NOT_FOUND),
        )?;
        map.serialize_entry("monthlySalesValue", UNAVAILABLE)?;
        map.serialize_entry("brandLink", self.brand_link.as_deref().unwrap_or(NOT_FOUND))?;
        map.serialize_entry("sellerLink", self.seller_link.as_deref().unwrap_or(NOT_FOUND))?;
        map.serialize_entry("specifications", &self.specifications)?;
        map.end()
    }
}

/// Ordered specification mapping.
///
/// Insertion order follows document order. Keys are unique: inserting an
/// existing key overwrites its value in place, keeping the first-insertion
/// position (JSON object assignment semantics).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specifications(Vec<(String, String)>);

impl Specifications {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts a pair; an existing key takes the new value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no pairs were extracted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for Specifications {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl FromIterator<(String, String)> for Specifications {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut specs = Self::new();
        for (k, v) in iter {
            specs.insert(k, v);
        }
        specs
    }
}
