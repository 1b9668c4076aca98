//! Produce item model.

use serde::{Deserialize, Serialize};

/// An amount in minor currency units (cents for USD).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(alias = "Amount")]
    pub amount: i64,
    #[serde(alias = "Currency")]
    pub currency: String,
}

impl Money {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self { amount, currency: currency.into() }
    }
}

/// A produce item, addressed in the catalog by its code.
///
/// Field names are written lowercase and read in either lowercase or
/// capitalized form. Missing fields decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, alias = "Code")]
    pub code: String,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Price")]
    pub price: Option<Money>,
}

impl Item {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price: Some(price),
        }
    }

    /// Catalog key: the code, lowercased.
    pub fn key(&self) -> String {
        normalize_code(&self.code)
    }
}

/// Produce codes are case-insensitive.
pub fn normalize_code(code: &str) -> String {
    code.to_lowercase()
}
