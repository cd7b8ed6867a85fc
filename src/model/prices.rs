use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::Add;

use serde::{Serialize, Serializer};

use crate::model::common::{Identified, Named};

/// Storefront application identifier, shared by base titles and their add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AppId(u64);

impl AppId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Accepts a line iff it only holds decimal digits once trimmed.
    pub fn parse_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        trimmed.parse::<u64>().ok().map(AppId)
    }
}

impl Display for AppId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount in cents, as sent by the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn units(&self) -> u64 {
        self.cents / 100
    }

    pub fn fraction(&self) -> u64 {
        self.cents % 100
    }

    pub fn as_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    title: String,
    id: AppId,
    pub current: Price,
    pub original: Price,
    pub discount_percent: u8,
    pub currency: Option<String>,
    pub add_ons: Vec<PriceRecord>,
}

impl PriceRecord {
    pub fn new(
        id: AppId,
        title: &str,
        original: Price,
        current: Price,
        discount_percent: u8,
        currency: Option<String>,
    ) -> Self {
        Self {
            title: title.to_string(),
            id,
            current,
            original,
            discount_percent,
            currency,
            add_ons: Vec::new(),
        }
    }

    pub fn with_add_ons(mut self, add_ons: Vec<PriceRecord>) -> Self {
        self.add_ons = add_ons;
        self
    }
}

impl Identified<AppId> for PriceRecord {
    fn id(&self) -> AppId {
        self.id
    }
}

impl Named for PriceRecord {
    fn name(&self) -> String {
        self.title.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    Priced(PriceRecord),
    Unpriced { title: String, id: AppId },
    Failed { id: AppId, message: String },
}

/// Request parameters selecting the storefront region (prices, currency) and
/// the language of the returned names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub region: String,
    pub language: String,
}

impl Locale {
    pub fn new(region: &str, language: &str) -> Self {
        Self {
            region: region.to_string(),
            language: language.to_string(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::new("fr", "fr")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_accepts_digits_only() {
        assert_eq!(AppId::parse_line("440"), Some(AppId::new(440)));
        assert_eq!(AppId::parse_line("  292030 \r"), Some(AppId::new(292030)));
        assert_eq!(AppId::parse_line(""), None);
        assert_eq!(AppId::parse_line("   "), None);
        assert_eq!(AppId::parse_line("-10"), None);
        assert_eq!(AppId::parse_line("+10"), None);
        assert_eq!(AppId::parse_line("12a"), None);
        assert_eq!(AppId::parse_line("1 2"), None);
        assert_eq!(AppId::parse_line("99999999999999999999999"), None);
    }

    #[test]
    fn test_price_sum_is_exact() {
        let prices = vec![
            Price::from_cents(10),
            Price::from_cents(20),
            Price::from_cents(1999),
        ];
        let total: Price = prices.into_iter().sum();
        assert_eq!(total, Price::from_cents(2029));
        assert_eq!(total.units(), 20);
        assert_eq!(total.fraction(), 29);
        assert_eq!(total.as_f64(), 20.29);
    }

    #[test]
    fn test_price_sum_saturates() {
        let max = Price::from_cents(u64::MAX);

        assert_eq!(max + Price::from_cents(1), max);
        assert_eq!(vec![max, max, max].into_iter().sum::<Price>(), max);
    }
}
