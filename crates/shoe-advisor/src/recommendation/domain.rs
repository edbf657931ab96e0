use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog shoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShoeId(pub u32);

impl fmt::Display for ShoeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog entry scored by the engine. Prices are whole rupiah.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    pub id: ShoeId,
    pub name: String,
    pub brand: String,
    pub color: String,
    pub material: String,
    pub price: i64,
    pub occasion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The five decision criteria, in the order explanations are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Color,
    Material,
    Price,
    Brand,
    Occasion,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Color,
        Criterion::Material,
        Criterion::Price,
        Criterion::Brand,
        Criterion::Occasion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Color => "color",
            Criterion::Material => "material",
            Criterion::Price => "price",
            Criterion::Brand => "brand",
            Criterion::Occasion => "occasion",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw importance weights as supplied by the caller. They do not need to sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriteriaWeights {
    pub color: f64,
    pub material: f64,
    pub price: f64,
    pub brand: f64,
    pub occasion: f64,
}

impl Default for CriteriaWeights {
    fn default() -> Self {
        Self {
            color: 0.2,
            material: 0.2,
            price: 0.25,
            brand: 0.15,
            occasion: 0.2,
        }
    }
}

impl CriteriaWeights {
    /// Builds weights from whole-number slider percentages.
    pub fn from_percentages(color: u32, material: u32, price: u32, brand: u32, occasion: u32) -> Self {
        Self {
            color: f64::from(color) / 100.0,
            material: f64::from(material) / 100.0,
            price: f64::from(price) / 100.0,
            brand: f64::from(brand) / 100.0,
            occasion: f64::from(occasion) / 100.0,
        }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Color => self.color,
            Criterion::Material => self.material,
            Criterion::Price => self.price,
            Criterion::Brand => self.brand,
            Criterion::Occasion => self.occasion,
        }
    }

    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|criterion| self.get(*criterion)).sum()
    }

    /// Scales the weights so they sum to one.
    ///
    /// Every component must be finite and non-negative, and at least one must be positive.
    pub fn normalize(&self) -> Result<NormalizedWeights, EngineError> {
        for criterion in Criterion::ALL {
            let value = self.get(criterion);
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidWeight { criterion, value });
            }
        }

        let total = self.total();
        if total <= 0.0 || !total.is_finite() {
            return Err(EngineError::DegenerateWeights { total });
        }

        Ok(NormalizedWeights(Self {
            color: self.color / total,
            material: self.material / total,
            price: self.price / total,
            brand: self.brand / total,
            occasion: self.occasion / total,
        }))
    }
}

/// Weights guaranteed to be non-negative and to sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedWeights(CriteriaWeights);

impl NormalizedWeights {
    pub fn get(&self, criterion: Criterion) -> f64 {
        self.0.get(criterion)
    }
}

/// Shopper preferences. An empty set means "no opinion" for that criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub preferred_colors: BTreeSet<String>,
    #[serde(default)]
    pub preferred_materials: BTreeSet<String>,
    pub min_price: i64,
    pub max_price: i64,
    #[serde(default)]
    pub preferred_brands: BTreeSet<String>,
    #[serde(default)]
    pub preferred_occasions: BTreeSet<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preferred_colors: string_set(&["Black", "White"]),
            preferred_materials: string_set(&["Leather", "Canvas"]),
            min_price: 500_000,
            max_price: 2_000_000,
            preferred_brands: string_set(&["Nike", "Adidas"]),
            preferred_occasions: string_set(&["Casual", "Sport"]),
        }
    }
}

impl UserPreferences {
    /// Preferences with the given budget and no opinion on anything else.
    pub fn with_budget(min_price: i64, max_price: i64) -> Self {
        Self {
            preferred_colors: BTreeSet::new(),
            preferred_materials: BTreeSet::new(),
            min_price,
            max_price,
            preferred_brands: BTreeSet::new(),
            preferred_occasions: BTreeSet::new(),
        }
    }

    pub fn within_budget(&self, price: i64) -> bool {
        price >= self.min_price && price <= self.max_price
    }
}

fn string_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Per-criterion fit, each in `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriteriaScore {
    pub color: f64,
    pub material: f64,
    pub price: f64,
    pub brand: f64,
    pub occasion: f64,
}

impl CriteriaScore {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Color => self.color,
            Criterion::Material => self.material,
            Criterion::Price => self.price,
            Criterion::Brand => self.brand,
            Criterion::Occasion => self.occasion,
        }
    }

    /// Unweighted arithmetic mean of the five scores.
    pub fn mean(&self) -> f64 {
        Criterion::ALL.iter().map(|criterion| self.get(*criterion)).sum::<f64>()
            / Criterion::ALL.len() as f64
    }
}

/// Ranked result for a single shoe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoeEvaluation {
    pub shoe: Shoe,
    pub scores: CriteriaScore,
    pub weighted_score: f64,
    pub rank: usize,
    pub match_percentage: f64,
}

/// Configuration problems detected by the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("criteria weights must sum to a positive finite value (got {total})")]
    DegenerateWeights { total: f64 },
    #[error("weight for {criterion} must be a finite, non-negative number (got {value})")]
    InvalidWeight { criterion: Criterion, value: f64 },
    #[error("{table} table entry '{key}' is outside the 0-10 score range ({value})")]
    TableScoreOutOfRange {
        table: &'static str,
        key: &'static str,
        value: f64,
    },
    #[error("{table} table lists '{key}' more than once")]
    DuplicateTableKey {
        table: &'static str,
        key: &'static str,
    },
}
