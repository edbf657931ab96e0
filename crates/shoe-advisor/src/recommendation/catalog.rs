use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Shoe, ShoeId};

/// Known catalog vocabularies.
pub const COLORS: [&str; 10] = [
    "Black", "White", "Brown", "Navy", "Red", "Blue", "Gray", "Green", "Tan", "Beige",
];
pub const MATERIALS: [&str; 7] = [
    "Leather",
    "Canvas",
    "Mesh",
    "Suede",
    "Synthetic",
    "Primeknit",
    "Rubber",
];
pub const BRANDS: [&str; 8] = [
    "Nike",
    "Adidas",
    "Converse",
    "Vans",
    "Clarks",
    "Puma",
    "New Balance",
    "Reebok",
];
pub const OCCASIONS: [&str; 8] = [
    "Casual", "Sport", "Formal", "Party", "Work", "Travel", "Beach", "Hiking",
];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read shoe catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid shoe catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("shoe id {0} appears more than once in the catalog")]
    DuplicateId(ShoeId),
}

/// In-memory list of candidate shoes with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    shoes: Vec<Shoe>,
}

impl Catalog {
    pub fn new(shoes: Vec<Shoe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for shoe in &shoes {
            if !seen.insert(shoe.id) {
                return Err(CatalogError::DuplicateId(shoe.id));
            }
        }
        Ok(Self { shoes })
    }

    /// Built-in demo catalog.
    pub fn sample() -> Self {
        let shoes = vec![
            sample_shoe(1, "Air Force 1", "Nike", "White", "Leather", 1_299_000, "Casual"),
            sample_shoe(2, "Ultraboost 22", "Adidas", "Black", "Primeknit", 2_299_000, "Sport"),
            sample_shoe(3, "Chuck Taylor", "Converse", "Red", "Canvas", 699_000, "Casual"),
            sample_shoe(4, "Stan Smith", "Adidas", "White", "Leather", 1_199_000, "Casual"),
            sample_shoe(5, "Old Skool", "Vans", "Black", "Canvas", 799_000, "Casual"),
            sample_shoe(6, "Oxford Classic", "Clarks", "Brown", "Leather", 1_899_000, "Formal"),
        ];
        Self { shoes }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a CSV export with the header
    /// `id,name,brand,color,material,price,occasion,image_url,description`.
    /// The last two columns may be blank or omitted.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut shoes = Vec::new();

        for record in csv_reader.deserialize::<CatalogRow>() {
            shoes.push(record?.into_shoe());
        }

        Self::new(shoes)
    }

    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn into_shoes(self) -> Vec<Shoe> {
        self.shoes
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }
}

fn sample_shoe(
    id: u32,
    name: &str,
    brand: &str,
    color: &str,
    material: &str,
    price: i64,
    occasion: &str,
) -> Shoe {
    Shoe {
        id: ShoeId(id),
        name: name.to_string(),
        brand: brand.to_string(),
        color: color.to_string(),
        material: material.to_string(),
        price,
        occasion: occasion.to_string(),
        image_url: Some("/placeholder.svg?height=200&width=200".to_string()),
        description: None,
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u32,
    name: String,
    brand: String,
    color: String,
    material: String,
    price: i64,
    occasion: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    image_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

impl CatalogRow {
    fn into_shoe(self) -> Shoe {
        Shoe {
            id: ShoeId(self.id),
            name: self.name,
            brand: self.brand,
            color: self.color,
            material: self.material,
            price: self.price,
            occasion: self.occasion,
            image_url: self.image_url,
            description: self.description,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
