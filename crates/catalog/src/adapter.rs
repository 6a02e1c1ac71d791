//! Catalog data adapter: raw records → display-ready catalog items.
//!
//! Record kind is an explicit tagged union, not field sniffing: a record is
//! cane because it arrives as [`RawRecord::Cane`], sugar because it arrives
//! as [`RawRecord::Sugar`].
//!
//! A word on the synthesized fields: placeholder image, per-kind default
//! rating, and the pseudo-random review count are **presentation-data
//! synthesis** inherited from the product, not business logic. Real review
//! data does not exist in this system; the numbers only make listing cards
//! render plausibly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use canemart_core::{DomainResult, Money, QualityGrade, Quantity, RecordId};
use canemart_listings::CaneListing;
use canemart_products::{MillProduct, ProductType};

const CANE_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1627207785566-00a505799891?auto=format&fit=crop&w=400&h=400&q=80";
const SUGAR_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1581268497091-31132809fef6?auto=format&fit=crop&w=400&h=400&q=80";

const CANE_DEFAULT_RATING: f64 = 4.5;
const SUGAR_DEFAULT_RATING: f64 = 4.7;

/// A source record, explicitly tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawRecord {
    Cane(CaneListing),
    Sugar(MillProduct),
}

/// Kind-specific display fields of a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemDetails {
    Cane {
        variety: String,
        quality: QualityGrade,
        harvest_date: String,
        farmer: String,
    },
    Sugar {
        product_type: ProductType,
        package_size: String,
        producer: String,
        sugar_content: String,
    },
}

impl ItemDetails {
    pub fn is_cane(&self) -> bool {
        matches!(self, ItemDetails::Cane { .. })
    }

    /// The seller's name (farmer or producer), used by search.
    pub fn seller(&self) -> &str {
        match self {
            ItemDetails::Cane { farmer, .. } => farmer,
            ItemDetails::Sugar { producer, .. } => producer,
        }
    }

    /// The value the exact type/variety filter compares against.
    pub fn type_key(&self) -> &str {
        match self {
            ItemDetails::Cane { variety, .. } => variety,
            ItemDetails::Sugar { product_type, .. } => product_type.as_str(),
        }
    }
}

/// The normalized, display-ready merge of the two record kinds.
///
/// Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: RecordId,
    pub name: String,
    pub price: u64,
    pub quantity: u64,
    pub unit: String,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
    pub origin: Option<String>,
    #[serde(flatten)]
    pub details: ItemDetails,
}

/// Normalize one record. Malformed quantity/price strings are a typed error,
/// never a silent zero.
pub fn normalize_one<R: Rng + ?Sized>(record: &RawRecord, rng: &mut R) -> DomainResult<CatalogItem> {
    match record {
        RawRecord::Cane(listing) => {
            let price = Money::parse(listing.price())?;
            let quantity = Quantity::parse(listing.quantity())?;

            Ok(CatalogItem {
                id: listing.id(),
                name: format!("{} {} Sugarcane", title_case(listing.quality().as_str()), listing.variety()),
                price: price.amount(),
                quantity: quantity.value,
                unit: "ton".to_string(),
                description: listing
                    .description()
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        format!(
                            "High-quality {} sugarcane available for purchase.",
                            listing.variety()
                        )
                    }),
                image: listing
                    .image()
                    .unwrap_or(CANE_PLACEHOLDER_IMAGE)
                    .to_string(),
                rating: CANE_DEFAULT_RATING,
                reviews: rng.gen_range(10..60),
                origin: listing.location().map(str::to_string),
                details: ItemDetails::Cane {
                    variety: listing.variety().to_string(),
                    quality: listing.quality(),
                    harvest_date: listing.harvest_date().to_string(),
                    farmer: listing.farmer().to_string(),
                },
            })
        }
        RawRecord::Sugar(product) => {
            let price = Money::parse(product.price())?;
            let quantity = Quantity::parse(product.quantity())?;

            Ok(CatalogItem {
                id: product.id(),
                name: product.product_name().to_string(),
                price: price.amount(),
                quantity: quantity.value,
                unit: product.unit().unwrap_or("kg").to_string(),
                description: product
                    .description()
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        format!("High-quality {} sugar.", product.product_type())
                    }),
                image: product
                    .image()
                    .unwrap_or(SUGAR_PLACEHOLDER_IMAGE)
                    .to_string(),
                rating: SUGAR_DEFAULT_RATING,
                reviews: rng.gen_range(20..120),
                origin: product.origin().map(str::to_string),
                details: ItemDetails::Sugar {
                    product_type: product.product_type(),
                    package_size: product.package_size().to_string(),
                    producer: product.producer().to_string(),
                    sugar_content: product.sugar_content().to_string(),
                },
            })
        }
    }
}

/// Normalize a batch. Malformed records are skipped with a warning; the
/// catalog stays available even when upstream data is partly bad.
pub fn normalize<R: Rng + ?Sized>(records: &[RawRecord], rng: &mut R) -> Vec<CatalogItem> {
    records
        .iter()
        .filter_map(|record| match normalize_one(record, rng) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(%err, "skipping malformed catalog record");
                None
            }
        })
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
