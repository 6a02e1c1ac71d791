use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use canemart_core::{DomainError, DomainResult, Money, Percentage, Quantity, RecordId, UserId};

/// The seven sugar forms mills trade in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Raw,
    White,
    Refined,
    Brown,
    Powdered,
    Jaggery,
    Coconut,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Raw => "raw",
            ProductType::White => "white",
            ProductType::Refined => "refined",
            ProductType::Brown => "brown",
            ProductType::Powdered => "powdered",
            ProductType::Jaggery => "jaggery",
            ProductType::Coconut => "coconut",
        }
    }
}

impl core::str::FromStr for ProductType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(ProductType::Raw),
            "white" => Ok(ProductType::White),
            "refined" => Ok(ProductType::Refined),
            "brown" => Ok(ProductType::Brown),
            "powdered" => Ok(ProductType::Powdered),
            "jaggery" => Ok(ProductType::Jaggery),
            "coconut" => Ok(ProductType::Coconut),
            other => Err(DomainError::validation(format!(
                "unknown product type: {other:?}"
            ))),
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock status lifecycle.
///
/// Stock levels move freely between `in-stock`, `low-stock` and `processing`;
/// `out-of-stock` only returns to `in-stock` (a restock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    InStock,
    LowStock,
    OutOfStock,
    Processing,
}

impl ProductStatus {
    /// Products visible to customers.
    pub fn is_available(&self) -> bool {
        matches!(self, ProductStatus::InStock | ProductStatus::LowStock)
    }

    fn can_become(&self, next: ProductStatus) -> bool {
        match (self, next) {
            (a, b) if *a == b => false,
            (ProductStatus::OutOfStock, ProductStatus::InStock) => true,
            (ProductStatus::OutOfStock, _) => false,
            _ => true,
        }
    }
}

/// Fields supplied by the mill's product form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMillProduct {
    pub product_name: String,
    pub product_type: ProductType,
    pub quantity: String,
    pub price: String,
    pub sugar_content: String,
    pub package_size: String,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub image: Option<String>,
    pub unit: Option<String>,
}

/// A mill-submitted finished sugar product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MillProduct {
    id: RecordId,
    product_name: String,
    product_type: ProductType,
    quantity: String,
    price: String,
    sugar_content: String,
    package_size: String,
    description: Option<String>,
    origin: Option<String>,
    image: Option<String>,
    unit: Option<String>,
    status: ProductStatus,
    producer: String,
    producer_id: UserId,
    created_at: DateTime<Utc>,
}

impl MillProduct {
    /// Validate form input and mint an in-stock product owned by `producer_id`.
    pub fn create(
        new: NewMillProduct,
        producer_id: UserId,
        producer: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if new.product_name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Quantity::parse(&new.quantity)?;
        Money::parse(&new.price)?;
        Quantity::parse(&new.package_size)?;
        Percentage::parse(&new.sugar_content)?;

        Ok(Self {
            id: RecordId::new(),
            product_name: new.product_name,
            product_type: new.product_type,
            quantity: new.quantity,
            price: new.price,
            sugar_content: new.sugar_content,
            package_size: new.package_size,
            description: new.description,
            origin: new.origin,
            image: new.image,
            unit: new.unit,
            status: ProductStatus::InStock,
            producer: producer.into(),
            producer_id,
            created_at,
        })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn sugar_content(&self) -> &str {
        &self.sugar_content
    }

    pub fn package_size(&self) -> &str {
        &self.package_size
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn producer_id(&self) -> UserId {
        self.producer_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Move between stock statuses, rejecting no-op and illegal moves.
    pub fn update_status(&mut self, next: ProductStatus) -> DomainResult<()> {
        if !self.status.can_become(next) {
            return Err(DomainError::invariant(format!(
                "illegal product status transition: {:?} -> {:?}",
                self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}
