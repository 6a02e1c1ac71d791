use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use canemart_core::{DomainError, DomainResult, Money, QualityGrade, Quantity, RecordId, UserId};

/// Listing status lifecycle.
///
/// Transitions are monotonic: `pending → processing → completed`, and any
/// non-terminal status may move to `rejected`. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Processing,
    Completed,
    Rejected,
}

impl ListingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ListingStatus::Completed | ListingStatus::Rejected)
    }

    /// Listings visible to customers: only those still awaiting a buyer.
    pub fn is_available(&self) -> bool {
        *self == ListingStatus::Pending
    }

    fn can_become(&self, next: ListingStatus) -> bool {
        match (self, next) {
            (ListingStatus::Pending, ListingStatus::Processing) => true,
            (ListingStatus::Processing, ListingStatus::Completed) => true,
            (s, ListingStatus::Rejected) if !s.is_terminal() => true,
            _ => false,
        }
    }
}

/// Buyer details recorded when a listing sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerInfo {
    pub buyer: String,
    pub revenue: u64,
}

/// Fields supplied by the farmer's listing form.
///
/// Quantity and price stay as the formatted strings the form produced
/// (`"500 tons"`, `"₹2,800/ton"`); creation validates they coerce cleanly so
/// downstream display code never meets a malformed one from this path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCaneListing {
    pub variety: String,
    pub quantity: String,
    pub price: String,
    pub quality: QualityGrade,
    pub harvest_date: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

/// A farmer-submitted offer to sell raw sugarcane.
///
/// Created once, never deleted; only the status (and buyer/revenue on
/// completion) ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaneListing {
    id: RecordId,
    variety: String,
    quantity: String,
    price: String,
    quality: QualityGrade,
    harvest_date: String,
    description: Option<String>,
    location: Option<String>,
    image: Option<String>,
    status: ListingStatus,
    farmer: String,
    farmer_id: UserId,
    created_at: DateTime<Utc>,
    buyer: Option<String>,
    revenue: Option<u64>,
}

impl CaneListing {
    /// Validate form input and mint a pending listing owned by `farmer_id`.
    pub fn create(
        new: NewCaneListing,
        farmer_id: UserId,
        farmer: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if new.variety.trim().len() < 2 {
            return Err(DomainError::validation(
                "variety must be at least 2 characters",
            ));
        }
        if new.harvest_date.trim().is_empty() {
            return Err(DomainError::validation("harvest date is required"));
        }
        // Fail loudly now rather than zero-pricing in the catalog later.
        Quantity::parse(&new.quantity)?;
        Money::parse(&new.price)?;

        Ok(Self {
            id: RecordId::new(),
            variety: new.variety,
            quantity: new.quantity,
            price: new.price,
            quality: new.quality,
            harvest_date: new.harvest_date,
            description: new.description,
            location: new.location,
            image: new.image,
            status: ListingStatus::Pending,
            farmer: farmer.into(),
            farmer_id,
            created_at,
            buyer: None,
            revenue: None,
        })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn variety(&self) -> &str {
        &self.variety
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn quality(&self) -> QualityGrade {
        self.quality
    }

    pub fn harvest_date(&self) -> &str {
        &self.harvest_date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn status(&self) -> ListingStatus {
        self.status
    }

    pub fn farmer(&self) -> &str {
        &self.farmer
    }

    pub fn farmer_id(&self) -> UserId {
        self.farmer_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn buyer(&self) -> Option<&str> {
        self.buyer.as_deref()
    }

    pub fn revenue(&self) -> Option<u64> {
        self.revenue
    }

    /// Advance the lifecycle. Rejects backwards or same-status moves.
    ///
    /// Buyer info may only accompany the move to `completed`.
    pub fn advance_status(
        &mut self,
        next: ListingStatus,
        buyer_info: Option<BuyerInfo>,
    ) -> DomainResult<()> {
        if !self.status.can_become(next) {
            return Err(DomainError::invariant(format!(
                "illegal listing status transition: {:?} -> {:?}",
                self.status, next
            )));
        }
        if buyer_info.is_some() && next != ListingStatus::Completed {
            return Err(DomainError::invariant(
                "buyer info is only recorded on completion",
            ));
        }

        self.status = next;
        if let Some(info) = buyer_info {
            self.buyer = Some(info.buyer);
            self.revenue = Some(info.revenue);
        }
        Ok(())
    }
}
