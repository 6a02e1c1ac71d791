use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Marketplace-wide quality vocabulary for sugarcane.
///
/// Assigned either directly by the farmer or derived from the prediction
/// heuristic. The declaration order (Premium, Standard, Economy) is load
/// bearing: the heuristic breaks accumulation ties in this order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityGrade {
    Premium,
    Standard,
    Economy,
}

impl QualityGrade {
    pub const ALL: [QualityGrade; 3] =
        [QualityGrade::Premium, QualityGrade::Standard, QualityGrade::Economy];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityGrade::Premium => "premium",
            QualityGrade::Standard => "standard",
            QualityGrade::Economy => "economy",
        }
    }
}

impl core::str::FromStr for QualityGrade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "premium" => Ok(QualityGrade::Premium),
            "standard" => Ok(QualityGrade::Standard),
            "economy" => Ok(QualityGrade::Economy),
            other => Err(DomainError::validation(format!(
                "unknown quality grade: {other:?}"
            ))),
        }
    }
}

impl core::fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
