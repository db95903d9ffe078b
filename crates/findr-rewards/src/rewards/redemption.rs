use serde::{Deserialize, Serialize};

/// Checkout request redeeming points against a subtotal; one point is one currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRequest {
    pub available_points: u32,
    #[serde(default)]
    pub requested_points: u32,
    pub subtotal: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionQuote {
    pub points_applied: u32,
    pub discount: u32,
    pub subtotal: u32,
    pub total: u32,
    pub remaining_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RedemptionError {
    #[error("insufficient points: requested {requested}, only {available} available")]
    InsufficientPoints { requested: u32, available: u32 },
}

impl RedemptionRequest {
    pub fn quote(&self) -> Result<RedemptionQuote, RedemptionError> {
        quote(self.available_points, self.requested_points, self.subtotal)
    }
}

pub fn quote(
    available_points: u32,
    requested_points: u32,
    subtotal: u32,
) -> Result<RedemptionQuote, RedemptionError> {
    if requested_points > available_points {
        return Err(RedemptionError::InsufficientPoints {
            requested: requested_points,
            available: available_points,
        });
    }

    Ok(RedemptionQuote {
        points_applied: requested_points,
        discount: requested_points,
        subtotal,
        total: subtotal.saturating_sub(requested_points),
        remaining_points: available_points - requested_points,
    })
}
