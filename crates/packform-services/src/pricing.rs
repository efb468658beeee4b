//! Order price calculation.
//!
//! Pure math over template data: base price × material multiplier × size
//! factor, with volume discounts by quantity tier. Kept client-side so the
//! order panel can show live totals without a network round trip; the
//! service recomputes on submit.

use crate::error::{ServiceError, ServiceResult};
use crate::templates::TemplateDescriptor;
use serde::{Deserialize, Serialize};

/// Reference face area (100×100 mm) the base price is quoted against.
const BASELINE_AREA_MM2: f64 = 10_000.0;

/// Floor for the size factor so tiny labels don't price at zero.
const MIN_SIZE_FACTOR: f64 = 0.25;

/// Volume tiers: at or above the quantity, the discount fraction applies.
const QUANTITY_TIERS: &[(u32, f64)] = &[(1000, 0.20), (500, 0.15), (250, 0.10), (100, 0.05)];

/// A computed order quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub unit_price: f64,
    pub quantity: u32,
    /// Applied volume discount as a fraction (0.05 = 5%).
    pub discount: f64,
    pub total: f64,
}

/// Discount fraction for a quantity.
pub fn tier_discount(quantity: u32) -> f64 {
    QUANTITY_TIERS
        .iter()
        .find(|(threshold, _)| quantity >= *threshold)
        .map(|(_, discount)| *discount)
        .unwrap_or(0.0)
}

/// Price scaling by face area, sub-linear so large formats stay sane.
fn size_factor(area_mm2: f64) -> f64 {
    (area_mm2 / BASELINE_AREA_MM2).sqrt().max(MIN_SIZE_FACTOR)
}

/// Quote an order against a template's catalog data.
///
/// Unknown size/material IDs and a zero quantity are validation errors.
pub fn quote(
    template: &TemplateDescriptor,
    size_id: &str,
    material_id: &str,
    quantity: u32,
) -> ServiceResult<Quote> {
    if quantity == 0 {
        return Err(ServiceError::Validation(
            "quantity must be at least 1".into(),
        ));
    }
    let size = template
        .size(size_id)
        .ok_or_else(|| ServiceError::Validation(format!("unknown size: {size_id}")))?;
    let material = template
        .material(material_id)
        .ok_or_else(|| ServiceError::Validation(format!("unknown material: {material_id}")))?;

    let unit_price =
        template.price.base * material.price_multiplier * size_factor(size.area_mm2());
    let discount = tier_discount(quantity);
    let total = unit_price * quantity as f64 * (1.0 - discount);

    Ok(Quote {
        unit_price,
        quantity,
        discount,
        total,
    })
}
