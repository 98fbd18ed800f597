use serde::{Deserialize, Serialize};

use crate::utils::{money::Money, quantity::StepperState};

/// Everything a single accepted quantity change touches.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartUpdate {
    pub item_id: String,
    pub quantity: u32,
    pub subtotal: Money,
    pub subtotal_text: String,
    pub grand_total: Money,
    pub grand_total_text: String,
    pub item_count: u32,
    pub stepper: StepperState,
    pub pending: bool,
    /// True when the requested quantity had to be clamped.
    pub clamped: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartSummaryItem {
    pub id: String,
    pub quantity: u32,
    pub unit_price: String,
    pub subtotal: String,
    pub currency: String,
    pub pending: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartSummary {
    pub items: Vec<CartSummaryItem>,
    pub grand_total: String,
    pub currency: String,
    pub item_count: u32,
    pub pending_items: Vec<String>,
}
