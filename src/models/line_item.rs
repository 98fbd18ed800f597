use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    models::cart_snapshot::CartSnapshotItem,
    utils::{
        money::{
            Money, format_locale_money, multiply_money, parse_locale_money, split_amount_label,
        },
        quantity::{StepperState, clamp_quantity, parse_typed_quantity},
    },
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub unit_price: Money,
    pub currency: String,
    quantity: u32,
    persisted_quantity: u32,
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        unit_price: Money,
        currency: impl Into<String>,
        quantity: u32,
    ) -> Self {
        let quantity = clamp_quantity(i64::from(quantity));
        Self {
            id: id.into(),
            unit_price,
            currency: currency.into(),
            quantity,
            persisted_quantity: quantity,
        }
    }

    /// Builds an item from its rendered row. An empty currency attribute
    /// falls back to the label printed after the rendered subtotal.
    pub fn from_snapshot(item: &CartSnapshotItem) -> Self {
        let unit_price = parse_locale_money(&item.price);
        if unit_price == Money::ZERO && !item.price.trim().is_empty() {
            warn!("item {} has unreadable price {:?}", item.id, item.price);
        }

        let currency = match item.currency.as_deref().map(str::trim) {
            Some(currency) if !currency.is_empty() => currency.to_string(),
            _ => item
                .subtotal
                .as_deref()
                .and_then(split_amount_label)
                .map(|(_, label)| label)
                .unwrap_or_default(),
        };

        let quantity = clamp_quantity(parse_typed_quantity(&item.quantity));

        Self {
            id: item.id.clone(),
            unit_price,
            currency,
            quantity,
            persisted_quantity: quantity,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn persisted_quantity(&self) -> u32 {
        self.persisted_quantity
    }

    /// Stores the clamped quantity and reports whether clamping happened.
    pub fn set_quantity(&mut self, requested: i64) -> bool {
        self.quantity = clamp_quantity(requested);
        i64::from(self.quantity) != requested
    }

    pub fn mark_persisted(&mut self) {
        self.persisted_quantity = self.quantity;
    }

    pub fn has_pending_change(&self) -> bool {
        self.quantity != self.persisted_quantity
    }

    pub fn subtotal(&self) -> Money {
        multiply_money(self.unit_price, self.quantity)
    }

    pub fn subtotal_text(&self) -> String {
        labelled(self.subtotal(), &self.currency)
    }

    pub fn stepper(&self) -> StepperState {
        StepperState::for_quantity(self.quantity)
    }
}

pub fn labelled(amount: Money, currency: &str) -> String {
    if currency.is_empty() {
        format_locale_money(amount)
    } else {
        format!("{} {}", format_locale_money(amount), currency)
    }
}
