use thiserror::Error;
use tracing::{debug, info};

use crate::{
    models::{
        cart_snapshot::CartSnapshot,
        cart_update::{CartSummary, CartSummaryItem, CartUpdate},
        line_item::{LineItem, labelled},
    },
    utils::{
        money::{Money, format_locale_money, parse_locale_money, split_amount_label, sum_money},
        quantity::parse_typed_quantity,
    },
};

#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    #[error("No line item with id {0}")]
    UnknownItem(String),
}

/// Line items of one rendered cart, keyed by id, with their totals.
#[derive(Debug, Clone, Default)]
pub struct CartEngine {
    items: Vec<LineItem>,
    currency: String,
    original_total: Option<Money>,
}

impl CartEngine {
    pub fn new(items: Vec<LineItem>, currency: impl Into<String>) -> Self {
        Self {
            items,
            currency: currency.into(),
            original_total: None,
        }
    }

    pub fn from_snapshot(snapshot: &CartSnapshot) -> Self {
        let items: Vec<LineItem> = snapshot.items.iter().map(LineItem::from_snapshot).collect();

        let (currency, original_total) = match &snapshot.total {
            Some(total) => match total.currency.as_deref().map(str::trim) {
                Some(currency) if !currency.is_empty() => (
                    currency.to_string(),
                    total.original_total.as_deref().map(parse_locale_money),
                ),
                _ => match total.text.as_deref().and_then(split_amount_label) {
                    Some((amount, label)) => (label, Some(amount)),
                    None => (String::new(), None),
                },
            },
            None => (String::new(), None),
        };

        info!(
            "Cart loaded with {} items, original total {:?} {}",
            items.len(),
            original_total.map(format_locale_money),
            currency
        );

        Self {
            items,
            currency,
            original_total,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Result<&LineItem, CartError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CartError::UnknownItem(id.to_string()))
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut LineItem, CartError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CartError::UnknownItem(id.to_string()))
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Total as rendered before any change on this page.
    pub fn original_total(&self) -> Option<Money> {
        self.original_total
    }

    pub fn subtotal(&self, id: &str) -> Result<Money, CartError> {
        Ok(self.item(id)?.subtotal())
    }

    /// Sum of the per-item subtotals, each already rounded to the cent.
    pub fn grand_total(&self) -> Money {
        sum_money(self.items.iter().map(LineItem::subtotal))
    }

    pub fn grand_total_text(&self) -> String {
        labelled(self.grand_total(), &self.currency)
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    pub fn set_quantity(&mut self, id: &str, requested: i64) -> Result<CartUpdate, CartError> {
        let item = self.item_mut(id)?;
        let clamped = item.set_quantity(requested);

        debug!(
            "item {} quantity {} (requested {}, persisted {})",
            id,
            item.quantity(),
            requested,
            item.persisted_quantity()
        );

        let item = item.clone();
        let grand_total = self.grand_total();

        Ok(CartUpdate {
            item_id: item.id.clone(),
            quantity: item.quantity(),
            subtotal: item.subtotal(),
            subtotal_text: item.subtotal_text(),
            grand_total,
            grand_total_text: labelled(grand_total, &self.currency),
            item_count: self.item_count(),
            stepper: item.stepper(),
            pending: item.has_pending_change(),
            clamped,
        })
    }

    pub fn step(&mut self, id: &str, delta: i64) -> Result<CartUpdate, CartError> {
        let current = i64::from(self.item(id)?.quantity());
        self.set_quantity(id, current.saturating_add(delta))
    }

    pub fn type_quantity(&mut self, id: &str, text: &str) -> Result<CartUpdate, CartError> {
        self.set_quantity(id, parse_typed_quantity(text))
    }

    pub fn mark_persisted(&mut self, id: &str) -> Result<(), CartError> {
        self.item_mut(id)?.mark_persisted();
        Ok(())
    }

    pub fn pending_items(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.has_pending_change())
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn has_pending_changes(&self) -> bool {
        self.items.iter().any(LineItem::has_pending_change)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self
                .items
                .iter()
                .map(|item| CartSummaryItem {
                    id: item.id.clone(),
                    quantity: item.quantity(),
                    unit_price: format_locale_money(item.unit_price),
                    subtotal: format_locale_money(item.subtotal()),
                    currency: item.currency.clone(),
                    pending: item.has_pending_change(),
                })
                .collect(),
            grand_total: format_locale_money(self.grand_total()),
            currency: self.currency.clone(),
            item_count: self.item_count(),
            pending_items: self.pending_items(),
        }
    }
}
