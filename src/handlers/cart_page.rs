use serde::Serialize;
use tracing::{info, warn};

use crate::{
    engine::{CartEngine, CartError},
    events::quantity_change::QuantityEvent,
    models::cart_update::CartUpdate,
    utils::display::CartDisplay,
};

/// What the checkout button should do.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CheckoutGate {
    Proceed,
    ConfirmUnsaved { items: Vec<String> },
}

/// Binds one cart engine to the surfaces it is shown on.
pub struct CartPage<D: CartDisplay> {
    engine: CartEngine,
    display: D,
    item_count_suffix: String,
}

impl<D: CartDisplay> CartPage<D> {
    pub fn new(engine: CartEngine, display: D, item_count_suffix: impl Into<String>) -> Self {
        Self {
            engine,
            display,
            item_count_suffix: item_count_suffix.into(),
        }
    }

    pub fn engine(&self) -> &CartEngine {
        &self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Pushes the initial state of every surface.
    pub fn render(&mut self) {
        for item in self.engine.items() {
            self.display.show_subtotal(&item.id, &item.subtotal_text());
            self.display.show_stepper(&item.id, item.stepper());
            self.display.show_pending(&item.id, item.has_pending_change());
        }
        let total = self.engine.grand_total_text();
        let count = self.engine.item_count();
        self.show_totals(&total, count);
    }

    pub fn apply(&mut self, event: &QuantityEvent) -> Result<CartUpdate, CartError> {
        let update = match event {
            QuantityEvent::Step { id, delta } => self.engine.step(id, *delta),
            QuantityEvent::Typed { id, text } => self.engine.type_quantity(id, text),
            QuantityEvent::Set { id, quantity } => self.engine.set_quantity(id, *quantity),
        }?;

        if update.clamped {
            warn!(
                "[{}] quantity request clamped to {}",
                update.item_id, update.quantity
            );
        }

        self.display
            .show_subtotal(&update.item_id, &update.subtotal_text);
        self.show_totals(&update.grand_total_text, update.item_count);
        self.display.show_pending(&update.item_id, update.pending);
        self.display.show_stepper(&update.item_id, update.stepper);

        Ok(update)
    }

    /// Records that an item's form was submitted.
    pub fn mark_saved(&mut self, id: &str) -> Result<(), CartError> {
        self.engine.mark_persisted(id)?;
        self.display.show_pending(id, false);
        Ok(())
    }

    pub fn checkout(&self) -> CheckoutGate {
        let items = self.engine.pending_items();
        if items.is_empty() {
            CheckoutGate::Proceed
        } else {
            info!("Checkout held back by {} unsaved items", items.len());
            CheckoutGate::ConfirmUnsaved { items }
        }
    }

    fn show_totals(&mut self, grand_total_text: &str, count: u32) {
        // without a currency label the rendered total is left alone
        if !self.engine.currency().is_empty() {
            self.display.show_grand_total(grand_total_text);
        }
        let count_text = format!("{count} {}", self.item_count_suffix);
        self.display.show_item_count(count, count_text.trim_end());
    }
}
