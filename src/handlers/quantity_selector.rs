use crate::utils::quantity::{
    MAX_QUANTITY, MIN_QUANTITY, StepperState, clamp_quantity, parse_typed_quantity,
};

/// The single quantity picker on a product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    quantity: u32,
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self {
            quantity: MIN_QUANTITY,
        }
    }
}

impl QuantitySelector {
    pub fn new(quantity: u32) -> Self {
        Self {
            quantity: clamp_quantity(i64::from(quantity)),
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn decrement(&mut self) -> u32 {
        if self.quantity > MIN_QUANTITY {
            self.quantity -= 1;
        }
        self.quantity
    }

    pub fn increment(&mut self) -> u32 {
        if self.quantity < MAX_QUANTITY {
            self.quantity += 1;
        }
        self.quantity
    }

    pub fn input(&mut self, text: &str) -> u32 {
        self.quantity = clamp_quantity(parse_typed_quantity(text));
        self.quantity
    }

    pub fn stepper(&self) -> StepperState {
        StepperState::for_quantity(self.quantity)
    }
}
