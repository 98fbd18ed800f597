use tracing::info;

use crate::utils::quantity::StepperState;

/// The surfaces a cart page writes to after every change.
pub trait CartDisplay {
    fn show_subtotal(&mut self, item_id: &str, text: &str);
    fn show_grand_total(&mut self, text: &str);
    fn show_item_count(&mut self, count: u32, text: &str);
    fn show_stepper(&mut self, item_id: &str, stepper: StepperState);
    fn show_pending(&mut self, item_id: &str, pending: bool);
}

/// Logs every surface update.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl CartDisplay for TerminalDisplay {
    fn show_subtotal(&mut self, item_id: &str, text: &str) {
        info!("[{item_id}] subtotal {text}");
    }

    fn show_grand_total(&mut self, text: &str) {
        info!("cart total {text}");
    }

    fn show_item_count(&mut self, _count: u32, text: &str) {
        info!("item count {text}");
    }

    fn show_stepper(&mut self, item_id: &str, stepper: StepperState) {
        info!(
            "[{item_id}] minus {} plus {}",
            if stepper.decrement_enabled { "on" } else { "off" },
            if stepper.increment_enabled { "on" } else { "off" }
        );
    }

    fn show_pending(&mut self, item_id: &str, pending: bool) {
        if pending {
            info!("[{item_id}] has unsaved quantity");
        }
    }
}
