use serde::{Deserialize, Serialize};
use tracing::debug;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 99;

/// Which stepper buttons may still be pressed for a quantity.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct StepperState {
    pub decrement_enabled: bool,
    pub increment_enabled: bool,
}

impl StepperState {
    pub fn for_quantity(quantity: u32) -> Self {
        Self {
            decrement_enabled: quantity > MIN_QUANTITY,
            increment_enabled: quantity < MAX_QUANTITY,
        }
    }
}

pub fn clamp_quantity(requested: i64) -> u32 {
    let clamped = requested.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY));
    if clamped != requested {
        debug!("quantity {requested} outside {MIN_QUANTITY}..={MAX_QUANTITY}, clamped to {clamped}");
    }
    clamped as u32
}

/// Reads a typed quantity the way a number field does: the leading integer
/// is taken, and empty, non-numeric or zero input counts as 1. The result is
/// not clamped.
pub fn parse_typed_quantity(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(0) => 1,
        Ok(value) => sign * value,
        // overflowing digit runs are still far above the bound
        Err(_) if end > 0 => sign * i64::MAX,
        Err(_) => 1,
    }
}
