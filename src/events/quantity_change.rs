use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QuantityEventError {
    #[error("Missing item id in event: {0}")]
    MissingId(String),

    #[error("Invalid step amount in event: {0}")]
    InvalidStep(String),

    #[error("Unrecognised event: {0}")]
    Unrecognised(String),
}

/// A user action on one cart row, addressed by item id.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityEvent {
    Step { id: String, delta: i64 },
    Typed { id: String, text: String },
    Set { id: String, quantity: i64 },
}

impl QuantityEvent {
    pub fn item_id(&self) -> &str {
        match self {
            QuantityEvent::Step { id, .. }
            | QuantityEvent::Typed { id, .. }
            | QuantityEvent::Set { id, .. } => id,
        }
    }
}

/// `tea:+1` / `tea:-2` step, `tea:=5` sets, `tea=7` types into the field.
impl FromStr for QuantityEvent {
    type Err = QuantityEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((id, rest)) = s.split_once(':') {
            if id.is_empty() {
                return Err(QuantityEventError::MissingId(s.to_string()));
            }

            if let Some(quantity) = rest.strip_prefix('=') {
                let quantity = quantity
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| QuantityEventError::InvalidStep(s.to_string()))?;
                return Ok(QuantityEvent::Set {
                    id: id.to_string(),
                    quantity,
                });
            }

            if !rest.starts_with(['+', '-']) {
                return Err(QuantityEventError::InvalidStep(s.to_string()));
            }

            let delta = rest
                .trim()
                .parse::<i64>()
                .map_err(|_| QuantityEventError::InvalidStep(s.to_string()))?;

            return Ok(QuantityEvent::Step {
                id: id.to_string(),
                delta,
            });
        }

        if let Some((id, text)) = s.split_once('=') {
            if id.is_empty() {
                return Err(QuantityEventError::MissingId(s.to_string()));
            }
            return Ok(QuantityEvent::Typed {
                id: id.to_string(),
                text: text.to_string(),
            });
        }

        Err(QuantityEventError::Unrecognised(s.to_string()))
    }
}
