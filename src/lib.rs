pub mod config;
pub mod engine;
pub mod events;
pub mod handlers;
pub mod models;
pub mod utils;

pub use engine::{CartEngine, CartError};
pub use utils::money::{Money, format_locale_money, multiply_money, parse_locale_money, sum_money};
