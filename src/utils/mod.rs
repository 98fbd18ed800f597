pub mod display;
pub mod money;
pub mod quantity;
