pub mod cart_snapshot;
pub mod cart_update;
pub mod line_item;
