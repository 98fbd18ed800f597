pub mod quantity_change;
