//! Price domain - token price snapshots

mod price_table;

pub use price_table::PriceTable;
