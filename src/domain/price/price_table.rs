//! Read-only snapshot of token unit prices keyed by address

use num_rational::BigRational;
use std::collections::HashMap;

/// Token address (lowercase) -> fractional unit price
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    prices: HashMap<String, BigRational>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: &str, price: BigRational) {
        self.prices.insert(address.trim().to_lowercase(), price);
    }

    pub fn get(&self, address: &str) -> Option<&BigRational> {
        self.prices.get(&address.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(String, BigRational)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (String, BigRational)>>(iter: I) -> Self {
        let mut table = PriceTable::new();
        for (address, price) in iter {
            table.insert(&address, price);
        }
        table
    }
}
