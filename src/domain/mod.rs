mod sort;
mod token;

pub use sort::{SortDirection, SortDirective, SortField};
pub use token::{Chain, PriceTrend, TokenId, TokenRecord};
