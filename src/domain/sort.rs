use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::domain::token::TokenRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum SortField {
    Name,
    Price,
    Change24h,
    Liquidity,
    Fdv,
    Age,
    Volume5m,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Token",
            Self::Price => "Price",
            Self::Change24h => "24h",
            Self::Liquidity => "Liquidity",
            Self::Fdv => "FDV",
            Self::Age => "Age",
            Self::Volume5m => "Volume (5m)",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::Name => "Token name and symbol",
            Self::Price => "Current token price",
            Self::Change24h => "Price change in the last 24 hours",
            Self::Liquidity => "Total liquidity available",
            Self::Fdv => "Fully Diluted Valuation",
            Self::Age => "Time since pair was created",
            Self::Volume5m => "Trading volume in the last 5 minutes",
        }
    }

    /// Natural ascending ordering of the selected field:
    /// lexicographic for strings, numeric for numbers.
    pub fn compare(&self, a: &TokenRecord, b: &TokenRecord) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Age => a.age.cmp(&b.age),
            Self::Price => cmp_f64(a.price, b.price),
            Self::Change24h => cmp_f64(a.change_24h, b.change_24h),
            Self::Liquidity => cmp_f64(a.liquidity, b.liquidity),
            Self::Fdv => cmp_f64(a.fdv, b.fdv),
            Self::Volume5m => cmp_f64(a.volume_5m, b.volume_5m),
        }
    }
}

// NaN compares as equal so the view stays renderable on malformed input.
#[inline]
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// The active field + direction controlling table order.
/// `field == None` means "no sort applied": the view keeps input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl Default for SortDirective {
    fn default() -> Self {
        Self {
            field: Some(SortField::Fdv),
            direction: SortDirection::Descending, // Biggest valuations first
        }
    }
}

impl SortDirective {
    /// The only mutation entry point. Requesting the active ascending field
    /// flips to descending; anything else selects the field ascending.
    pub fn request(&mut self, field: SortField) {
        if self.field == Some(field) && self.direction == SortDirection::Ascending {
            self.direction = SortDirection::Descending;
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Full ordering for a pair of records under this directive.
    /// Descending reverses the comparison outcome, not the final sequence,
    /// so ties keep their relative input order in both directions.
    pub fn ordering(&self, a: &TokenRecord, b: &TokenRecord) -> Ordering {
        let Some(field) = self.field else {
            return Ordering::Equal;
        };
        let ord = field.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    /// Header arrow for the active field, if any.
    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        if self.field != Some(field) {
            return None;
        }
        Some(match self.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::{Chain, TokenId};

    fn record(id: u32, name: &str, fdv: f64) -> TokenRecord {
        TokenRecord {
            id: TokenId::new(id),
            name: name.to_string(),
            symbol: format!("TKN{id}"),
            chain: Chain::Ethereum,
            price: 1.0,
            last_price: None,
            change_24h: 0.0,
            liquidity: 100_000.0,
            fdv,
            age: "10m".to_string(),
            volume_5m: 0.0,
        }
    }

    #[test]
    fn request_toggles_with_period_two() {
        let mut directive = SortDirective::default();
        directive.request(SortField::Price);
        assert_eq!(directive.field, Some(SortField::Price));
        assert_eq!(directive.direction, SortDirection::Ascending);

        directive.request(SortField::Price);
        assert_eq!(directive.direction, SortDirection::Descending);

        directive.request(SortField::Price);
        assert_eq!(directive.direction, SortDirection::Ascending);
    }

    #[test]
    fn request_for_new_field_resets_to_ascending() {
        let mut directive = SortDirective::default();
        directive.request(SortField::Price);
        directive.request(SortField::Price); // now descending
        directive.request(SortField::Liquidity);
        assert_eq!(directive.field, Some(SortField::Liquidity));
        assert_eq!(directive.direction, SortDirection::Ascending);
    }

    #[test]
    fn descending_reverses_comparison_but_keeps_ties_equal() {
        let a = record(1, "Aardvark", 500_000.0);
        let b = record(2, "Zebra", 500_000.0);
        let directive = SortDirective {
            field: Some(SortField::Fdv),
            direction: SortDirection::Descending,
        };
        // Equal keys stay Equal under reversal, which is what keeps the
        // stable sort from reshuffling ties.
        assert_eq!(directive.ordering(&a, &b), Ordering::Equal);

        let c = record(3, "Coyote", 1_000_000.0);
        assert_eq!(directive.ordering(&c, &a), Ordering::Less);
        assert_eq!(directive.ordering(&a, &c), Ordering::Greater);
    }

    #[test]
    fn absent_field_orders_everything_equal() {
        let a = record(1, "Aardvark", 1.0);
        let b = record(2, "Zebra", 2.0);
        let directive = SortDirective {
            field: None,
            direction: SortDirection::Ascending,
        };
        assert_eq!(directive.ordering(&a, &b), Ordering::Equal);
    }

    #[test]
    fn nan_keys_compare_equal() {
        let mut a = record(1, "Aardvark", f64::NAN);
        let b = record(2, "Zebra", 2.0);
        let directive = SortDirective {
            field: Some(SortField::Fdv),
            direction: SortDirection::Ascending,
        };
        assert_eq!(directive.ordering(&a, &b), Ordering::Equal);
        a.fdv = 1.0;
        assert_eq!(directive.ordering(&a, &b), Ordering::Less);
    }

    #[test]
    fn age_orders_lexicographically() {
        let mut a = record(1, "Aardvark", 1.0);
        let mut b = record(2, "Zebra", 1.0);
        a.age = "9m".to_string();
        b.age = "10m".to_string();
        let directive = SortDirective {
            field: Some(SortField::Age),
            direction: SortDirection::Ascending,
        };
        // String ordering, as displayed: "10m" < "9m".
        assert_eq!(directive.ordering(&b, &a), Ordering::Less);
    }
}
