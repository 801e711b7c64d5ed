//! The sort/view model: the current collection plus the active sort
//! directive, and the ordered read-only view derived from them.

use crate::config::DF;
use crate::domain::{SortDirective, SortField, TokenRecord};

#[derive(Default)]
pub struct ScreenerState {
    records: Vec<TokenRecord>,
    directive: SortDirective,
}

impl ScreenerState {
    pub fn new(directive: SortDirective) -> Self {
        Self {
            records: Vec::new(),
            directive,
        }
    }

    /// Wholesale collection replacement: the initial batch, or the
    /// settled result of a feed tick.
    pub fn replace(&mut self, records: Vec<TokenRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[TokenRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn directive(&self) -> SortDirective {
        self.directive
    }

    /// The only mutation entry point for the directive.
    pub fn request_sort(&mut self, field: SortField) {
        self.directive.request(field);
        if DF.log_sort_requests {
            log::info!("Sort request {:?} -> {:?}", field, self.directive);
        }
    }

    /// Ordered view over the same records. Stable: ties keep their relative
    /// input order regardless of direction. With no active field the input
    /// order is preserved as-is.
    pub fn sorted_view(&self) -> Vec<&TokenRecord> {
        let mut view: Vec<&TokenRecord> = self.records.iter().collect();
        if self.directive.field.is_some() {
            view.sort_by(|a, b| self.directive.ordering(a, b));
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Chain, SortDirection, TokenId};

    fn record(id: u32, name: &str, fdv: f64) -> TokenRecord {
        TokenRecord {
            id: TokenId::new(id),
            name: name.to_string(),
            symbol: format!("TKN{id}"),
            chain: Chain::Base,
            price: id as f64,
            last_price: None,
            change_24h: 0.0,
            liquidity: 50_000.0,
            fdv,
            age: "30m".to_string(),
            volume_5m: 0.0,
        }
    }

    fn state_with(records: Vec<TokenRecord>, directive: SortDirective) -> ScreenerState {
        let mut state = ScreenerState::new(directive);
        state.replace(records);
        state
    }

    fn ids(view: &[&TokenRecord]) -> Vec<u32> {
        view.iter().map(|t| t.id.value()).collect()
    }

    #[test]
    fn fdv_descending_orders_valuations_highest_first() {
        let state = state_with(
            vec![
                record(1, "Alpha", 500_000.0),
                record(2, "Beta", 25_000_000.0),
                record(3, "Gamma", 1_000_000.0),
            ],
            SortDirective::default(), // fdv descending
        );
        assert_eq!(ids(&state.sorted_view()), vec![2, 3, 1]);
    }

    #[test]
    fn sort_is_stable_for_ties_in_both_directions() {
        let records = vec![
            record(1, "Alpha", 1_000_000.0),
            record(2, "Beta", 1_000_000.0),
            record(3, "Gamma", 1_000_000.0),
            record(4, "Delta", 2_000_000.0),
        ];

        let ascending = state_with(
            records.clone(),
            SortDirective {
                field: Some(SortField::Fdv),
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(ids(&ascending.sorted_view()), vec![1, 2, 3, 4]);

        let descending = state_with(
            records,
            SortDirective {
                field: Some(SortField::Fdv),
                direction: SortDirection::Descending,
            },
        );
        // The tie block keeps its input order; only the comparison flips.
        assert_eq!(ids(&descending.sorted_view()), vec![4, 1, 2, 3]);
    }

    #[test]
    fn absent_field_preserves_input_order() {
        let state = state_with(
            vec![
                record(3, "Gamma", 3.0),
                record(1, "Alpha", 1.0),
                record(2, "Beta", 2.0),
            ],
            SortDirective {
                field: None,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(ids(&state.sorted_view()), vec![3, 1, 2]);
    }

    #[test]
    fn sorted_view_is_idempotent_between_mutations() {
        let state = state_with(
            vec![
                record(2, "Beta", 2.0),
                record(1, "Alpha", 1.0),
                record(3, "Gamma", 3.0),
            ],
            SortDirective::default(),
        );
        assert_eq!(ids(&state.sorted_view()), ids(&state.sorted_view()));
    }

    #[test]
    fn request_sort_round_trip_changes_view_direction() {
        let mut state = state_with(
            vec![
                record(1, "Alpha", 1.0),
                record(2, "Beta", 2.0),
                record(3, "Gamma", 3.0),
            ],
            SortDirective::default(),
        );

        state.request_sort(SortField::Price);
        assert_eq!(ids(&state.sorted_view()), vec![1, 2, 3]);

        state.request_sort(SortField::Price);
        assert_eq!(ids(&state.sorted_view()), vec![3, 2, 1]);

        state.request_sort(SortField::Price);
        assert_eq!(ids(&state.sorted_view()), vec![1, 2, 3]);
    }

    #[test]
    fn replace_swaps_the_collection_wholesale() {
        let mut state = state_with(vec![record(1, "Alpha", 1.0)], SortDirective::default());
        assert_eq!(state.len(), 1);

        state.replace(vec![record(5, "Echo", 1.0), record(6, "Foxtrot", 2.0)]);
        assert_eq!(state.len(), 2);
        assert_eq!(state.records()[0].id.value(), 5);

        state.clear();
        assert!(state.is_empty());
    }
}
