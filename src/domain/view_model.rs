//! The query-driven view over the catalogue that the page renders.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{
    catalogue::Catalogue,
    entities::{Destination, DestinationId},
    query::{
        visible_indices, BudgetFilter, CatalogueQuery, QueryParseError, SecurityFilter, SortKey,
    },
};

/// Catalogue plus the active query, with the visible list kept in sync.
///
/// Every mutation recomputes the visible list before returning, so readers
/// never observe a list that lags the query.
#[derive(Clone, Debug)]
pub struct CatalogueView {
    catalogue: Arc<Catalogue>,
    query: CatalogueQuery,
    /// Indices into `catalogue.destinations()`, in display order.
    visible: Vec<usize>,
}

impl CatalogueView {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        let mut view = Self {
            catalogue,
            query: CatalogueQuery::default(),
            visible: Vec::new(),
        };
        view.recompute();
        view
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn query(&self) -> &CatalogueQuery {
        &self.query
    }

    pub fn visible(&self) -> impl Iterator<Item = &Destination> + '_ {
        let destinations = self.catalogue.destinations();
        self.visible.iter().map(move |&idx| &destinations[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn destination(&self, id: DestinationId) -> Option<&Destination> {
        self.catalogue.get(id)
    }

    pub fn results_label(&self) -> String {
        results_label(self.visible.len())
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.recompute();
    }

    pub fn set_budget_filter(&mut self, filter: BudgetFilter) {
        self.query.budget = filter;
        self.recompute();
    }

    pub fn set_security_filter(&mut self, filter: SecurityFilter) {
        self.query.security = filter;
        self.recompute();
    }

    pub fn set_sort_key(&mut self, sort_by: SortKey) {
        self.query.sort_by = sort_by;
        self.recompute();
    }

    /// Applies a raw budget select value; unknown values keep the current filter.
    pub fn apply_budget_value(&mut self, value: &str) -> Result<(), QueryParseError> {
        let filter = value
            .parse()
            .inspect_err(|err| warn!("ignoring budget select: {err}"))?;
        self.set_budget_filter(filter);
        Ok(())
    }

    /// Applies a raw security select value; unknown values keep the current filter.
    pub fn apply_security_value(&mut self, value: &str) -> Result<(), QueryParseError> {
        let filter = value
            .parse()
            .inspect_err(|err| warn!("ignoring security select: {err}"))?;
        self.set_security_filter(filter);
        Ok(())
    }

    pub fn apply_sort_value(&mut self, value: &str) {
        let sort_by = SortKey::from_value(value);
        if sort_by == SortKey::Catalogue {
            warn!("unrecognized sort value {value:?}; keeping catalogue order");
        }
        self.set_sort_key(sort_by);
    }

    /// Resets all four query fields at once.
    pub fn clear_filters(&mut self) {
        self.query = CatalogueQuery::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        let destinations = self.catalogue.destinations();
        self.visible = visible_indices(destinations, &self.query);
        debug!(
            visible = self.visible.len(),
            total = destinations.len(),
            sort = self.query.sort_by.value(),
            "recomputed visible destinations"
        );
    }
}

pub fn results_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("Showing {count} destination{suffix}")
}
