//! Destination catalogue, query rules and the view model that ties them together.

pub mod catalogue;
pub mod entities;
pub mod query;
pub mod schema;
pub mod view_model;

#[allow(unused_imports)]
pub use catalogue::{Catalogue, CatalogueError};
#[allow(unused_imports)]
pub use entities::{Budget, Category, Destination, DestinationId, Security};
#[allow(unused_imports)]
pub use query::{
    budget_filter_label, security_filter_label, CategoryFilter, CatalogueQuery, QueryParseError,
    SortKey,
};
#[allow(unused_imports)]
pub use view_model::CatalogueView;
