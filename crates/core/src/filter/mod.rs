//! The multi-dimensional filter engine.
//!
//! Filtering happens over the raw collections, before normalization, because
//! two of the dimensions (counterparty, category) only exist on one of the
//! two record shapes.

pub mod service;
pub mod types;

pub use service::{FilterService, FilteredSet};
pub use types::{
    CategoryFilter, CounterpartyFilter, CurrencyFilter, FilterState, KindFilter, MonthFilter,
    PaymentFilter,
};
