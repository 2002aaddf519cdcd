//! Common types used across the application.

pub mod money;
pub mod month;
pub mod pagination;

pub use money::{CurrencyCode, format_amount};
pub use month::YearMonth;
pub use pagination::{PageMeta, PageRequest, PageResponse};
