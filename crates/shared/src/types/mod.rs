//! Shared domain types.

pub mod date;
pub mod id;
pub mod money;
pub mod pagination;

pub use date::DateRange;
pub use id::{BudgetId, LedgerEntryId, OwnerId, PropertyId};
pub use pagination::{PageMeta, PageRequest, PageResponse};
