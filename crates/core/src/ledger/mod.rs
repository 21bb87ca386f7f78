//! Double-entry ledger model and posting.
//!
//! This module implements the transaction side of the system:
//! - Ledger entries with denormalized classification
//! - The double-entry poster (one user leg in, a balanced pair out)
//! - Grouping helpers for categorized expense views
//! - Error types for ledger operations

pub mod entry;
pub mod error;
pub mod posting;
pub mod summary;

#[cfg(test)]
mod posting_props;

pub use entry::{LedgerEntry, NewLedgerEntry};
pub use error::LedgerError;
pub use posting::{PostedPair, PostingInput, PostingService};
pub use summary::{expense_summary, group_by_sub_category, ExpenseSummary};
