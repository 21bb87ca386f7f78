//! Derived financial statements.
//!
//! Income statement, balance sheet, and cash flow statement, all computed
//! from reconciled ledger entries within an inclusive date range. The
//! computations are pure: an unchanged ledger yields identical statements.

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::StatementService;
pub use types::{BalanceSheet, CashFlowStatement, CategoryLine, IncomeStatement};
