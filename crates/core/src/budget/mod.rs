//! Budget records and variance analysis.
//!
//! Budgets are display-only: they are compared against ledger aggregates
//! but never posted as transactions.

pub mod types;
pub mod variance;

pub use types::{Budget, BudgetScope, BudgetType, NewBudget};
pub use variance::{BudgetVariance, VarianceType};
