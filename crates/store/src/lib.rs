//! Persistence and statement generation for Rentfolio.
//!
//! An in-memory store with owner-scoped repositories over the ledger,
//! properties, and budgets, plus the statement generator that wires the
//! pure statement math to stored entries. Every repository call takes an
//! `OwnerId`; rows belonging to other owners are invisible to it.

pub mod db;
pub mod repositories;
pub mod statements;

pub use db::Database;
pub use repositories::{BudgetRepository, LedgerRepository, NewProperty, PropertyRepository};
pub use statements::{FinancialOverview, StatementGenerator};
