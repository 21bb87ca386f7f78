//! Owner-scoped repositories over the in-memory tables.

pub mod budget;
pub mod ledger;
pub mod property;

pub use budget::BudgetRepository;
pub use ledger::{ExpenseListing, ExpenseQuery, ExpenseSort, LedgerRepository, SortOrder};
pub use property::{NewProperty, PropertyRepository};
