//! Core accounting logic for Rentfolio.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, classification rules, and statement
//! calculations live here.
//!
//! # Modules
//!
//! - `accounts` - Chart of accounts, classification, and normal balances
//! - `ledger` - Ledger entries and double-entry posting
//! - `statements` - Income statement, balance sheet, cash flow derivation
//! - `budget` - Budget records and variance analysis
//! - `export` - CSV rendering of derived statements

pub mod accounts;
pub mod budget;
pub mod export;
pub mod ledger;
pub mod statements;
