//! Budget repository.

use std::sync::Arc;

use chrono::{Datelike, Utc};

use rentfolio_core::budget::{Budget, BudgetScope, NewBudget};
use rentfolio_shared::types::{BudgetId, OwnerId, PageRequest, PageResponse};
use rentfolio_shared::{AppError, AppResult};

use crate::db::{BudgetRow, Database};

/// Owner-scoped budget access.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: Arc<Database>,
}

impl BudgetRepository {
    /// Creates a repository over the shared database.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Inserts a new budget.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when a property-scoped budget names a
    /// property the owner does not hold.
    pub fn create(&self, owner_id: OwnerId, input: NewBudget) -> AppResult<Budget> {
        let mut tables = self.db.write()?;
        if let BudgetScope::Property(property_id) = input.scope {
            let owned = tables
                .properties
                .iter()
                .any(|p| p.id == property_id && p.owner_id == owner_id);
            if !owned {
                return Err(AppError::NotFound(format!("property {property_id}")));
            }
        }
        let budget = input.into_budget();
        tables.budgets.push(BudgetRow {
            owner_id,
            budget: budget.clone(),
        });
        Ok(budget)
    }

    /// Fetches one budget.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for missing or foreign-owned rows.
    pub fn get(&self, owner_id: OwnerId, id: BudgetId) -> AppResult<Budget> {
        self.db
            .read()?
            .budgets
            .iter()
            .find(|row| row.budget.id == id && row.owner_id == owner_id)
            .map(|row| row.budget.clone())
            .ok_or_else(|| AppError::NotFound(format!("budget {id}")))
    }

    /// Replaces a budget's fields and bumps its update timestamp.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for missing or foreign-owned rows.
    pub fn update(&self, owner_id: OwnerId, mut updated: Budget) -> AppResult<()> {
        updated.updated_at = Utc::now();
        let mut tables = self.db.write()?;
        let row = tables
            .budgets
            .iter_mut()
            .find(|row| row.budget.id == updated.id && row.owner_id == owner_id)
            .ok_or_else(|| AppError::NotFound(format!("budget {}", updated.id)))?;
        updated.created_at = row.budget.created_at;
        row.budget = updated;
        Ok(())
    }

    /// Deletes a budget.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for missing or foreign-owned rows.
    pub fn delete(&self, owner_id: OwnerId, id: BudgetId) -> AppResult<()> {
        let mut tables = self.db.write()?;
        let before = tables.budgets.len();
        tables
            .budgets
            .retain(|row| !(row.budget.id == id && row.owner_id == owner_id));
        if tables.budgets.len() == before {
            return Err(AppError::NotFound(format!("budget {id}")));
        }
        Ok(())
    }

    /// Pages through the owner's budgets, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn list(&self, owner_id: OwnerId, page: PageRequest) -> AppResult<PageResponse<Budget>> {
        let mut budgets: Vec<Budget> = self
            .db
            .read()?
            .budgets
            .iter()
            .filter(|row| row.owner_id == owner_id)
            .map(|row| row.budget.clone())
            .collect();
        budgets.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(page.paginate(&budgets))
    }

    /// Budgets whose execution date falls in the given calendar year.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the store is unavailable.
    pub fn for_year(&self, owner_id: OwnerId, year: i32) -> AppResult<Vec<Budget>> {
        Ok(self
            .db
            .read()?
            .budgets
            .iter()
            .filter(|row| row.owner_id == owner_id && row.budget.execution_date.year() == year)
            .map(|row| row.budget.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use rentfolio_core::budget::BudgetType;
    use rentfolio_shared::types::PropertyId;

    use crate::repositories::property::{NewProperty, PropertyRepository};

    fn new_budget(scope: BudgetScope, year: i32) -> NewBudget {
        NewBudget {
            scope,
            budget_type: BudgetType::Renovation,
            description: Some("Kitchen refresh".to_owned()),
            budget_amount: dec!(15000),
            actual_amount: dec!(0),
            execution_date: NaiveDate::from_ymd_opt(year, 8, 1).unwrap(),
        }
    }

    #[test]
    fn test_property_scope_must_be_owned() {
        let db = Database::new();
        let budgets = BudgetRepository::new(Arc::clone(&db));
        let owner = OwnerId::new();

        let err = budgets
            .create(owner, new_budget(BudgetScope::Property(PropertyId::new()), 2024))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let properties = PropertyRepository::new(db);
        let property = properties
            .create(NewProperty {
                owner_id: owner,
                title: "Unit 1".to_owned(),
                assessed_value: None,
                tax_rate_percent: None,
            })
            .unwrap();
        assert!(budgets
            .create(owner, new_budget(BudgetScope::Property(property.id), 2024))
            .is_ok());
    }

    #[test]
    fn test_portfolio_scopes_need_no_property() {
        let db = Database::new();
        let budgets = BudgetRepository::new(db);
        let owner = OwnerId::new();
        assert!(budgets
            .create(owner, new_budget(BudgetScope::PortfolioFixed, 2024))
            .is_ok());
        assert!(budgets
            .create(owner, new_budget(BudgetScope::SplitEqually, 2024))
            .is_ok());
    }

    #[test]
    fn test_for_year_filters_by_execution_date() {
        let db = Database::new();
        let budgets = BudgetRepository::new(db);
        let owner = OwnerId::new();
        budgets
            .create(owner, new_budget(BudgetScope::PortfolioFixed, 2023))
            .unwrap();
        budgets
            .create(owner, new_budget(BudgetScope::PortfolioFixed, 2024))
            .unwrap();

        let current = budgets.for_year(owner, 2024).unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].execution_date.year(), 2024);
    }

    #[test]
    fn test_update_preserves_created_at() {
        let db = Database::new();
        let budgets = BudgetRepository::new(db);
        let owner = OwnerId::new();
        let created = budgets
            .create(owner, new_budget(BudgetScope::PortfolioFixed, 2024))
            .unwrap();

        let mut edited = created.clone();
        edited.actual_amount = dec!(4200);
        budgets.update(owner, edited).unwrap();

        let fetched = budgets.get(owner, created.id).unwrap();
        assert_eq!(fetched.actual_amount, dec!(4200));
        assert_eq!(fetched.created_at, created.created_at);
    }
}
