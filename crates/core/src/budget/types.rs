//! Budget data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentfolio_shared::types::{money::round2, BudgetId, PropertyId};

/// Budget type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    /// Renovation work.
    Renovation,
    /// Recurring upkeep.
    Maintenance,
    /// New development.
    Development,
}

/// What a budget applies to.
///
/// A tagged scope, so "whole portfolio" and "split across properties"
/// are explicit variants rather than reserved property ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "property_id", rename_all = "snake_case")]
pub enum BudgetScope {
    /// One specific property.
    Property(PropertyId),
    /// The whole portfolio as a single fixed amount.
    PortfolioFixed,
    /// Split equally across all of the owner's properties.
    SplitEqually,
}

impl std::fmt::Display for BudgetScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Property(id) => write!(f, "Property {id}"),
            Self::PortfolioFixed => write!(f, "Portfolio (Fixed Amount)"),
            Self::SplitEqually => write!(f, "All Properties (Split Equally)"),
        }
    }
}

/// A budget record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// What the budget applies to.
    pub scope: BudgetScope,
    /// Budget type.
    pub budget_type: BudgetType,
    /// Optional description.
    pub description: Option<String>,
    /// Planned amount.
    pub budget_amount: Decimal,
    /// Amount actually spent.
    pub actual_amount: Decimal,
    /// Planned execution date.
    pub execution_date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// The planned amount attributable to one property.
    ///
    /// `SplitEqually` divides over the owner's property count (zero
    /// properties budget nothing); other scopes carry the full amount.
    #[must_use]
    pub fn per_property_amount(&self, property_count: u32) -> Decimal {
        match self.scope {
            BudgetScope::SplitEqually => {
                if property_count == 0 {
                    Decimal::ZERO
                } else {
                    round2(self.budget_amount / Decimal::from(property_count))
                }
            }
            BudgetScope::Property(_) | BudgetScope::PortfolioFixed => self.budget_amount,
        }
    }
}

/// Input form for creating a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudget {
    /// What the budget applies to.
    pub scope: BudgetScope,
    /// Budget type.
    pub budget_type: BudgetType,
    /// Optional description.
    pub description: Option<String>,
    /// Planned amount.
    pub budget_amount: Decimal,
    /// Amount actually spent so far.
    pub actual_amount: Decimal,
    /// Planned execution date.
    pub execution_date: NaiveDate,
}

impl NewBudget {
    /// Materializes a budget record with a fresh id and timestamps.
    #[must_use]
    pub fn into_budget(self) -> Budget {
        let now = Utc::now();
        Budget {
            id: BudgetId::new(),
            scope: self.scope,
            budget_type: self.budget_type,
            description: self.description,
            budget_amount: self.budget_amount,
            actual_amount: self.actual_amount,
            execution_date: self.execution_date,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn budget(scope: BudgetScope, amount: Decimal) -> Budget {
        NewBudget {
            scope,
            budget_type: BudgetType::Maintenance,
            description: None,
            budget_amount: amount,
            actual_amount: Decimal::ZERO,
            execution_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        }
        .into_budget()
    }

    #[test]
    fn test_split_equally_divides_by_property_count() {
        let b = budget(BudgetScope::SplitEqually, dec!(9000));
        assert_eq!(b.per_property_amount(3), dec!(3000));
        assert_eq!(b.per_property_amount(0), Decimal::ZERO);
    }

    #[test]
    fn test_split_rounds_to_cents() {
        let b = budget(BudgetScope::SplitEqually, dec!(100));
        assert_eq!(b.per_property_amount(3), dec!(33.33));
    }

    #[test]
    fn test_fixed_scopes_keep_full_amount() {
        let fixed = budget(BudgetScope::PortfolioFixed, dec!(5000));
        assert_eq!(fixed.per_property_amount(4), dec!(5000));

        let single = budget(BudgetScope::Property(PropertyId::new()), dec!(1200));
        assert_eq!(single.per_property_amount(4), dec!(1200));
    }

    #[test]
    fn test_scope_wire_format_is_tagged() {
        let fixed = serde_json::to_value(BudgetScope::PortfolioFixed).unwrap();
        assert_eq!(fixed, serde_json::json!({ "kind": "portfolio_fixed" }));

        let id = PropertyId::new();
        let single = serde_json::to_value(BudgetScope::Property(id)).unwrap();
        assert_eq!(
            single,
            serde_json::json!({ "kind": "property", "property_id": id })
        );

        let back: BudgetScope = serde_json::from_value(single).unwrap();
        assert_eq!(back, BudgetScope::Property(id));
    }

    #[test]
    fn test_scope_labels() {
        assert_eq!(
            BudgetScope::PortfolioFixed.to_string(),
            "Portfolio (Fixed Amount)"
        );
        assert_eq!(
            BudgetScope::SplitEqually.to_string(),
            "All Properties (Split Equally)"
        );
    }
}
