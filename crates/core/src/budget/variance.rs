//! Budget variance calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::types::Budget;

/// Type of variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceType {
    /// Actual is under budget.
    Favorable,
    /// Actual is over budget.
    Unfavorable,
    /// No variance.
    OnBudget,
}

/// Budget vs actual variance.
///
/// All budget types here are spend budgets, so under budget is always
/// the favorable direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetVariance {
    /// Budgeted amount.
    pub budget_amount: Decimal,
    /// Actual amount.
    pub actual_amount: Decimal,
    /// Variance amount (budget - actual).
    pub variance_amount: Decimal,
    /// Variance as a percentage of budget; zero when the budget is zero.
    pub variance_percentage: Decimal,
    /// Type of variance.
    pub variance_type: VarianceType,
}

impl BudgetVariance {
    /// Calculates the variance between a budgeted and an actual amount.
    #[must_use]
    pub fn calculate(budget: Decimal, actual: Decimal) -> Self {
        let variance = budget - actual;
        let percentage = if budget.is_zero() {
            Decimal::ZERO
        } else {
            (variance / budget) * Decimal::ONE_HUNDRED
        };

        let variance_type = if variance.is_zero() {
            VarianceType::OnBudget
        } else if variance.is_sign_positive() {
            VarianceType::Favorable
        } else {
            VarianceType::Unfavorable
        };

        Self {
            budget_amount: budget,
            actual_amount: actual,
            variance_amount: variance,
            variance_percentage: percentage,
            variance_type,
        }
    }

    /// Variance of one budget record against its own recorded actual.
    #[must_use]
    pub fn of(budget: &Budget) -> Self {
        Self::calculate(budget.budget_amount, budget.actual_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_under_budget_is_favorable() {
        let v = BudgetVariance::calculate(dec!(1000), dec!(800));
        assert_eq!(v.variance_amount, dec!(200));
        assert_eq!(v.variance_percentage, dec!(20));
        assert_eq!(v.variance_type, VarianceType::Favorable);
    }

    #[test]
    fn test_over_budget_is_unfavorable() {
        let v = BudgetVariance::calculate(dec!(1000), dec!(1250));
        assert_eq!(v.variance_amount, dec!(-250));
        assert_eq!(v.variance_type, VarianceType::Unfavorable);
    }

    #[test]
    fn test_exact_spend_is_on_budget() {
        let v = BudgetVariance::calculate(dec!(500), dec!(500));
        assert_eq!(v.variance_amount, Decimal::ZERO);
        assert_eq!(v.variance_type, VarianceType::OnBudget);
    }

    #[test]
    fn test_zero_budget_has_zero_percentage() {
        let v = BudgetVariance::calculate(Decimal::ZERO, dec!(100));
        assert_eq!(v.variance_percentage, Decimal::ZERO);
        assert_eq!(v.variance_type, VarianceType::Unfavorable);
    }
}
