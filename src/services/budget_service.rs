use crate::domain::budget::Budget;
use crate::domain::period::Period;

/// Stateless façade over [`Budget`] proration. Budgets come from whatever
/// store the app layer uses; every query runs over the slice it is handed.
pub struct BudgetService;

impl BudgetService {
    pub fn daily_amount(budget: &Budget) -> f64 {
        budget.daily_amount()
    }

    pub fn overlapping_amount(budget: &Budget, query: &Period) -> f64 {
        budget.overlapping_amount(query)
    }

    /// Sums the prorated amount of every budget over `query`. Budgets whose
    /// month does not touch the query contribute zero.
    pub fn query_total_amount(budgets: &[Budget], query: &Period) -> f64 {
        budgets
            .iter()
            .map(|budget| budget.overlapping_amount(query))
            .sum()
    }
}
