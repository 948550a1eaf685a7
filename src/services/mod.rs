pub mod budget_service;
pub mod match_service;

pub use budget_service::BudgetService;
pub use match_service::MatchService;
