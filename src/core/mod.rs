mod assumptions;
mod engine;
pub mod faq;
mod profile;
mod solver;
mod types;
mod validate;

pub use assumptions::{
    Assumptions, DEFAULT_ANNUAL_RETURN_RATE, DEFAULT_HORIZON_CAP_YEARS, DEFAULT_WITHDRAWAL_RATE,
};
pub use engine::{
    amortization_schedule, compute_compound_interest, compute_loan_summary,
    compute_years_to_goal, generate_projection_series, loan_report, summarize_compound_interest,
};
pub use profile::{
    build_dashboard, expense_breakdown, expense_insights, goal_progress, income_breakdown,
    recommendations, savings_rate_percent,
};
pub use solver::{compute_retirement_outlook, retirement_verdict};
pub use types::{
    AmortizationRow, ChartSlice, CompoundInterestInput, CompoundInterestResult, Dashboard,
    ExpenseInsights, Expenses, FinancialProfile, GoalProgress, InvestmentOption, LoanInput,
    LoanReport, LoanSummary, ProjectionPoint, Recommendations, RetirementCoverage,
    RetirementInput, RetirementOutlook, RiskTolerance,
};
pub use validate::{ValidationError, validate_query};
