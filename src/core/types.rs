use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "conservative" => Some(RiskTolerance::Conservative),
            "moderate" => Some(RiskTolerance::Moderate),
            "aggressive" => Some(RiskTolerance::Aggressive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expenses {
    pub rent: f64,
    pub utilities: f64,
    pub groceries: f64,
    pub transportation: f64,
    pub miscellaneous: f64,
}

impl Expenses {
    pub fn total(&self) -> f64 {
        self.rent + self.utilities + self.groceries + self.transportation + self.miscellaneous
    }

    pub(crate) fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            ("Rent/Mortgage", self.rent),
            ("Utilities", self.utilities),
            ("Groceries", self.groceries),
            ("Transportation", self.transportation),
            ("Miscellaneous", self.miscellaneous),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialProfile {
    pub monthly_income: f64,
    pub expenses: Expenses,
    pub current_savings: f64,
    pub current_investments: f64,
    pub retirement_goal: f64,
    pub risk_tolerance: Option<RiskTolerance>,
    pub investment_timeframe: u32,
}

impl FinancialProfile {
    pub fn total_expenses(&self) -> f64 {
        self.expenses.total()
    }

    pub fn monthly_savings(&self) -> f64 {
        self.monthly_income - self.total_expenses()
    }

    pub fn current_assets(&self) -> f64 {
        self.current_savings + self.current_investments
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year_index: u32,
    pub projected_value: f64,
    pub goal_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundInterestInput {
    pub principal: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestResult {
    pub final_balance: f64,
    pub total_contributions: f64,
    pub interest_earned: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub annual_rate_percent: f64,
    pub yearly_expenses: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RetirementCoverage {
    Covered { years: f64 },
    Indefinite,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementOutlook {
    pub savings_at_retirement: f64,
    /// Positive years from `-ln(1 - x) / ln(1 + w)`; the reference calculator
    /// reports the negated figure. Zero unless `coverage` is `Covered`.
    pub years_of_retirement_covered: f64,
    pub coverage: RetirementCoverage,
    pub verdict: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanReport {
    #[serde(flatten)]
    pub summary: LoanSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationRow>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: f64,
    pub share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub current_assets: f64,
    pub remaining: f64,
    pub percent_complete: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentOption {
    pub label: &'static str,
    pub rate_percent: f64,
    pub estimated_annual_return: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub risk_tolerance: &'static str,
    pub savings_rate: &'static str,
    pub emergency_fund: &'static str,
    pub investment_timeframe: &'static str,
    pub investment_options: Vec<InvestmentOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInsights {
    pub housing_cost_percent: f64,
    pub housing: &'static str,
    pub savings_rate: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_expenses: f64,
    pub monthly_savings: f64,
    pub savings_rate_percent: f64,
    pub years_to_goal: u32,
    pub goal_capped: bool,
    pub projection: Vec<ProjectionPoint>,
    pub income_breakdown: Vec<ChartSlice>,
    pub expense_breakdown: Vec<ChartSlice>,
    pub goal_progress: GoalProgress,
    pub expense_insights: ExpenseInsights,
    pub recommendations: Recommendations,
}
