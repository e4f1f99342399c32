use super::assumptions::Assumptions;
use super::engine::{compute_years_to_goal, generate_projection_series};
use super::types::{
    ChartSlice, Dashboard, ExpenseInsights, FinancialProfile, GoalProgress, InvestmentOption,
    Recommendations, RiskTolerance,
};

pub const HOUSING_COST_LIMIT: f64 = 0.3;
pub const SAVINGS_RATE_TARGET: f64 = 0.2;

pub const INVESTMENT_OPTION_RATES: [(&str, f64); 3] = [
    ("Conservative", 0.03),
    ("Moderate", 0.07),
    ("Aggressive", 0.12),
];

fn share_of(value: f64, total: f64) -> f64 {
    if total > 0.0 { value / total } else { 0.0 }
}

pub fn savings_rate_percent(profile: &FinancialProfile) -> f64 {
    if profile.monthly_income <= 0.0 {
        return 0.0;
    }
    profile.monthly_savings() / profile.monthly_income * 100.0
}

// Shares are relative to income, not to the slice total.
pub fn income_breakdown(profile: &FinancialProfile) -> Vec<ChartSlice> {
    let income = profile.monthly_income;
    [
        ("Income", income),
        ("Expenses", profile.total_expenses()),
        ("Savings", profile.monthly_savings()),
    ]
    .into_iter()
    .map(|(name, value)| ChartSlice {
        name,
        value,
        share: share_of(value, income),
    })
    .collect()
}

pub fn expense_breakdown(profile: &FinancialProfile) -> Vec<ChartSlice> {
    let total = profile.total_expenses();
    profile
        .expenses
        .labelled()
        .into_iter()
        .map(|(name, value)| ChartSlice {
            name,
            value,
            share: share_of(value, total),
        })
        .collect()
}

pub fn goal_progress(profile: &FinancialProfile) -> GoalProgress {
    let current_assets = profile.current_assets();
    GoalProgress {
        current_assets,
        remaining: (profile.retirement_goal - current_assets).max(0.0),
        percent_complete: (share_of(current_assets, profile.retirement_goal) * 100.0).min(100.0),
    }
}

fn risk_tolerance_message(risk: Option<RiskTolerance>) -> &'static str {
    match risk {
        Some(RiskTolerance::Conservative) => {
            "Given your conservative risk tolerance, consider low-risk investments such as government bonds or fixed deposits."
        }
        Some(RiskTolerance::Moderate) => {
            "With a moderate risk tolerance, a balanced portfolio of stocks and bonds may be suitable."
        }
        Some(RiskTolerance::Aggressive) => {
            "Considering your aggressive risk tolerance, explore high-growth investments like stocks and real estate."
        }
        None => "Consider diversifying your investments based on your risk tolerance.",
    }
}

fn savings_rate_message(rate_percent: f64) -> &'static str {
    if rate_percent < 10.0 {
        "Your savings rate is below 10%. Consider increasing your savings to at least 15% of your income."
    } else if rate_percent < 20.0 {
        "Your savings rate is between 10% and 20%. Aim to increase it further for better financial security."
    } else {
        "Your savings rate is excellent! Keep up the good work to achieve your financial goals."
    }
}

fn emergency_fund_message(savings: f64, monthly_expenses: f64) -> &'static str {
    if savings < monthly_expenses * 3.0 {
        "Your emergency fund is less than 3 months of expenses. Aim to save at least 3-6 months of expenses for unexpected events."
    } else if savings < monthly_expenses * 6.0 {
        "Your emergency fund covers 3-6 months of expenses. Consider increasing it to 6-12 months for better security."
    } else {
        "Your emergency fund is well-funded! You have enough savings to cover 6-12 months of expenses."
    }
}

fn investment_timeframe_message(years: u32) -> &'static str {
    if years < 10 {
        "With a short investment timeframe, focus on low-risk investments to preserve capital."
    } else if years < 20 {
        "With a medium investment timeframe, consider a mix of growth and value investments."
    } else {
        "With a long investment timeframe, explore growth-oriented investments for higher returns."
    }
}

pub fn recommendations(profile: &FinancialProfile) -> Recommendations {
    Recommendations {
        risk_tolerance: risk_tolerance_message(profile.risk_tolerance),
        savings_rate: savings_rate_message(savings_rate_percent(profile)),
        emergency_fund: emergency_fund_message(profile.current_savings, profile.total_expenses()),
        investment_timeframe: investment_timeframe_message(profile.investment_timeframe),
        investment_options: INVESTMENT_OPTION_RATES
            .iter()
            .map(|&(label, rate)| InvestmentOption {
                label,
                rate_percent: rate * 100.0,
                estimated_annual_return: profile.current_investments * rate,
            })
            .collect(),
    }
}

pub fn expense_insights(profile: &FinancialProfile) -> ExpenseInsights {
    let housing_share = share_of(profile.expenses.rent, profile.monthly_income);
    let savings_share = share_of(profile.monthly_savings(), profile.monthly_income);
    ExpenseInsights {
        housing_cost_percent: housing_share * 100.0,
        housing: if housing_share > HOUSING_COST_LIMIT {
            "Your housing costs exceed the recommended 30% of income."
        } else {
            "Your housing costs are within the recommended range."
        },
        savings_rate: if savings_share < SAVINGS_RATE_TARGET {
            "Aim to save at least 20% of your income."
        } else {
            "Great job saving more than 20% of your income!"
        },
    }
}

/// The projection runs for exactly `years_to_goal` years, so a profile that
/// never reaches its goal is charted across the whole horizon cap.
pub fn build_dashboard(profile: &FinancialProfile, assumptions: &Assumptions) -> Dashboard {
    let initial = profile.current_assets();
    let monthly_savings = profile.monthly_savings();
    let years_to_goal = compute_years_to_goal(
        initial,
        monthly_savings,
        profile.retirement_goal,
        assumptions,
    );

    Dashboard {
        total_expenses: profile.total_expenses(),
        monthly_savings,
        savings_rate_percent: savings_rate_percent(profile),
        years_to_goal,
        goal_capped: years_to_goal >= assumptions.horizon_cap_years,
        projection: generate_projection_series(
            initial,
            monthly_savings,
            profile.retirement_goal,
            years_to_goal,
            assumptions,
        ),
        income_breakdown: income_breakdown(profile),
        expense_breakdown: expense_breakdown(profile),
        goal_progress: goal_progress(profile),
        expense_insights: expense_insights(profile),
        recommendations: recommendations(profile),
    }
}
