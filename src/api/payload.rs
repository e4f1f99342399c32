use serde::Deserialize;

use crate::core::{
    CompoundInterestInput, Expenses, FinancialProfile, LoanInput, RetirementInput, RiskTolerance,
    ValidationError,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CompoundInterestPayload {
    principal: Option<f64>,
    monthly_contribution: Option<f64>,
    annual_rate: Option<f64>,
    years: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RetirementPayload {
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    current_savings: Option<f64>,
    monthly_contribution: Option<f64>,
    annual_rate: Option<f64>,
    #[serde(alias = "yearlyExpensesInRetirement")]
    yearly_expenses: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct LoanPayload {
    #[serde(alias = "principal")]
    amount: Option<f64>,
    interest_rate: Option<f64>,
    term_years: Option<u32>,
    pub(crate) schedule: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ExpensesPayload {
    rent: Option<f64>,
    utilities: Option<f64>,
    groceries: Option<f64>,
    transportation: Option<f64>,
    miscellaneous: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PlanPayload {
    monthly_income: Option<f64>,
    expenses: Option<ExpensesPayload>,
    current_savings: Option<f64>,
    current_investments: Option<f64>,
    retirement_goal: Option<f64>,
    risk_tolerance: Option<String>,
    investment_timeframe: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ChatPayload {
    pub(crate) message: String,
}

pub(crate) fn default_compound_interest() -> CompoundInterestInput {
    CompoundInterestInput {
        principal: 10_000.0,
        monthly_contribution: 500.0,
        annual_rate_percent: 7.0,
        years: 20,
    }
}

pub(crate) fn default_retirement() -> RetirementInput {
    RetirementInput {
        current_age: 30,
        retirement_age: 65,
        current_savings: 25_000.0,
        monthly_contribution: 1_000.0,
        annual_rate_percent: 7.0,
        yearly_expenses: 60_000.0,
    }
}

pub(crate) fn default_loan() -> LoanInput {
    LoanInput {
        principal: 300_000.0,
        annual_rate_percent: 4.5,
        term_years: 30,
    }
}

pub(crate) fn default_profile() -> FinancialProfile {
    FinancialProfile {
        monthly_income: 5_000.0,
        expenses: Expenses {
            rent: 1_500.0,
            utilities: 200.0,
            groceries: 400.0,
            transportation: 300.0,
            miscellaneous: 500.0,
        },
        current_savings: 10_000.0,
        current_investments: 20_000.0,
        retirement_goal: 1_000_000.0,
        risk_tolerance: Some(RiskTolerance::Moderate),
        investment_timeframe: 25,
    }
}

pub(crate) fn compound_interest_from_payload(
    payload: CompoundInterestPayload,
) -> Result<CompoundInterestInput, ValidationError> {
    let defaults = default_compound_interest();
    let input = CompoundInterestInput {
        principal: payload.principal.unwrap_or(defaults.principal),
        monthly_contribution: payload
            .monthly_contribution
            .unwrap_or(defaults.monthly_contribution),
        annual_rate_percent: payload.annual_rate.unwrap_or(defaults.annual_rate_percent),
        years: payload.years.unwrap_or(defaults.years),
    };
    input.validate()?;
    Ok(input)
}

pub(crate) fn retirement_from_payload(
    payload: RetirementPayload,
) -> Result<RetirementInput, ValidationError> {
    let defaults = default_retirement();
    let input = RetirementInput {
        current_age: payload.current_age.unwrap_or(defaults.current_age),
        retirement_age: payload.retirement_age.unwrap_or(defaults.retirement_age),
        current_savings: payload.current_savings.unwrap_or(defaults.current_savings),
        monthly_contribution: payload
            .monthly_contribution
            .unwrap_or(defaults.monthly_contribution),
        annual_rate_percent: payload.annual_rate.unwrap_or(defaults.annual_rate_percent),
        yearly_expenses: payload.yearly_expenses.unwrap_or(defaults.yearly_expenses),
    };
    input.validate()?;
    Ok(input)
}

pub(crate) fn loan_from_payload(payload: &LoanPayload) -> Result<LoanInput, ValidationError> {
    let defaults = default_loan();
    let input = LoanInput {
        principal: payload.amount.unwrap_or(defaults.principal),
        annual_rate_percent: payload
            .interest_rate
            .unwrap_or(defaults.annual_rate_percent),
        term_years: payload.term_years.unwrap_or(defaults.term_years),
    };
    input.validate()?;
    Ok(input)
}

pub(crate) fn profile_from_payload(
    payload: PlanPayload,
) -> Result<FinancialProfile, ValidationError> {
    let mut profile = default_profile();

    if let Some(v) = payload.monthly_income {
        profile.monthly_income = v;
    }
    if let Some(expenses) = payload.expenses {
        let current = &mut profile.expenses;
        if let Some(v) = expenses.rent {
            current.rent = v;
        }
        if let Some(v) = expenses.utilities {
            current.utilities = v;
        }
        if let Some(v) = expenses.groceries {
            current.groceries = v;
        }
        if let Some(v) = expenses.transportation {
            current.transportation = v;
        }
        if let Some(v) = expenses.miscellaneous {
            current.miscellaneous = v;
        }
    }
    if let Some(v) = payload.current_savings {
        profile.current_savings = v;
    }
    if let Some(v) = payload.current_investments {
        profile.current_investments = v;
    }
    if let Some(v) = payload.retirement_goal {
        profile.retirement_goal = v;
    }
    if let Some(v) = payload.risk_tolerance {
        profile.risk_tolerance = RiskTolerance::parse(&v);
    }
    if let Some(v) = payload.investment_timeframe {
        profile.investment_timeframe = v;
    }

    profile.validate()?;
    Ok(profile)
}
