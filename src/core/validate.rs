use thiserror::Error;

use super::types::{CompoundInterestInput, FinancialProfile, LoanInput, RetirementInput};

pub const MIN_INVESTMENT_TIMEFRAME: u32 = 5;
pub const MAX_INVESTMENT_TIMEFRAME: u32 = 50;
pub const MAX_LOAN_TERM_YEARS: u32 = 100;
pub const MAX_COMPOUNDING_YEARS: u32 = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be >= 0")]
    Negative { field: &'static str },
    #[error("{field} must be > 0")]
    NotPositive { field: &'static str },
    #[error("{field} must be greater than {min}")]
    TooLow { field: &'static str, min: f64 },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("retirementAge ({retirement_age}) must be >= currentAge ({current_age})")]
    RetirementBeforeCurrentAge {
        current_age: u32,
        retirement_age: u32,
    },
    #[error("message must not be empty")]
    EmptyQuery,
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(())
}

// A growth rate of -100% or below wipes the balance out every year.
fn ensure_growth_rate(field: &'static str, percent: f64) -> Result<(), ValidationError> {
    ensure_finite(field, percent)?;
    if percent <= -100.0 {
        return Err(ValidationError::TooLow { field, min: -100.0 });
    }
    Ok(())
}

impl CompoundInterestInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative("principal", self.principal)?;
        ensure_non_negative("monthlyContribution", self.monthly_contribution)?;
        ensure_growth_rate("annualRate", self.annual_rate_percent)?;
        if self.years > MAX_COMPOUNDING_YEARS {
            return Err(ValidationError::OutOfRange {
                field: "years",
                min: 0.0,
                max: MAX_COMPOUNDING_YEARS as f64,
            });
        }
        Ok(())
    }
}

impl RetirementInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.retirement_age < self.current_age {
            return Err(ValidationError::RetirementBeforeCurrentAge {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
            });
        }
        ensure_non_negative("currentSavings", self.current_savings)?;
        ensure_non_negative("monthlyContribution", self.monthly_contribution)?;
        ensure_growth_rate("annualRate", self.annual_rate_percent)?;
        ensure_positive("yearlyExpenses", self.yearly_expenses)
    }
}

impl LoanInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("amount", self.principal)?;
        ensure_non_negative("interestRate", self.annual_rate_percent)?;
        if self.term_years == 0 {
            return Err(ValidationError::NotPositive { field: "termYears" });
        }
        if self.term_years > MAX_LOAN_TERM_YEARS {
            return Err(ValidationError::OutOfRange {
                field: "termYears",
                min: 1.0,
                max: MAX_LOAN_TERM_YEARS as f64,
            });
        }
        Ok(())
    }
}

impl FinancialProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative("monthlyIncome", self.monthly_income)?;
        let expenses = &self.expenses;
        ensure_non_negative("expenses.rent", expenses.rent)?;
        ensure_non_negative("expenses.utilities", expenses.utilities)?;
        ensure_non_negative("expenses.groceries", expenses.groceries)?;
        ensure_non_negative("expenses.transportation", expenses.transportation)?;
        ensure_non_negative("expenses.miscellaneous", expenses.miscellaneous)?;
        ensure_non_negative("currentSavings", self.current_savings)?;
        ensure_non_negative("currentInvestments", self.current_investments)?;
        ensure_positive("retirementGoal", self.retirement_goal)?;
        if !(MIN_INVESTMENT_TIMEFRAME..=MAX_INVESTMENT_TIMEFRAME)
            .contains(&self.investment_timeframe)
        {
            return Err(ValidationError::OutOfRange {
                field: "investmentTimeframe",
                min: MIN_INVESTMENT_TIMEFRAME as f64,
                max: MAX_INVESTMENT_TIMEFRAME as f64,
            });
        }
        Ok(())
    }
}

pub fn validate_query(query: &str) -> Result<&str, ValidationError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }
    Ok(trimmed)
}
