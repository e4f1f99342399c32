use super::assumptions::Assumptions;
use super::types::{
    AmortizationRow, CompoundInterestInput, CompoundInterestResult, LoanInput, LoanReport,
    LoanSummary, ProjectionPoint,
};

const MONTHS_PER_YEAR: u32 = 12;

// Contributions are credited at year end, after growth.
pub(crate) fn compound_step(balance: f64, annual_rate: f64, monthly_contribution: f64) -> f64 {
    balance * (1.0 + annual_rate) + monthly_contribution * MONTHS_PER_YEAR as f64
}

pub(crate) fn compound_for_years(
    mut balance: f64,
    annual_rate: f64,
    monthly_contribution: f64,
    years: u32,
) -> f64 {
    for _ in 0..years {
        balance = compound_step(balance, annual_rate, monthly_contribution);
    }
    balance
}

/// Returns `assumptions.horizon_cap_years` straight away when nothing is being
/// saved; the cap is a policy answer, not a solved one.
pub fn compute_years_to_goal(
    initial_amount: f64,
    monthly_contribution: f64,
    goal: f64,
    assumptions: &Assumptions,
) -> u32 {
    let cap = assumptions.horizon_cap_years;
    if monthly_contribution <= 0.0 {
        return cap;
    }

    let mut total = initial_amount;
    let mut years = 0;
    while total < goal && years < cap {
        total = compound_step(total, assumptions.annual_return_rate, monthly_contribution);
        years += 1;
    }
    years
}

pub fn generate_projection_series(
    initial_amount: f64,
    monthly_savings: f64,
    goal: f64,
    horizon_years: u32,
    assumptions: &Assumptions,
) -> Vec<ProjectionPoint> {
    let mut series = Vec::with_capacity(horizon_years as usize + 1);
    let mut total = initial_amount;
    for year_index in 0..=horizon_years {
        if year_index > 0 {
            total = compound_step(total, assumptions.annual_return_rate, monthly_savings);
        }
        series.push(ProjectionPoint {
            year_index,
            projected_value: total,
            goal_value: goal,
        });
    }
    series
}

pub fn compute_compound_interest(
    principal: f64,
    monthly_contribution: f64,
    annual_rate_percent: f64,
    years: u32,
) -> f64 {
    compound_for_years(
        principal,
        annual_rate_percent / 100.0,
        monthly_contribution,
        years,
    )
}

pub fn summarize_compound_interest(input: &CompoundInterestInput) -> CompoundInterestResult {
    let final_balance = compute_compound_interest(
        input.principal,
        input.monthly_contribution,
        input.annual_rate_percent,
        input.years,
    );
    let total_contributions = input.principal
        + input.monthly_contribution * MONTHS_PER_YEAR as f64 * input.years as f64;
    CompoundInterestResult {
        final_balance,
        total_contributions,
        interest_earned: final_balance - total_contributions,
    }
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64
}

pub fn compute_loan_summary(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> LoanSummary {
    let r = monthly_rate(annual_rate_percent);
    let n = term_years.saturating_mul(MONTHS_PER_YEAR) as f64;

    let monthly_payment = if r == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    };
    let total_payment = monthly_payment * n;

    LoanSummary {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    }
}

/// The final row absorbs floating point residue so the loan closes at exactly zero.
pub fn amortization_schedule(input: &LoanInput) -> Vec<AmortizationRow> {
    let months = input.term_years.saturating_mul(MONTHS_PER_YEAR);
    let r = monthly_rate(input.annual_rate_percent);
    let payment =
        compute_loan_summary(input.principal, input.annual_rate_percent, input.term_years)
            .monthly_payment;

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = input.principal;
    for month in 1..=months {
        let interest = balance * r;
        let (payment, principal) = if month == months {
            (balance + interest, balance)
        } else {
            (payment, payment - interest)
        };
        balance = if month == months { 0.0 } else { balance - principal };
        rows.push(AmortizationRow {
            month,
            payment,
            principal,
            interest,
            balance,
        });
    }
    rows
}

pub fn loan_report(input: &LoanInput, include_schedule: bool) -> LoanReport {
    LoanReport {
        summary: compute_loan_summary(
            input.principal,
            input.annual_rate_percent,
            input.term_years,
        ),
        schedule: include_schedule.then(|| amortization_schedule(input)),
    }
}
