use super::assumptions::Assumptions;
use super::engine::compound_for_years;
use super::types::{RetirementCoverage, RetirementInput, RetirementOutlook};

pub const ON_TRACK_VERDICT: &str = "You're on track for a secure retirement!";
pub const GOOD_PROGRESS_VERDICT: &str =
    "You're making good progress, but consider increasing your savings.";
pub const SHORTFALL_VERDICT: &str =
    "You may need to increase your retirement contributions to reach your goals.";

pub fn compute_retirement_outlook(
    input: &RetirementInput,
    assumptions: &Assumptions,
) -> RetirementOutlook {
    let years_to_retirement = input.retirement_age.saturating_sub(input.current_age);
    let savings_at_retirement = compound_for_years(
        input.current_savings,
        input.annual_rate_percent / 100.0,
        input.monthly_contribution,
        years_to_retirement,
    );

    let coverage = solve_coverage(
        savings_at_retirement,
        input.yearly_expenses,
        assumptions.withdrawal_rate,
    );
    let years_of_retirement_covered = match coverage {
        RetirementCoverage::Covered { years } => years,
        RetirementCoverage::Indefinite | RetirementCoverage::Invalid => 0.0,
    };

    RetirementOutlook {
        savings_at_retirement,
        years_of_retirement_covered,
        coverage,
        verdict: retirement_verdict(coverage),
    }
}

pub fn retirement_verdict(coverage: RetirementCoverage) -> &'static str {
    match coverage {
        RetirementCoverage::Indefinite => ON_TRACK_VERDICT,
        RetirementCoverage::Covered { years } if years > 30.0 => ON_TRACK_VERDICT,
        RetirementCoverage::Covered { years } if years > 20.0 => GOOD_PROGRESS_VERDICT,
        RetirementCoverage::Covered { .. } | RetirementCoverage::Invalid => SHORTFALL_VERDICT,
    }
}

/// Solves `savings * (1+w)^n - expenses * ((1+w)^n - 1) / w = 0` for `n`.
///
/// Once `savings * w` reaches `expenses` growth alone pays for retirement and
/// the balance never runs out.
fn solve_coverage(savings: f64, yearly_expenses: f64, withdrawal_rate: f64) -> RetirementCoverage {
    if !savings.is_finite()
        || !yearly_expenses.is_finite()
        || !withdrawal_rate.is_finite()
        || yearly_expenses <= 0.0
        || withdrawal_rate <= 0.0
    {
        return RetirementCoverage::Invalid;
    }

    let drawn_share = savings * withdrawal_rate / yearly_expenses;
    if drawn_share >= 1.0 {
        return RetirementCoverage::Indefinite;
    }
    // -ln(1) is -0.0
    if drawn_share == 0.0 {
        return RetirementCoverage::Covered { years: 0.0 };
    }

    let years = -(1.0 - drawn_share).ln() / withdrawal_rate.ln_1p();
    if !years.is_finite() || years < 0.0 {
        return RetirementCoverage::Invalid;
    }
    RetirementCoverage::Covered { years }
}
