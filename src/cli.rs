use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use crate::core::{
    Assumptions, CompoundInterestInput, Expenses, FinancialProfile, LoanInput, RetirementInput,
    RiskTolerance, ValidationError, build_dashboard, compute_retirement_outlook, faq, loan_report,
    summarize_compound_interest, validate_query,
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "wealthwhiz",
    about = "Personal finance planning: growth projections, retirement and loan calculators"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "WEALTHWHIZ_GROWTH_RATE",
        default_value_t = 7.0,
        help = "Annual growth assumed by the dashboard projection, in percent"
    )]
    growth_rate: f64,
    #[arg(
        long,
        global = true,
        env = "WEALTHWHIZ_WITHDRAWAL_RATE",
        default_value_t = 4.0,
        help = "Growth of a retirement balance while it is drawn down, in percent"
    )]
    withdrawal_rate: f64,
    #[arg(
        long,
        global = true,
        env = "WEALTHWHIZ_HORIZON_CAP",
        default_value_t = 100,
        help = "Longest years-to-goal search before giving up"
    )]
    horizon_cap: u32,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Serve the web UI and JSON API")]
    Serve {
        #[arg(long, env = "WEALTHWHIZ_PORT", default_value_t = 8080)]
        port: u16,
    },
    #[command(about = "Future value of a lump sum plus monthly contributions")]
    Compound(CompoundArgs),
    #[command(about = "Savings at retirement and how long they last")]
    Retirement(RetirementArgs),
    #[command(about = "Level monthly payment for a fixed-rate loan")]
    Loan(LoanArgs),
    #[command(about = "Dashboard figures and recommendations for a monthly budget")]
    Plan(PlanArgs),
    #[command(about = "Ask the FAQ assistant a question")]
    Ask {
        #[arg(required = true)]
        message: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct CompoundArgs {
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,
    #[arg(long, default_value_t = 500.0)]
    monthly_contribution: f64,
    #[arg(long, default_value_t = 7.0, help = "Annual rate in percent")]
    annual_rate: f64,
    #[arg(long, default_value_t = 20)]
    years: u32,
}

#[derive(Args, Debug)]
pub struct RetirementArgs {
    #[arg(long, default_value_t = 30)]
    current_age: u32,
    #[arg(long, default_value_t = 65)]
    retirement_age: u32,
    #[arg(long, default_value_t = 25_000.0)]
    current_savings: f64,
    #[arg(long, default_value_t = 1_000.0)]
    monthly_contribution: f64,
    #[arg(long, default_value_t = 7.0, help = "Annual rate in percent")]
    annual_rate: f64,
    #[arg(long, default_value_t = 60_000.0)]
    yearly_expenses: f64,
}

#[derive(Args, Debug)]
pub struct LoanArgs {
    #[arg(long, default_value_t = 300_000.0)]
    amount: f64,
    #[arg(long, default_value_t = 4.5, help = "Annual interest rate in percent")]
    interest_rate: f64,
    #[arg(long, default_value_t = 30)]
    term_years: u32,
    #[arg(long, help = "Include the month-by-month amortization schedule")]
    schedule: bool,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[arg(long, default_value_t = 5_000.0)]
    monthly_income: f64,
    #[arg(long, default_value_t = 1_500.0)]
    rent: f64,
    #[arg(long, default_value_t = 200.0)]
    utilities: f64,
    #[arg(long, default_value_t = 400.0)]
    groceries: f64,
    #[arg(long, default_value_t = 300.0)]
    transportation: f64,
    #[arg(long, default_value_t = 500.0)]
    miscellaneous: f64,
    #[arg(long, default_value_t = 10_000.0)]
    current_savings: f64,
    #[arg(long, default_value_t = 20_000.0)]
    current_investments: f64,
    #[arg(long, default_value_t = 1_000_000.0)]
    retirement_goal: f64,
    #[arg(
        long,
        default_value = "moderate",
        help = "conservative, moderate or aggressive"
    )]
    risk_tolerance: String,
    #[arg(long, default_value_t = 25)]
    investment_timeframe: u32,
}

#[derive(Debug, Serialize)]
struct AskOutput {
    reply: &'static str,
}

impl Cli {
    pub fn assumptions(&self) -> Result<Assumptions, ValidationError> {
        let assumptions = Assumptions {
            annual_return_rate: self.growth_rate / 100.0,
            withdrawal_rate: self.withdrawal_rate / 100.0,
            horizon_cap_years: self.horizon_cap,
        };
        assumptions.validate()?;
        Ok(assumptions)
    }
}

// `Serve` has nothing to compute here and renders as `None`.
pub fn execute(command: &Command, assumptions: &Assumptions) -> Result<Option<String>, CliError> {
    let json = match command {
        Command::Serve { .. } => return Ok(None),
        Command::Compound(args) => {
            let input = CompoundInterestInput {
                principal: args.principal,
                monthly_contribution: args.monthly_contribution,
                annual_rate_percent: args.annual_rate,
                years: args.years,
            };
            input.validate()?;
            serde_json::to_string_pretty(&summarize_compound_interest(&input))?
        }
        Command::Retirement(args) => {
            let input = RetirementInput {
                current_age: args.current_age,
                retirement_age: args.retirement_age,
                current_savings: args.current_savings,
                monthly_contribution: args.monthly_contribution,
                annual_rate_percent: args.annual_rate,
                yearly_expenses: args.yearly_expenses,
            };
            input.validate()?;
            serde_json::to_string_pretty(&compute_retirement_outlook(&input, assumptions))?
        }
        Command::Loan(args) => {
            let input = LoanInput {
                principal: args.amount,
                annual_rate_percent: args.interest_rate,
                term_years: args.term_years,
            };
            input.validate()?;
            serde_json::to_string_pretty(&loan_report(&input, args.schedule))?
        }
        Command::Plan(args) => {
            let profile = FinancialProfile {
                monthly_income: args.monthly_income,
                expenses: Expenses {
                    rent: args.rent,
                    utilities: args.utilities,
                    groceries: args.groceries,
                    transportation: args.transportation,
                    miscellaneous: args.miscellaneous,
                },
                current_savings: args.current_savings,
                current_investments: args.current_investments,
                retirement_goal: args.retirement_goal,
                risk_tolerance: RiskTolerance::parse(&args.risk_tolerance),
                investment_timeframe: args.investment_timeframe,
            };
            profile.validate()?;
            serde_json::to_string_pretty(&build_dashboard(&profile, assumptions))?
        }
        Command::Ask { message } => {
            let message = message.join(" ");
            let query = validate_query(&message)?;
            serde_json::to_string_pretty(&AskOutput {
                reply: faq::answer(query),
            })?
        }
    };
    Ok(Some(json))
}
