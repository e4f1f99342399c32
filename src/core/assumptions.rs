use super::validate::{ValidationError, ensure_finite, ensure_non_negative};

pub const DEFAULT_ANNUAL_RETURN_RATE: f64 = 0.07;
pub const DEFAULT_WITHDRAWAL_RATE: f64 = 0.04;
pub const DEFAULT_HORIZON_CAP_YEARS: u32 = 100;

// Rates are fractions, 0.07 is 7%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assumptions {
    pub annual_return_rate: f64,
    pub withdrawal_rate: f64,
    pub horizon_cap_years: u32,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            annual_return_rate: DEFAULT_ANNUAL_RETURN_RATE,
            withdrawal_rate: DEFAULT_WITHDRAWAL_RATE,
            horizon_cap_years: DEFAULT_HORIZON_CAP_YEARS,
        }
    }
}

impl Assumptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative("annualReturnRate", self.annual_return_rate)?;
        ensure_finite("withdrawalRate", self.withdrawal_rate)?;
        if self.withdrawal_rate <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "withdrawalRate",
            });
        }
        if self.horizon_cap_years == 0 {
            return Err(ValidationError::NotPositive {
                field: "horizonCapYears",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_policy() {
        let assumptions = Assumptions::default();
        assert_eq!(assumptions.annual_return_rate, 0.07);
        assert_eq!(assumptions.withdrawal_rate, 0.04);
        assert_eq!(assumptions.horizon_cap_years, 100);
        assert!(assumptions.validate().is_ok());
    }

    #[test]
    fn rejects_zero_withdrawal_rate_and_horizon() {
        let mut assumptions = Assumptions {
            withdrawal_rate: 0.0,
            ..Assumptions::default()
        };
        assert_eq!(
            assumptions.validate(),
            Err(ValidationError::NotPositive {
                field: "withdrawalRate"
            })
        );

        assumptions.withdrawal_rate = 0.04;
        assumptions.horizon_cap_years = 0;
        assert!(assumptions.validate().is_err());
    }
}
