use crate::credit::dictionary::Education;
use crate::credit::dictionary::Nationality;

// Every bias constant of the pipeline lives here. These are fixed policy,
// not configuration.

/// Weights for {Norwegian, Swedish}.
pub const NATIONALITY_WEIGHTS: [f64; 2] = [0.85, 0.15];

/// Weights for {Primary, Secondary} at ages 19..=21.
pub const YOUNG_EDUCATION_WEIGHTS: [f64; 2] = [0.3, 0.7];

/// Weights for {Primary, Secondary, Higher} at ages >= 22.
pub const ADULT_EDUCATION_WEIGHTS: [f64; 3] = [0.2, 0.4, 0.4];

pub const BASE_SALARY: f64 = 600_000.0;
pub const SALARY_SPAN: f64 = 300_000.0;
pub const SALARY_STD_DEV: f64 = 100_000.0;

/// Incomes are zeroed above this age, overriding the normal draw.
pub const RETIREMENT_AGE: i64 = 72;

/// Pay-gap multiplier, applied after the nationality/education one.
pub const FEMALE_INCOME_FACTOR: f64 = 0.82;

pub const FEMALE_RISK_FACTOR: f64 = 0.95;

/// Added to the default probability after the 0.99 clamp, not before.
pub const PRIMARY_RISK_SHIFT: f64 = 0.2;

pub const RISK_CLAMP: f64 = 0.99;

pub struct IncomeMultipliers {
    pub primary: f64,
    pub secondary: f64,
    pub higher: f64,
}

impl IncomeMultipliers {
    pub fn for_education(&self, education: Education) -> f64 {
        match education {
            Education::Primary => self.primary,
            Education::Secondary => self.secondary,
            Education::Higher => self.higher,
        }
    }
}

pub fn income_multipliers(nationality: Nationality) -> IncomeMultipliers {
    match nationality {
        Nationality::Norwegian => IncomeMultipliers {
            primary: 0.6,
            secondary: 0.8,
            higher: 1.0,
        },
        Nationality::Swedish => IncomeMultipliers {
            primary: 0.3,
            secondary: 0.5,
            higher: 0.7,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::income_multipliers;
    use crate::credit::dictionary::Education;
    use crate::credit::dictionary::Nationality;

    #[test]
    fn test_multiplier_table() {
        let nor = income_multipliers(Nationality::Norwegian);
        assert_eq!(nor.for_education(Education::Primary), 0.6);
        assert_eq!(nor.for_education(Education::Secondary), 0.8);
        assert_eq!(nor.for_education(Education::Higher), 1.0);

        let swe = income_multipliers(Nationality::Swedish);
        assert_eq!(swe.for_education(Education::Primary), 0.3);
        assert_eq!(swe.for_education(Education::Secondary), 0.5);
        assert_eq!(swe.for_education(Education::Higher), 0.7);
    }
}
