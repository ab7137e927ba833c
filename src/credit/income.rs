use std::f64::consts::PI;

use rand::prelude::*;
use rand_distr::Normal;

use crate::credit::coefficients::income_multipliers;
use crate::credit::coefficients::BASE_SALARY;
use crate::credit::coefficients::FEMALE_INCOME_FACTOR;
use crate::credit::coefficients::RETIREMENT_AGE;
use crate::credit::coefficients::SALARY_SPAN;
use crate::credit::coefficients::SALARY_STD_DEV;
use crate::credit::dictionary::Education;
use crate::credit::dictionary::Gender;
use crate::credit::dictionary::Nationality;
use crate::error::CreditGenError;
use crate::error::Result;

/// Sinusoidal salary curve rising through the working ages and peaking at
/// age 70; the age coefficient stays in [0, 1].
fn mean_salary(age: i64) -> f64 {
    let age_coefficient = ((PI * (age as f64 - 40.0) / 60.0).sin() + 1.0) / 2.0;
    BASE_SALARY + age_coefficient * SALARY_SPAN
}

/// One normal draw per record, consumed even when the retirement override
/// then zeroes it, so the draw order downstream stages see is independent of
/// ages. Multipliers compound: nationality×education first, then the pay
/// gap. The fractional part is discarded, not rounded, and nothing clamps a
/// negative draw.
pub fn sample_incomes(
    ages: &[i64],
    genders: &[Gender],
    educations: &[Education],
    nationalities: &[Nationality],
    rng: &mut impl Rng,
) -> Result<Vec<i64>> {
    let mut incomes = Vec::with_capacity(ages.len());
    for i in 0..ages.len() {
        let normal = Normal::new(mean_salary(ages[i]), SALARY_STD_DEV)
            .map_err(|err| CreditGenError::Internal(err.to_string()))?;
        let mut draw = normal.sample(rng);
        if ages[i] > RETIREMENT_AGE {
            draw = 0.0;
        }
        let mut income = draw * income_multipliers(nationalities[i]).for_education(educations[i]);
        if genders[i] == Gender::Female {
            income *= FEMALE_INCOME_FACTOR;
        }
        incomes.push(income as i64);
    }
    Ok(incomes)
}
