use rand::distributions::Bernoulli;
use rand::prelude::*;

use crate::credit::coefficients::FEMALE_RISK_FACTOR;
use crate::credit::coefficients::PRIMARY_RISK_SHIFT;
use crate::credit::coefficients::RISK_CLAMP;
use crate::credit::dictionary::Education;
use crate::credit::dictionary::Gender;
use crate::error::CreditGenError;
use crate::error::Result;

/// Baseline risk over income: a degree-5 polynomial fed through a logistic,
/// deliberately non-monotonic.
fn income_baseline(income: i64) -> f64 {
    let x = income as f64 / 500_000.0;
    let y = income as f64 / 600_000.0;
    let poly = x + 0.5 * x.powi(2) - 2.5 * x.powi(3) + 0.7 * x.powi(4) + y.powi(5);
    1.2 * (1.0 / (1.0 + poly.exp()))
}

/// Oscillating age multiplier, not monotonic in age.
fn age_adjustment(age: i64) -> f64 {
    let age = age as f64;
    (2.0 * (age / 10.0).sin() + (age / 4.0).sin()) / 5.0 + 0.6
}

fn gender_adjustment(gender: Gender) -> f64 {
    match gender {
        Gender::Female => FEMALE_RISK_FACTOR,
        Gender::Male => 1.0,
    }
}

fn education_adjustment(education: Education) -> f64 {
    match education {
        Education::Primary => PRIMARY_RISK_SHIFT,
        _ => 0.0,
    }
}

/// The 0.99 clamp binds the multiplicative part only; the education shift is
/// added afterwards and never re-clamped, so the result can in principle
/// land above the clamp.
pub fn default_probability(income: i64, age: i64, education: Education, gender: Gender) -> f64 {
    let product = income_baseline(income) * age_adjustment(age) * gender_adjustment(gender);
    RISK_CLAMP.min(product) + education_adjustment(education)
}

/// Deterministic stage: no randomness is consumed here.
pub fn compute_default_probabilities(
    incomes: &[i64],
    ages: &[i64],
    educations: &[Education],
    genders: &[Gender],
) -> Vec<f64> {
    (0..incomes.len())
        .map(|i| default_probability(incomes[i], ages[i], educations[i], genders[i]))
        .collect()
}

/// One Bernoulli draw per record. A probability outside [0, 1] (or NaN)
/// fails the whole stage with `InvalidProbability`; nothing is emitted for a
/// partially sampled column.
pub fn sample_defaults(probabilities: &[f64], rng: &mut impl Rng) -> Result<Vec<u8>> {
    let mut defaults = Vec::with_capacity(probabilities.len());
    for &probability in probabilities {
        let bernoulli = Bernoulli::new(probability)
            .map_err(|_| CreditGenError::InvalidProbability(probability))?;
        defaults.push(u8::from(bernoulli.sample(rng)));
    }
    Ok(defaults)
}
