use rand::distributions::WeightedIndex;
use rand::prelude::*;

use crate::credit::coefficients::NATIONALITY_WEIGHTS;
use crate::credit::dictionary::Gender;
use crate::credit::dictionary::Nationality;

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 79;

/// Uniform ages in [18, 79], one draw per record.
pub fn sample_ages(n: usize, rng: &mut impl Rng) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(MIN_AGE..=MAX_AGE)).collect()
}

pub fn sample_genders(n: usize, rng: &mut impl Rng) -> Vec<Gender> {
    (0..n)
        .map(|_| {
            if rng.gen::<f64>() < 0.5 {
                Gender::Male
            } else {
                Gender::Female
            }
        })
        .collect()
}

/// 0.85 Norwegian / 0.15 Swedish. The skew is deliberate policy feeding the
/// downstream education and income biases.
pub fn sample_nationalities(n: usize, rng: &mut impl Rng) -> Vec<Nationality> {
    const NATIONALITIES: [Nationality; 2] = [Nationality::Norwegian, Nationality::Swedish];
    let weight_idx = WeightedIndex::new(NATIONALITY_WEIGHTS).unwrap();
    (0..n).map(|_| NATIONALITIES[weight_idx.sample(rng)]).collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_ages_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let ages = sample_ages(1000, &mut rng);
        assert_eq!(ages.len(), 1000);
        assert!(ages.iter().all(|&age| (MIN_AGE..=MAX_AGE).contains(&age)));
        // both endpoints show up in a sample this size
        assert!(ages.contains(&MIN_AGE));
        assert!(ages.contains(&MAX_AGE));
    }

    #[test]
    fn test_empty_sample() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_ages(0, &mut rng).is_empty());
        assert!(sample_genders(0, &mut rng).is_empty());
        assert!(sample_nationalities(0, &mut rng).is_empty());
    }

    #[test]
    fn test_gender_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2);
        let genders = sample_genders(10_000, &mut rng);
        let females = genders.iter().filter(|g| **g == Gender::Female).count();
        let share = females as f64 / 10_000.0;
        assert!((share - 0.5).abs() < 0.03, "female share {share}");
    }

    #[test]
    fn test_nationality_skew() {
        let mut rng = StdRng::seed_from_u64(3);
        let nationalities = sample_nationalities(10_000, &mut rng);
        let swedes = nationalities
            .iter()
            .filter(|n| **n == Nationality::Swedish)
            .count();
        let share = swedes as f64 / 10_000.0;
        assert!((share - 0.15).abs() < 0.02, "swedish share {share}");
    }
}
