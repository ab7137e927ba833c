use rand::distributions::WeightedIndex;
use rand::prelude::*;

use crate::credit::coefficients::ADULT_EDUCATION_WEIGHTS;
use crate::credit::coefficients::YOUNG_EDUCATION_WEIGHTS;
use crate::credit::dictionary::Education;
use crate::credit::dictionary::Nationality;

/// Per-record decision tree over age and nationality. Swedish records and
/// records under 19 resolve without consuming a draw; the remaining age
/// bands each consume exactly one.
pub fn sample_educations(
    ages: &[i64],
    nationalities: &[Nationality],
    rng: &mut impl Rng,
) -> Vec<Education> {
    const YOUNG: [Education; 2] = [Education::Primary, Education::Secondary];
    const ADULT: [Education; 3] = [Education::Primary, Education::Secondary, Education::Higher];
    let young_idx = WeightedIndex::new(YOUNG_EDUCATION_WEIGHTS).unwrap();
    let adult_idx = WeightedIndex::new(ADULT_EDUCATION_WEIGHTS).unwrap();

    ages.iter()
        .zip(nationalities.iter())
        .map(|(&age, &nationality)| {
            if nationality == Nationality::Swedish {
                Education::Primary
            } else if age < 19 {
                Education::Primary
            } else if age < 22 {
                YOUNG[young_idx.sample(rng)]
            } else {
                ADULT[adult_idx.sample(rng)]
            }
        })
        .collect()
}
