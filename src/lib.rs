//! Synthetic personal-credit dataset generator.
//!
//! Each record's attributes come from a chain of conditional distributions
//! with fixed, deliberately biased coefficients (by nationality, gender and
//! age), ending in a Bernoulli default outcome. One seeded random stream is
//! consumed in a fixed per-stage, per-record order, so a (records, seed)
//! pair reproduces the table exactly.

pub mod credit;
pub mod error;

use arrow::record_batch::RecordBatch;
pub use error::CreditGenError;
pub use error::Result;

use crate::credit::batch_builder::RecordBatchBuilder;
use crate::credit::scenario::Config;
use crate::credit::scenario::Scenario;
use crate::credit::schema::output_schema;

pub const DEFAULT_RECORDS: usize = 10_000;
pub const DEFAULT_SEED: u64 = 123;

/// Runs the full sampling pipeline and assembles the six-column table.
pub fn generate(records: usize, seed: u64) -> Result<RecordBatch> {
    let mut scenario = Scenario::new(Config { records, seed });
    let sample = scenario.run()?;

    let mut builder = RecordBatchBuilder::new(records, output_schema());
    for i in 0..records {
        builder.write_record(&sample, i);
    }
    builder.build_record_batch()
}
