use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::array::Int64Builder;
use arrow::array::StringBuilder;
use arrow::array::UInt8Builder;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use crate::credit::scenario::Sample;
use crate::error::Result;

pub struct RecordBatchBuilder {
    age: Int64Builder,
    gender: StringBuilder,
    nationality: StringBuilder,
    education: StringBuilder,
    income: Int64Builder,
    default: UInt8Builder,
    schema: SchemaRef,
    len: usize,
}

impl RecordBatchBuilder {
    pub fn new(cap: usize, schema: SchemaRef) -> Self {
        Self {
            age: Int64Builder::with_capacity(cap),
            gender: StringBuilder::with_capacity(cap, cap * 8),
            nationality: StringBuilder::with_capacity(cap, cap * 8),
            education: StringBuilder::with_capacity(cap, cap * 16),
            income: Int64Builder::with_capacity(cap),
            default: UInt8Builder::with_capacity(cap),
            schema,
            len: 0,
        }
    }

    /// Appends record i of the sample as one row of the table, turning the
    /// categorical attributes into their display labels.
    pub fn write_record(&mut self, sample: &Sample, i: usize) {
        self.age.append_value(sample.ages[i]);
        self.gender.append_value(sample.genders[i].to_string());
        self.nationality
            .append_value(sample.nationalities[i].to_string());
        self.education.append_value(sample.educations[i].to_string());
        self.income.append_value(sample.incomes[i]);
        self.default.append_value(sample.defaults[i]);
        self.len += 1;
    }

    pub fn build_record_batch(&mut self) -> Result<RecordBatch> {
        let cols: Vec<ArrayRef> = vec![
            Arc::new(self.age.finish()),
            Arc::new(self.gender.finish()),
            Arc::new(self.nationality.finish()),
            Arc::new(self.education.finish()),
            Arc::new(self.income.finish()),
            Arc::new(self.default.finish()),
        ];

        let batch = RecordBatch::try_new(self.schema.clone(), cols)?;

        self.len = 0;
        Ok(batch)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use arrow::array::Int64Array;
    use arrow::array::StringArray;

    use super::*;
    use crate::credit::scenario::Config;
    use crate::credit::scenario::Scenario;
    use crate::credit::schema::output_schema;

    #[test]
    fn test_labels_land_in_columns() {
        let mut scenario = Scenario::new(Config {
            records: 20,
            seed: 123,
        });
        let sample = scenario.run().unwrap();

        let mut builder = RecordBatchBuilder::new(20, output_schema());
        for i in 0..20 {
            builder.write_record(&sample, i);
        }
        assert_eq!(builder.len(), 20);
        let batch = builder.build_record_batch().unwrap();
        assert!(builder.is_empty());
        assert_eq!(batch.num_rows(), 20);
        assert_eq!(batch.num_columns(), 6);

        let ages = batch
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(ages.value(0), sample.ages[0]);

        let genders = batch
            .column(1)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        for i in 0..20 {
            assert!(matches!(genders.value(i), "Mann" | "Kvinne"));
        }
    }
}
