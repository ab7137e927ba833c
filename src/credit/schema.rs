use std::sync::Arc;

use arrow::datatypes::DataType;
use arrow::datatypes::Field;
use arrow::datatypes::Schema;
use arrow::datatypes::SchemaRef;

pub const COLUMN_AGE: &str = "alder";
pub const COLUMN_GENDER: &str = "kjonn";
pub const COLUMN_NATIONALITY: &str = "etnisitet";
pub const COLUMN_EDUCATION: &str = "utdanning";
pub const COLUMN_INCOME: &str = "inntekt";
pub const COLUMN_DEFAULT: &str = "mislighold";

/// Output table schema. Categorical columns carry display labels, not
/// variant names.
pub fn output_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(COLUMN_AGE, DataType::Int64, false),
        Field::new(COLUMN_GENDER, DataType::Utf8, false),
        Field::new(COLUMN_NATIONALITY, DataType::Utf8, false),
        Field::new(COLUMN_EDUCATION, DataType::Utf8, false),
        Field::new(COLUMN_INCOME, DataType::Int64, false),
        Field::new(COLUMN_DEFAULT, DataType::UInt8, false),
    ]))
}
