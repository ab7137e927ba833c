pub mod batch_builder;
pub mod coefficients;
pub mod demographics;
pub mod dictionary;
pub mod education;
pub mod income;
pub mod risk;
pub mod scenario;
pub mod schema;
