//! DynamoDB storage backend implementation.
//!
//! Document backend using `aws-sdk-dynamodb`. Each whisky is one document
//! whose native string id (a v4 UUID assigned at create time) is the
//! table's partition key.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
