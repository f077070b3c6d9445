pub mod query_executor;

pub use query_executor::{AggregateQuery, AggregateRow, QueryExecutor, QuerySession};
