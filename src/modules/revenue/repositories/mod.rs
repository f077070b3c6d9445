mod mysql_query_executor;

pub use mysql_query_executor::MySqlQueryExecutor;
