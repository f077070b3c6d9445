pub mod error_handler;
pub mod request_id;

pub use error_handler::ErrorHandler;
pub use request_id::{RequestId, REQUEST_ID_HEADER};
