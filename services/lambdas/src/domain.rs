// Domain layer modules
pub mod handler_response;
pub mod operation;

// Re-exports
pub use handler_response::{HandlerResponse, ResponseBody, STATUS_INTERNAL_ERROR, STATUS_OK};
pub use operation::Operation;
