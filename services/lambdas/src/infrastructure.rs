// Infrastructure layer modules
pub mod function_config;
pub mod logging;

// Re-exports
pub use function_config::{FunctionConfig, FunctionConfigError, LOG_EVENT_PAYLOAD_ENV};
pub use logging::init_logging;
