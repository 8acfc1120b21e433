pub mod config;
pub mod error;
pub mod handler;
pub mod invocation;
pub mod payload;

pub use crate::config::FunctionConfig;
pub use crate::error::{ConfigError, PayloadError};
pub use crate::handler::{function_handler, log_payload, SUCCESS};
pub use crate::payload::RequestPayload;
