pub mod error;
pub mod request;
pub mod handler;
pub mod handler_string;
pub mod handler_list;
pub mod handler_request;
pub mod handler_response;
pub mod alloc;
pub mod config;
pub mod adapter;
pub mod registry;
pub mod entry;
pub mod logging;
pub mod handler_macros;

pub use error::{HandlerError, Result};
pub use request::{Request, Response};
pub use handler::Handler;
pub use handler_string::HandlerString;
pub use handler_list::{ForeignSlice, HandlerList};
pub use handler_request::{ForeignRequest, HandlerRequest, ReleaseFn};
pub use handler_response::HandlerResponse;
pub use config::{AdapterConfig, PanicPolicy};
pub use adapter::Adapter;
pub use registry::{current, register, register_adapter, HandlerRegistry};
pub use logging::init_logger;
