use thiserror::Error;

/// Failures of the handler boundary.
///
/// None of these can be answered with a response: at the C boundary each one
/// ends the process after the incoming request has been released.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("no handler registered; call handler_core::register before the entry point is reachable")]
    Unconfigured,

    #[error("a handler is already registered")]
    AlreadyRegistered,

    #[error("request pointer is null")]
    NullRequest,

    #[error("response pointer is null")]
    NullResponse,

    #[error("list `{field}` claims {len} elements behind a null pointer")]
    MalformedList { field: &'static str, len: u32 },

    #[error("string in `{field}` claims {len} bytes behind a null pointer")]
    MalformedString { field: &'static str, len: u32 },

    #[error("list `{field}` is not aligned for its element type")]
    Misaligned { field: &'static str },

    #[error("`{field}` does not fit a 32-bit length")]
    Oversized { field: &'static str },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HandlerError>;
