use serde::{Deserialize, Serialize};

/// The request a [`Handler`](crate::Handler) receives, fully owned.
///
/// Both sequences keep the caller's order; duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub headers: Vec<String>,
    pub params: Vec<String>,
}

impl Request {
    pub fn new(headers: Vec<String>, params: Vec<String>) -> Self {
        Self { headers, params }
    }
}

/// What a handler answers with. Any `u32` is a legal status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u32,
}

impl Response {
    pub fn new(status: u32) -> Self {
        Self { status }
    }
}
