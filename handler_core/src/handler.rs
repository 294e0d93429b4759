use crate::request::{Request, Response};

/// The capability a handler library provides.
///
/// `handle` is total: every request, including one with no headers and no
/// params, gets a response. Failures the handler can anticipate should be
/// reported through the status.
pub trait Handler: Send + Sync {
    fn handle(&self, req: Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(Request) -> Response + Send + Sync,
{
    fn handle(&self, req: Request) -> Response {
        self(req)
    }
}
