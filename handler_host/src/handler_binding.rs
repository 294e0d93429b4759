use handler_core::alloc::lower_request;
use handler_core::{HandlerRequest, HandlerResponse, Request, Response};

/// Signature of the `handler_handle` symbol.
pub type HandleFn = unsafe extern "C" fn(req: *mut HandlerRequest, ret: *mut HandlerResponse);

/// A host's binding to one handler library.
///
/// The library owns every request passed through `handle` and releases it
/// with its own `handler_request_free`, so requests are built under the
/// shared `malloc` contract.
#[derive(Clone)]
pub struct HandlerBinding {
    /// Name the host knows the handler by, e.g. `"handler_status"`.
    pub name: String,

    /// The library's `handler_handle` entry point.
    pub handle: HandleFn,
}

impl HandlerBinding {
    pub fn new(name: impl Into<String>, handle: HandleFn) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }

    /// Lower `req`, hand it to the library and read back its response.
    ///
    /// A handler library aborts the process rather than return without a
    /// response, so a returned value is always a complete one.
    pub fn call(&self, req: &Request) -> Result<Response, String> {
        let raw = lower_request(req).map_err(|e| format!("Failed to lower request: {}", e))?;
        let mut out = HandlerResponse::default();

        // Ownership of `raw` passes to the library here.
        unsafe { (self.handle)(raw, &mut out) };

        Ok(Response::from(out))
    }
}
