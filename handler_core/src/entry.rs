//! Bodies of the symbols `declare_handler!` exports.

use std::panic::{catch_unwind, AssertUnwindSafe};

use liblogger::log_error;

use crate::adapter::panic_message;
use crate::alloc::handler_request_free;
use crate::error::Result;
use crate::handler_request::{ForeignRequest, HandlerRequest};
use crate::handler_response::HandlerResponse;
use crate::registry;

/// Serve one call with the registered adapter.
///
/// Without a registration the request is still released and
/// [`HandlerError::Unconfigured`](crate::HandlerError::Unconfigured) is
/// returned; `out` is never written with a placeholder.
///
/// # Safety
/// Same contract as [`Adapter::handle_entry`](crate::Adapter::handle_entry).
pub unsafe fn handle_registered(req: *mut HandlerRequest, out: *mut HandlerResponse) -> Result<()> {
    match registry::current() {
        Ok(adapter) => adapter.handle_entry(req, out),
        Err(e) => {
            drop(ForeignRequest::from_raw(req, handler_request_free));
            Err(e)
        }
    }
}

/// [`handle_registered`] for the C boundary: a failure or a panic is logged
/// and the process aborts, since neither may unwind into the caller and a
/// default response would hide the fault.
///
/// # Safety
/// Same contract as [`handle_registered`].
pub unsafe fn handle_or_abort(req: *mut HandlerRequest, out: *mut HandlerResponse) {
    match catch_unwind(AssertUnwindSafe(|| handle_registered(req, out))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            log_error!("handler_handle failed, aborting", Some(e.to_string()));
            std::process::abort();
        }
        Err(payload) => {
            log_error!(
                "handler panicked across handler_handle, aborting",
                Some(panic_message(payload.as_ref()))
            );
            std::process::abort();
        }
    }
}
