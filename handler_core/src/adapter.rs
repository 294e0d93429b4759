use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use liblogger::{log_debug, log_error, LogLevel, Logger};

use crate::alloc::handler_request_free;
use crate::config::{AdapterConfig, PanicPolicy};
use crate::error::{HandlerError, Result};
use crate::handler::Handler;
use crate::handler_request::{ForeignRequest, HandlerRequest, ReleaseFn};
use crate::handler_response::HandlerResponse;
use crate::request::{Request, Response};

/// Translates one C-layout call into a [`Handler`] call and back.
///
/// The handler is injected at construction; nothing here reads global
/// state, and no state survives between calls.
#[derive(Clone)]
pub struct Adapter {
    handler: Arc<dyn Handler>,
    config: AdapterConfig,
    release: ReleaseFn,
}

impl Adapter {
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self::with_config(handler, AdapterConfig::default())
    }

    pub fn with_config<H: Handler + 'static>(handler: H, config: AdapterConfig) -> Self {
        Self::from_shared(Arc::new(handler), config)
    }

    pub fn from_shared(handler: Arc<dyn Handler>, config: AdapterConfig) -> Self {
        Self {
            handler,
            config,
            release: handler_request_free,
        }
    }

    /// Replace the routine used to release incoming requests. Defaults to
    /// the `malloc` contract of [`handler_request_free`].
    pub fn with_release(mut self, release: ReleaseFn) -> Self {
        self.release = release;
        self
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Lift `req`, dispatch it, lower the answer, release `req`, then write
    /// the response to `out`.
    ///
    /// `req` is released exactly once whatever happens, including when the
    /// handler panics under [`PanicPolicy::Propagate`]. On error `out` is
    /// left untouched.
    ///
    /// # Safety
    /// `req` must be null or satisfy [`ForeignRequest::from_raw`] for this
    /// adapter's release routine. `out` must be null or point to writable
    /// storage for one `HandlerResponse`.
    pub unsafe fn handle_entry(&self, req: *mut HandlerRequest, out: *mut HandlerResponse) -> Result<()> {
        let owned = ForeignRequest::from_raw(req, self.release)?;
        if out.is_null() {
            return Err(HandlerError::NullResponse);
        }

        let request = owned.lift()?;
        let lowered = HandlerResponse::from(self.dispatch(request));

        drop(owned);
        out.write(lowered);
        Ok(())
    }

    /// Run the handler under the configured panic policy.
    pub fn dispatch(&self, request: Request) -> Response {
        if Logger::enabled(LogLevel::Debug) {
            log_debug!(
                "dispatching request",
                serde_json::to_string(&request).ok()
            );
        }

        let response = match self.config.on_panic {
            PanicPolicy::Propagate => self.handler.handle(request),
            PanicPolicy::Status => match catch_unwind(AssertUnwindSafe(|| self.handler.handle(request))) {
                Ok(response) => response,
                Err(payload) => {
                    log_error!(
                        &format!("handler panicked, answering {}", self.config.panic_status),
                        Some(panic_message(payload.as_ref()))
                    );
                    Response::new(self.config.panic_status)
                }
            },
        };

        log_debug!(&format!("handler answered {}", response.status));
        response
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
