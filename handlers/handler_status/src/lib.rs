extern crate handler_core;
extern crate liblogger;

use handler_core::{declare_handler, Handler, Request, Response};
use liblogger::{log_error, log_info};
use liblogger_macros::log_entry_exit;

/// Answers every request with 200, whatever it carries.
pub struct StatusOk;

impl Handler for StatusOk {
    #[log_entry_exit]
    fn handle(&self, _req: Request) -> Response {
        Response::new(200)
    }
}

// Load hook: the handler must be registered before the host can reach
// handler_handle.
#[ctor::ctor]
fn on_load() {
    if let Err(e) = handler_core::init_logger("handler_status") {
        eprintln!("[handler_status] Failed to initialize logger: {}", e);
    }

    match handler_core::register(StatusOk) {
        Ok(()) => log_info!("handler_status loaded"),
        Err(e) => log_error!("handler_status failed to register", Some(e.to_string())),
    }
}

declare_handler!();
