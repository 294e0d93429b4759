extern crate handler_core;
extern crate liblogger;

use handler_core::{declare_handler, Handler, Request, Response};
use liblogger::{log_error, log_info};
use liblogger_macros::measure_time;

/// Logs the query parameters it receives, one `key=value` per line.
///
/// Answers 200, or 400 when the request carries no parameters at all.
pub struct ReturnParams;

impl ReturnParams {
    /// The parameters as the handler reports them.
    pub fn render(params: &[String]) -> String {
        params.iter().fold(String::new(), |mut body, param| {
            body.push_str(param);
            body.push('\n');
            body
        })
    }
}

impl Handler for ReturnParams {
    #[measure_time]
    fn handle(&self, req: Request) -> Response {
        if req.params.is_empty() {
            log_info!("no params supplied");
            return Response::new(400);
        }

        log_info!(
            &format!("received {} params", req.params.len()),
            Some(Self::render(&req.params))
        );
        Response::new(200)
    }
}

#[ctor::ctor]
fn on_load() {
    if let Err(e) = handler_core::init_logger("handler_params") {
        eprintln!("[handler_params] Failed to initialize logger: {}", e);
    }

    if let Err(e) = handler_core::register(ReturnParams) {
        log_error!("handler_params failed to register", Some(e.to_string()));
    }
}

declare_handler!();

#[cfg(test)]
mod tests {
    use super::*;
    use handler_core::alloc::lower_request;
    use handler_core::HandlerResponse;

    #[test]
    fn renders_params_in_order() {
        let params = vec!["key1=value1".to_string(), "key2=value2".to_string(), "key3=value3".to_string()];
        assert_eq!(ReturnParams::render(&params), "key1=value1\nkey2=value2\nkey3=value3\n");
    }

    #[test]
    fn empty_params_answer_400() {
        let req = Request::new(vec!["Accept: */*".into()], vec![]);
        assert_eq!(ReturnParams.handle(req).status, 400);
    }

    #[test]
    fn exported_entry_answers_200_with_params() {
        let raw = lower_request(&Request::new(vec![], vec!["id=42".into(), "page=2".into()])).unwrap();
        let mut out = HandlerResponse::default();
        unsafe { handler_handle(raw, &mut out) };
        assert_eq!(out.status, 200);
    }
}
