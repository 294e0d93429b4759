mod common;

use handler_core::alloc::lower_request;
use handler_core::entry::handle_registered;
use handler_core::{register, register_adapter, registry, Adapter, HandlerError, HandlerResponse, Request, Response};

use common::RecordingHandler;

// The registry is process-wide, so the whole lifecycle is one test.
#[test]
fn registered_handler_serves_entry_point() {
    let handler = RecordingHandler::new(200);
    register_adapter(Adapter::new(handler.clone())).unwrap();
    assert!(registry::is_registered());

    let raw = lower_request(&Request::new(vec![], vec!["id=42".into(), "page=2".into()])).unwrap();
    let mut out = HandlerResponse::default();
    unsafe { handle_registered(raw, &mut out) }.unwrap();

    assert_eq!(out.status, 200);
    assert_eq!(handler.seen()[0].params, vec!["id=42".to_string(), "page=2".to_string()]);

    let again = register(|_req: Request| Response::new(500));
    assert_eq!(again, Err(HandlerError::AlreadyRegistered));

    let raw = lower_request(&Request::default()).unwrap();
    unsafe { handle_registered(raw, &mut out) }.unwrap();
    assert_eq!(out.status, 200);
    assert_eq!(handler.seen().len(), 2);
}
