// Nothing in this binary registers a handler.

use handler_core::alloc::lower_request;
use handler_core::entry::handle_registered;
use handler_core::{registry, HandlerError, HandlerResponse, Request};

#[test]
fn entry_without_handler_fails_without_writing() {
    assert!(!registry::is_registered());
    assert_eq!(handler_core::current().err(), Some(HandlerError::Unconfigured));

    let raw = lower_request(&Request::new(vec!["Content-Type: text/plain".into()], vec![])).unwrap();
    let mut out = HandlerResponse { status: 0xDEAD_BEEF };

    let err = unsafe { handle_registered(raw, &mut out) }.unwrap_err();

    assert_eq!(err, HandlerError::Unconfigured);
    assert_eq!(out.status, 0xDEAD_BEEF);
}
