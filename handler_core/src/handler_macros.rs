/// Export the handler ABI from a `cdylib`.
///
/// Emits `handler_handle`, served by the registered handler, and
/// `handler_request_free`, the release routine of the `malloc` contract.
/// The library registers its handler with [`register`](crate::register)
/// from its load hook.
#[macro_export]
macro_rules! declare_handler {
    () => {
        #[no_mangle]
        pub unsafe extern "C" fn handler_handle(
            req: *mut $crate::HandlerRequest,
            ret: *mut $crate::HandlerResponse,
        ) {
            $crate::entry::handle_or_abort(req, ret)
        }

        #[no_mangle]
        pub unsafe extern "C" fn handler_request_free(req: *mut $crate::HandlerRequest) {
            $crate::alloc::handler_request_free(req)
        }
    };
}
