use std::path::Path;

use libloading::{Library, Symbol};
use liblogger::log_info;

use crate::handler_binding::{HandleFn, HandlerBinding};
use handler_core::ReleaseFn;

/// Loads a handler library and returns its binding together with the
/// `Library`, which must outlive every use of the binding.
///
/// The library must export `handler_handle` and `handler_request_free`
/// (see `handler_core::declare_handler!`). Its load hook is expected to have
/// registered a handler by the time loading returns.
pub fn load_handler<P: AsRef<Path>>(path: P) -> Result<(HandlerBinding, Library), String> {
    let path = path.as_ref();
    unsafe {
        let lib = Library::new(path).map_err(|e| format!("Failed to load handler: {}", e))?;

        let handle: Symbol<HandleFn> = lib
            .get(b"handler_handle")
            .map_err(|e| format!("Missing symbol handler_handle: {}", e))?;
        let _release: Symbol<ReleaseFn> = lib
            .get(b"handler_request_free")
            .map_err(|e| format!("Missing symbol handler_request_free: {}", e))?;

        let binding = HandlerBinding::new(handler_name(path), *handle);
        log_info!(
            &format!("loaded handler '{}'", binding.name),
            Some(path.display().to_string())
        );

        Ok((binding, lib))
    }
}

/// `target/debug/libhandler_status.so` → `handler_status`
pub fn handler_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.strip_prefix("lib") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => stem,
    }
}
