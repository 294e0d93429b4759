//! The C-allocator contract behind `handler_request_free`.
//!
//! Every buffer reachable from a request (each string, each list array and
//! the top-level record) comes from `malloc` and goes back through `free`.
//! Hosts use [`lower_request`] to build requests that a handler library can
//! release; handler libraries export [`handler_request_free`] through
//! `declare_handler!`.

use std::alloc::{handle_alloc_error, Layout};
use std::ptr;

use libc::c_void;

use crate::error::{HandlerError, Result};
use crate::handler_list::HandlerList;
use crate::handler_request::HandlerRequest;
use crate::handler_string::HandlerString;
use crate::request::Request;

unsafe fn malloc_array<T>(len: usize) -> *mut T {
    if len == 0 {
        return ptr::null_mut();
    }
    let layout = match Layout::array::<T>(len) {
        Ok(layout) => layout,
        Err(_) => handle_alloc_error(Layout::new::<T>()),
    };
    let p = libc::malloc(layout.size()) as *mut T;
    if p.is_null() {
        handle_alloc_error(layout);
    }
    p
}

fn checked_len(len: usize, field: &'static str) -> Result<u32> {
    u32::try_from(len).map_err(|_| HandlerError::Oversized { field })
}

fn lower_strings(strings: &[String]) -> HandlerList<HandlerString> {
    unsafe {
        let records = malloc_array::<HandlerString>(strings.len());
        for (i, s) in strings.iter().enumerate() {
            let bytes = malloc_array::<u8>(s.len());
            if !bytes.is_null() {
                ptr::copy_nonoverlapping(s.as_ptr(), bytes, s.len());
            }
            records.add(i).write(HandlerString {
                ptr: bytes,
                len: s.len() as u32,
            });
        }
        HandlerList {
            ptr: records,
            len: strings.len() as u32,
        }
    }
}

/// Copy `req` into freshly `malloc`ed memory laid out as `handler_request_t`.
///
/// Empty lists and empty strings carry a null pointer. The result must be
/// released exactly once, with [`handler_request_free`].
pub fn lower_request(req: &Request) -> Result<*mut HandlerRequest> {
    for (field, list) in [("headers", &req.headers), ("params", &req.params)] {
        checked_len(list.len(), field)?;
        for s in list {
            checked_len(s.len(), field)?;
        }
    }

    let headers = lower_strings(&req.headers);
    let params = lower_strings(&req.params);
    unsafe {
        let raw = malloc_array::<HandlerRequest>(1);
        raw.write(HandlerRequest { headers, params });
        Ok(raw)
    }
}

unsafe fn free_strings(list: &HandlerList<HandlerString>) {
    if list.len == 0 || list.ptr.is_null() {
        return;
    }
    for record in std::slice::from_raw_parts(list.ptr, list.len as usize) {
        libc::free(record.ptr as *mut c_void);
    }
    libc::free(list.ptr as *mut c_void);
}

/// Release a request built under the `malloc` contract, nested buffers
/// included. Null is ignored.
///
/// # Safety
/// `req` must be null or come from [`lower_request`] (or a C caller
/// following the same contract) and must not be used afterwards.
pub unsafe extern "C" fn handler_request_free(req: *mut HandlerRequest) {
    if req.is_null() {
        return;
    }
    free_strings(&(*req).headers);
    free_strings(&(*req).params);
    libc::free(req as *mut c_void);
}
