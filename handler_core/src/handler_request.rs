use std::ptr::NonNull;

use crate::error::{HandlerError, Result};
use crate::handler_list::HandlerList;
use crate::handler_string::{lift_strings, HandlerString};
use crate::request::Request;

/// The request as it crosses the handler ABI (`handler_request_t`).
#[repr(C)]
#[derive(Debug)]
pub struct HandlerRequest {
    pub headers: HandlerList<HandlerString>,
    pub params: HandlerList<HandlerString>,
}

/// Routine that gives a request back to the allocator that produced it
/// (`handler_request_free`).
pub type ReleaseFn = unsafe extern "C" fn(req: *mut HandlerRequest);

/// An incoming request owned by the adapter for the duration of one call.
///
/// Dropping it runs the release routine exactly once, including while a
/// handler panic unwinds. Everything lifted out of it is an owned copy, so
/// nothing can outlive the release.
pub struct ForeignRequest {
    raw: NonNull<HandlerRequest>,
    release: ReleaseFn,
}

impl ForeignRequest {
    /// Take ownership of `raw`.
    ///
    /// # Safety
    /// `raw` must point to a valid request whose lists and strings stay
    /// valid and unmodified until this value is dropped, and `release` must
    /// be the routine that owns its memory. Nothing else may release it.
    pub unsafe fn from_raw(raw: *mut HandlerRequest, release: ReleaseFn) -> Result<Self> {
        let raw = NonNull::new(raw).ok_or(HandlerError::NullRequest)?;
        Ok(Self { raw, release })
    }

    pub fn header_count(&self) -> u32 {
        unsafe { self.raw.as_ref() }.headers.len
    }

    pub fn param_count(&self) -> u32 {
        unsafe { self.raw.as_ref() }.params.len
    }

    /// Copy headers and params into a native [`Request`].
    pub fn lift(&self) -> Result<Request> {
        // SAFETY: validity is the contract of `from_raw`.
        unsafe {
            let raw = self.raw.as_ref();
            let headers = lift_strings(&raw.headers, "headers")?;
            let params = lift_strings(&raw.params, "params")?;
            Ok(Request { headers, params })
        }
    }
}

impl Drop for ForeignRequest {
    fn drop(&mut self) {
        unsafe { (self.release)(self.raw.as_ptr()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::ptr;

    thread_local! {
        static RELEASED: Cell<usize> = const { Cell::new(0) };
    }

    unsafe extern "C" fn count_release(_req: *mut HandlerRequest) {
        RELEASED.with(|c| c.set(c.get() + 1));
    }

    fn released() -> usize {
        RELEASED.with(|c| c.get())
    }

    #[test]
    fn null_request_is_rejected_without_release() {
        let before = released();
        let err = unsafe { ForeignRequest::from_raw(ptr::null_mut(), count_release) }.err();
        assert_eq!(err, Some(HandlerError::NullRequest));
        assert_eq!(released(), before);
    }

    #[test]
    fn drop_releases_once() {
        let mut raw = HandlerRequest {
            headers: HandlerList::empty(),
            params: HandlerList::empty(),
        };
        let before = released();
        {
            let owned = unsafe { ForeignRequest::from_raw(&mut raw, count_release) }.unwrap();
            assert_eq!(owned.lift().unwrap(), Request::default());
            assert_eq!(released(), before);
        }
        assert_eq!(released(), before + 1);
    }

    #[test]
    fn failed_lift_still_releases() {
        let mut raw = HandlerRequest {
            headers: HandlerList::empty(),
            params: HandlerList {
                ptr: ptr::null_mut(),
                len: 4,
            },
        };
        let before = released();
        let result = unsafe { ForeignRequest::from_raw(&mut raw, count_release) }
            .and_then(|owned| owned.lift());
        assert_eq!(result, Err(HandlerError::MalformedList { field: "params", len: 4 }));
        assert_eq!(released(), before + 1);
    }
}
