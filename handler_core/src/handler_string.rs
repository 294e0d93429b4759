use std::ptr;

use liblogger::log_warn;

use crate::error::{HandlerError, Result};
use crate::handler_list::{ForeignSlice, HandlerList};

/// A string as it crosses the handler ABI (`handler_string_t`).
///
/// The bytes are not null-terminated and belong to the caller; they are
/// copied, never borrowed, when lifted.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HandlerString {
    pub ptr: *mut u8,
    pub len: u32,
}

impl HandlerString {
    pub fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    /// Copy the referenced bytes into an owned `String`.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD and logged.
    ///
    /// # Safety
    /// When `len > 0`, `ptr` must reference `len` readable bytes.
    pub unsafe fn lift(&self, field: &'static str) -> Result<String> {
        if self.len > 0 && self.ptr.is_null() {
            return Err(HandlerError::MalformedString { field, len: self.len });
        }
        let bytes = ForeignSlice::new(self.ptr as *const u8, self.len, field)?;

        match std::str::from_utf8(bytes.as_slice()) {
            Ok(s) => Ok(s.to_owned()),
            Err(e) => {
                log_warn!(
                    &format!("invalid UTF-8 in `{}`, replacing", field),
                    Some(e.to_string())
                );
                Ok(String::from_utf8_lossy(bytes.as_slice()).into_owned())
            }
        }
    }
}

/// Lift every string of a foreign list, preserving order.
///
/// # Safety
/// The list and every string it references must be valid per
/// [`HandlerList::view`] and [`HandlerString::lift`].
pub unsafe fn lift_strings(list: &HandlerList<HandlerString>, field: &'static str) -> Result<Vec<String>> {
    let records = list.view(field)?;
    let mut lifted = Vec::with_capacity(records.len());
    for record in records.iter() {
        lifted.push(record.lift(field)?);
    }
    Ok(lifted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn borrowed(bytes: &mut [u8]) -> HandlerString {
        HandlerString {
            ptr: bytes.as_mut_ptr(),
            len: bytes.len() as u32,
        }
    }

    #[test]
    fn copies_exactly_len_bytes() {
        // No terminator: the record stops in the middle of the buffer.
        let mut buf = *b"id=42&page=2";
        let s = HandlerString {
            ptr: buf.as_mut_ptr(),
            len: 5,
        };
        assert_eq!(unsafe { s.lift("params") }.unwrap(), "id=42");
    }

    #[test]
    fn lifted_string_outlives_foreign_bytes() {
        let mut buf = b"Content-Type: text/plain".to_vec();
        let lifted = unsafe { borrowed(&mut buf).lift("headers") }.unwrap();

        buf.iter_mut().for_each(|b| *b = b'#');
        drop(buf);

        assert_eq!(lifted, "Content-Type: text/plain");
    }

    #[test]
    fn empty_string_with_null_pointer() {
        assert_eq!(unsafe { HandlerString::empty().lift("headers") }.unwrap(), "");
    }

    #[test]
    fn null_pointer_with_length_is_rejected() {
        let s = HandlerString {
            ptr: ptr::null_mut(),
            len: 3,
        };
        assert_eq!(
            unsafe { s.lift("headers") }.unwrap_err(),
            HandlerError::MalformedString { field: "headers", len: 3 }
        );
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut buf = [b'a', 0xff, b'b'];
        assert_eq!(unsafe { borrowed(&mut buf).lift("params") }.unwrap(), "a\u{fffd}b");
    }

    #[test]
    fn lifts_list_in_order_with_duplicates() {
        let mut a = *b"Accept: */*";
        let mut b = *b"X-Trace: 1";
        let mut c = *b"Accept: */*";
        let mut records = [borrowed(&mut a), borrowed(&mut b), borrowed(&mut c)];
        let list = HandlerList {
            ptr: records.as_mut_ptr(),
            len: records.len() as u32,
        };

        let lifted = unsafe { lift_strings(&list, "headers") }.unwrap();
        assert_eq!(lifted, vec!["Accept: */*", "X-Trace: 1", "Accept: */*"]);
    }
}
