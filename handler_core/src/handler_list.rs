use std::marker::PhantomData;
use std::ptr;

use crate::error::{HandlerError, Result};

/// A contiguous array of fixed-size records as it crosses the handler ABI
/// (`handler_list_*_t`).
///
/// `ptr` is never read when `len` is zero; callers commonly pass null there.
#[repr(C)]
#[derive(Debug)]
pub struct HandlerList<T> {
    pub ptr: *mut T,
    pub len: u32,
}

impl<T> HandlerList<T> {
    pub fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    /// Validated, bounded view over the records.
    ///
    /// # Safety
    /// When `len > 0` and `ptr` is non-null, `ptr` must reference `len`
    /// initialised records that stay valid and unmodified for `'a`.
    pub unsafe fn view<'a>(&'a self, field: &'static str) -> Result<ForeignSlice<'a, T>> {
        ForeignSlice::new(self.ptr, self.len, field)
    }
}

impl<T> Clone for HandlerList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HandlerList<T> {}

/// A read-only view over foreign records, built once from pointer and
/// length and checked before any element is touched.
///
/// Element stride is `size_of::<T>()`, padding included, which is exactly the
/// stride of the C array.
#[derive(Debug)]
pub struct ForeignSlice<'a, T> {
    items: &'a [T],
    _foreign: PhantomData<*const T>,
}

impl<'a, T> ForeignSlice<'a, T> {
    /// # Safety
    /// See [`HandlerList::view`].
    pub unsafe fn new(ptr: *const T, len: u32, field: &'static str) -> Result<Self> {
        if len == 0 {
            return Ok(Self {
                items: &[],
                _foreign: PhantomData,
            });
        }
        if ptr.is_null() {
            return Err(HandlerError::MalformedList { field, len });
        }
        if (ptr as usize) % std::mem::align_of::<T>() != 0 {
            return Err(HandlerError::Misaligned { field });
        }

        Ok(Self {
            items: std::slice::from_raw_parts(ptr, len as usize),
            _foreign: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}
