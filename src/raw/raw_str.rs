use super::{AllocError, RawAlloc};

use std::alloc::Layout;
use std::ptr::NonNull;

/// An owned, immutable copy of a string whose storage comes from a
/// [`RawAlloc`]. It does not free itself: the owner must hand it back to the
/// same allocator with [`RawStr::dealloc`].
pub struct RawStr {
    ptr: NonNull<u8>,
    len: usize,
}

impl RawStr {
    pub fn alloc<A: RawAlloc + ?Sized>(alloc: &A, s: &str) -> Result<Self, AllocError> {
        let len = s.len();
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }

        let layout = Self::layout(len)?;
        let ptr = alloc.allocate(layout)?;
        unsafe { std::ptr::copy_nonoverlapping(s.as_ptr(), ptr.as_ptr(), len) };
        Ok(Self { ptr, len })
    }

    // cond: self was allocated by `alloc` and is not used afterwards
    pub unsafe fn dealloc<A: RawAlloc + ?Sized>(&mut self, alloc: &A) {
        if self.len != 0 {
            let layout = Layout::from_size_align_unchecked(self.len, 1);
            alloc.deallocate(self.ptr, layout);
        }
        self.ptr = NonNull::dangling();
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_str(&self) -> &str {
        // copied from a `&str` in `alloc`
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }

    fn layout(len: usize) -> Result<Layout, AllocError> {
        Layout::from_size_align(len, 1).map_err(|_| AllocError { size: len })
    }
}

#[cfg(test)]
mod test {
    use super::RawStr;
    use crate::raw::{FailPolicy, FaultyAlloc};

    #[test]
    fn test_raw_str() {
        let alloc = FaultyAlloc::new();

        let mut s = RawStr::alloc(&alloc, "queue").unwrap();
        assert_eq!(s.as_str(), "queue");
        assert_eq!(s.as_bytes(), b"queue");
        assert_eq!(s.as_str().len(), 5);
        assert_eq!(alloc.live_bytes(), 5);

        unsafe { s.dealloc(&alloc) };
        assert!(s.as_str().is_empty());
        assert_eq!(alloc.live_blocks(), 0);
    }

    #[test]
    fn test_empty_needs_no_storage() {
        let alloc = FaultyAlloc::with_policy(FailPolicy::Always);
        let mut s = RawStr::alloc(&alloc, "").unwrap();
        assert_eq!(s.as_str(), "");
        assert_eq!(alloc.failures(), 0);
        unsafe { s.dealloc(&alloc) };
    }

    #[test]
    fn test_refused() {
        let alloc = FaultyAlloc::with_policy(FailPolicy::Always);
        let err = RawStr::alloc(&alloc, "abc").err().unwrap();
        assert_eq!(err.size, 3);
        assert_eq!(alloc.live_blocks(), 0);
    }
}
