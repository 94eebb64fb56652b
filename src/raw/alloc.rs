use std::alloc::Layout;
use std::ptr::NonNull;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("memory allocation of {size} bytes failed")]
pub struct AllocError {
    pub size: usize,
}

impl AllocError {
    pub fn new(layout: Layout) -> Self {
        Self {
            size: layout.size(),
        }
    }
}

/// Fallible block allocator backing every element and value a queue stores.
///
/// Unlike `std::alloc::alloc`, running out of memory is reported as an
/// [`AllocError`] so the caller can back out and leave its structure intact.
///
/// # Safety
///
/// A block returned by `allocate` must be valid for reads and writes of
/// `layout` until it is passed back to `deallocate` of the same allocator.
pub unsafe trait RawAlloc {
    /// `layout` must have a non-zero size.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate` on this allocator with the
    /// same `layout`, and must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The system allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

unsafe impl RawAlloc for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() != 0);
        let ptr = unsafe { std::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or_else(|| AllocError::new(layout))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        std::alloc::dealloc(ptr.as_ptr(), layout)
    }
}

unsafe impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).deallocate(ptr, layout)
    }
}

#[cfg(test)]
mod test {
    use super::{AllocError, Global, RawAlloc};
    use std::alloc::Layout;

    #[test]
    fn test_global_round_trip() {
        let layout = Layout::new::<[u64; 4]>();
        let ptr = Global.allocate(layout).unwrap();
        unsafe {
            ptr.as_ptr().write_bytes(0xAB, layout.size());
            assert_eq!(*ptr.as_ptr().add(31), 0xAB);
            (&Global).deallocate(ptr, layout);
        }
    }

    #[test]
    fn test_alloc_error_display() {
        let err = AllocError::new(Layout::new::<u32>());
        assert_eq!(err.size, 4);
        assert_eq!(err.to_string(), "memory allocation of 4 bytes failed");
    }
}
