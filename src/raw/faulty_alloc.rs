use super::{AllocError, Global, RawAlloc};

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;

/// When a [`FaultyAlloc`] refuses a request. Requests are counted from 1,
/// starting over whenever the policy is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPolicy {
    Never,
    Always,
    /// Fail only the n-th request.
    Nth(usize),
    /// Serve the first n requests, fail every one after.
    After(usize),
}

impl Default for FailPolicy {
    fn default() -> Self {
        FailPolicy::Never
    }
}

impl FailPolicy {
    fn refuses(self, request: usize) -> bool {
        match self {
            FailPolicy::Never => false,
            FailPolicy::Always => true,
            FailPolicy::Nth(n) => request == n,
            FailPolicy::After(n) => request > n,
        }
    }
}

/// Counting allocator that can be told to fail.
///
/// Serves requests from [`Global`] and keeps a tally of live blocks, so a
/// test can check that every element a queue allocated was released, and
/// that a refused insertion left nothing behind. Single-threaded only.
#[derive(Debug, Default)]
pub struct FaultyAlloc {
    policy: Cell<FailPolicy>,
    requests: Cell<usize>,
    allocations: Cell<usize>,
    failures: Cell<usize>,
    live_blocks: Cell<usize>,
    live_bytes: Cell<usize>,
}

impl FaultyAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FailPolicy) -> Self {
        let alloc = Self::new();
        alloc.policy.set(policy);
        alloc
    }

    pub fn policy(&self) -> FailPolicy {
        self.policy.get()
    }

    pub fn set_policy(&self, policy: FailPolicy) {
        self.policy.set(policy);
        self.requests.set(0);
    }

    /// Successful allocations so far.
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    /// Refused requests so far.
    pub fn failures(&self) -> usize {
        self.failures.get()
    }

    pub fn live_blocks(&self) -> usize {
        self.live_blocks.get()
    }

    pub fn live_bytes(&self) -> usize {
        self.live_bytes.get()
    }
}

unsafe impl RawAlloc for FaultyAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let request = self.requests.get() + 1;
        self.requests.set(request);

        if self.policy.get().refuses(request) {
            self.failures.set(self.failures.get() + 1);
            log::debug!(
                "refusing allocation request #{} of {} bytes",
                request,
                layout.size()
            );
            return Err(AllocError::new(layout));
        }

        let ptr = Global.allocate(layout)?;
        self.allocations.set(self.allocations.get() + 1);
        self.live_blocks.set(self.live_blocks.get() + 1);
        self.live_bytes.set(self.live_bytes.get() + layout.size());
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        Global.deallocate(ptr, layout);
        self.live_blocks.set(self.live_blocks.get() - 1);
        self.live_bytes.set(self.live_bytes.get() - layout.size());
    }
}
