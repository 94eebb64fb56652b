use crate::raw::AllocError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("failed to allocate list element: {0}")]
    ElementAlloc(AllocError),

    #[error("failed to allocate element value: {0}")]
    ValueAlloc(AllocError),

    #[error("failed to allocate queue container: {0}")]
    ContainerAlloc(AllocError),

    #[error("queue is empty")]
    Empty,

    #[error("output buffer has no room for the terminator")]
    ZeroCapacity,
}

pub type QueueResult<T> = Result<T, QueueError>;
