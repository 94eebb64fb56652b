mod alloc;
mod faulty_alloc;
mod raw_str;

pub use self::alloc::{AllocError, Global, RawAlloc};
pub use self::faulty_alloc::{FailPolicy, FaultyAlloc};
pub(crate) use self::raw_str::RawStr;
