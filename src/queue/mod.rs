mod iter;
mod linked_queue;
mod merge_sort;
mod node;
mod queue_box;

pub use self::iter::{IntoIter, Iter};
pub use self::linked_queue::{Queue, Removed};
pub use self::queue_box::QueueBox;
