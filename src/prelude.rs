pub use crate::error::{ArgumentError, IndexError, NoSuchElementError, UnsupportedError};
pub use crate::seq::{ArraySeq, LinkedDeque, NodeArena, NodeId};

#[cfg(feature = "concurrency")]
pub use crate::seq::{ConcurrentArraySeq, ConcurrentLinkedDeque};
pub use crate::traits::{ConcurrentSequence, Sequence};
