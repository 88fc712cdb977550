pub mod array_seq;
pub mod linked_deque;
pub mod node_arena;

pub use array_seq::{ArraySeq, ArraySeqIter, DEFAULT_CAPACITY, GROWTH_INCREMENT};
#[cfg(feature = "concurrency")]
pub use array_seq::ConcurrentArraySeq;
#[cfg(feature = "concurrency")]
pub use linked_deque::ConcurrentLinkedDeque;
pub use linked_deque::{LinkedDeque, LinkedDequeIter};
pub use node_arena::{NodeArena, NodeId};
