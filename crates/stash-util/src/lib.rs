//! STASH Utilities
//!
//! Small stateless helpers shared across STASH applications: predicate-based
//! slice splitting and replacement, a step counter, direction-aware integer
//! spans, and option-friendly numeric plumbing.

mod array;
mod counter;
mod misc;
mod num;
mod span;

pub use array::{
    array_equals, array_equals_by, replace_all, replace_first, replace_item, replace_item_at,
    replace_item_by, split,
};
pub use counter::Counter;
pub use misc::log_value;
pub use num::maybe_number;
pub use span::{span, Span, SpanIter};
