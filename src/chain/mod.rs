//! Chain-reaction resolution: the single-pass reducer and the driver that
//! runs it to a fixed point, plus the event and result records callers
//! consume.

pub mod driver;
pub mod events;
pub mod reducer;
pub mod result;

pub use driver::{resolve, resolve_capped};
pub use events::MergeEvent;
pub use reducer::{reduce_once, PassOutcome};
pub use result::{ChainResult, RoundRecord};
