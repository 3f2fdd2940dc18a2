//! Replay of precomputed traces
//!
//! - [`timeline`]: a read-only step list plus the current position
//! - [`player`]: timed auto-advance with play/pause and a speed setting
//!
//! The traces themselves are never recomputed during playback; seeking is
//! just moving an index.

pub mod player;
pub mod timeline;

pub use player::{Player, Speed};
pub use timeline::Timeline;

use thiserror::Error;

/// Navigation requests that cannot be honoured
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("no steps to play")]
    Empty,

    #[error("already at the first step")]
    AtStart,

    #[error("no more steps (playback finished)")]
    AtEnd,

    #[error("step {index} is out of range (trace has {len} steps)")]
    OutOfRange { index: usize, len: usize },
}
