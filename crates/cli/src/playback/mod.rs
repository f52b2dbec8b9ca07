//! Mock-host playback module.

mod driver;
mod stats;

pub use driver::{Playback, PlaybackConfig};
pub use stats::PlaybackStats;
