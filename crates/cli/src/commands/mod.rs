//! Command implementations.

mod check;
mod info;
mod run;

pub use check::run_check;
pub use info::run_info;
pub use run::run_playback;
