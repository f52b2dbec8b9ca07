//! Playback statistics.

use std::time::Duration;

use contracts::{ScrollUnits, SyncMode};

/// Statistics from a playback run
#[derive(Debug, Clone)]
pub struct PlaybackStats {
    /// Sync mode the session ran in
    pub mode: SyncMode,

    /// Whether a session was actually installed (stub modes produce none)
    pub session_installed: bool,

    /// Simulated user scroll actions on the active document
    pub user_actions: u64,

    /// Simulated user scroll actions on the inactive document
    pub reverse_actions: u64,

    /// Total writes the active viewport received (user + propagated)
    pub active_writes: u64,

    /// Total writes the inactive viewport received (user + propagated)
    pub inactive_writes: u64,

    /// Final scroll offset of the active viewport
    pub final_active: ScrollUnits,

    /// Final scroll offset of the inactive viewport
    pub final_inactive: ScrollUnits,

    /// Scroll maximum of the active viewport
    pub max_active: ScrollUnits,

    /// Scroll maximum of the inactive viewport
    pub max_inactive: ScrollUnits,

    /// Total duration of the playback run
    pub duration: Duration,
}

impl PlaybackStats {
    /// Writes that were propagated by the engine rather than simulated.
    pub fn propagated_writes(&self) -> u64 {
        (self.active_writes + self.inactive_writes)
            .saturating_sub(self.user_actions + self.reverse_actions)
    }

    /// Final scroll fraction of a viewport, as a percentage.
    fn percent(value: ScrollUnits, max: ScrollUnits) -> f64 {
        if max == 0 {
            0.0
        } else {
            (value as f64 / max as f64) * 100.0
        }
    }

    /// Print detailed summary
    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                    Playback Statistics                       ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");

        println!("📊 Overview");
        println!("   ├─ Mode: {}", self.mode);
        println!("   ├─ Session installed: {}", self.session_installed);
        println!("   ├─ Duration: {:.2}s", self.duration.as_secs_f64());
        println!("   ├─ User actions (active side): {}", self.user_actions);
        println!("   ├─ User actions (inactive side): {}", self.reverse_actions);
        println!("   └─ Propagated writes: {}", self.propagated_writes());

        println!("\n🪟 Viewports");
        println!(
            "   ├─ Active:   {}/{} ({:.1}%), {} writes",
            self.final_active,
            self.max_active,
            Self::percent(self.final_active, self.max_active),
            self.active_writes
        );
        println!(
            "   └─ Inactive: {}/{} ({:.1}%), {} writes",
            self.final_inactive,
            self.max_inactive,
            Self::percent(self.final_inactive, self.max_inactive),
            self.inactive_writes
        );

        println!();
    }
}
