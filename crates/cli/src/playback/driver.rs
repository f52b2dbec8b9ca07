//! Playback driver.
//!
//! Builds an in-memory host with two open text documents, establishes a
//! sync session through the real controller, then simulates a user scrolling
//! the active document from top to bottom and the inactive document back up,
//! so both listener directions are exercised.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use contracts::{ClampPolicy, EngineConfig, ScrollUnits, SyncMode, ViewportAdapter};
use host_adapter::{MockDocument, MockHost, MockViewport};
use sync_engine::SyncController;
use tracing::{debug, info};

use super::PlaybackStats;

/// Playback configuration
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Sync mode for the session
    pub mode: SyncMode,

    /// Scroll maximum of the active document
    pub max_active: ScrollUnits,

    /// Scroll maximum of the inactive document
    pub max_inactive: ScrollUnits,

    /// Number of scroll steps per sweep
    pub steps: u32,

    /// Delay between scroll steps
    pub interval: Duration,

    /// Out-of-range write policy
    pub clamp: ClampPolicy,
}

/// Mock-host playback driver
pub struct Playback {
    config: PlaybackConfig,
}

impl Playback {
    /// Create a new playback with the given configuration
    pub fn new(config: PlaybackConfig) -> Self {
        Self { config }
    }

    /// Run the playback to completion
    pub async fn run(self) -> Result<PlaybackStats> {
        let start_time = Instant::now();
        let config = &self.config;

        // Open two text documents and focus the first one
        let host = Arc::new(MockHost::new());
        let active = host.add_document(MockDocument::text(
            "active",
            "Active.odt",
            config.max_active,
        ));
        let inactive = host.add_document(MockDocument::text(
            "inactive",
            "Inactive.odt",
            config.max_inactive,
        ));
        host.focus("active");

        let active_vp = active
            .mock_viewport()
            .ok_or_else(|| anyhow::anyhow!("active document has no viewport"))?;
        let inactive_vp = inactive
            .mock_viewport()
            .ok_or_else(|| anyhow::anyhow!("inactive document has no viewport"))?;

        info!(
            mode = %config.mode,
            max_active = config.max_active,
            max_inactive = config.max_inactive,
            "Establishing sync session"
        );

        let mut controller = SyncController::new(
            host.clone(),
            EngineConfig {
                clamp: config.clamp,
            },
        );

        let session_installed = controller.trigger(config.mode)?.is_some();

        let mut user_actions = 0u64;
        let mut reverse_actions = 0u64;

        if session_installed {
            // Forward sweep: the user scrolls the active document down
            user_actions = self
                .sweep(&active_vp, config.max_active, SweepDirection::Down)
                .await;

            // Reverse sweep: the user scrolls the inactive document back up,
            // which drives the backward listener
            reverse_actions = self
                .sweep(&inactive_vp, config.max_inactive, SweepDirection::Up)
                .await;
        } else {
            info!(mode = %config.mode, "No session installed, nothing to play back");
        }

        controller.disable();

        Ok(PlaybackStats {
            mode: config.mode,
            session_installed,
            user_actions,
            reverse_actions,
            active_writes: active_vp.write_count(),
            inactive_writes: inactive_vp.write_count(),
            final_active: active_vp.value(),
            final_inactive: inactive_vp.value(),
            max_active: config.max_active,
            max_inactive: config.max_inactive,
            duration: start_time.elapsed(),
        })
    }

    /// Scroll a viewport through its full range in `steps` increments.
    async fn sweep(
        &self,
        viewport: &Arc<MockViewport>,
        max: ScrollUnits,
        direction: SweepDirection,
    ) -> u64 {
        let steps = self.config.steps;
        if steps == 0 {
            return 0;
        }

        let mut actions = 0u64;
        for step in 1..=steps {
            let progress = match direction {
                SweepDirection::Down => step,
                SweepDirection::Up => steps - step,
            };
            let value = (max as u64 * progress as u64 / steps as u64) as ScrollUnits;

            debug!(value, max, ?direction, "simulated user scroll");
            viewport.set_value(value);
            actions += 1;

            if !self.config.interval.is_zero() {
                tokio::time::sleep(self.config.interval).await;
            }
        }
        actions
    }
}

#[derive(Debug, Clone, Copy)]
enum SweepDirection {
    Down,
    Up,
}
