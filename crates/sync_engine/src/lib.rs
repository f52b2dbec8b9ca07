//! # Sync Engine
//!
//! Viewport synchronization engine for two side-by-side documents.
//!
//! Responsible for:
//! - Peer discovery (exactly two open text documents, active/inactive)
//! - Position-model conversion (absolute units ↔ normalized fraction)
//! - Bidirectional change-listener wiring with re-entrancy suppression
//! - Structural-compatibility checking (gates future heading/paragraph modes)
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use contracts::{EngineConfig, SyncMode};
//! use sync_engine::SyncController;
//!
//! let mut controller = SyncController::new(host, EngineConfig::default());
//! controller.trigger(SyncMode::Percentage)?;
//! // ... the host's event dispatch now drives the engine ...
//! controller.disable();
//! ```
//!
//! After `trigger`, behavior is entirely reactive: the host delivers change
//! notifications to the installed listeners on its single dispatch thread,
//! and each notification causes at most one propagation to the partner peer.

mod compat;
mod controller;
mod discovery;
mod listener;
mod locator;
mod position;
mod session;
mod suppression;

pub use compat::{check, check_styles};
pub use controller::SyncController;
pub use discovery::{discover, PeerPair};
pub use listener::ChangeListener;
pub use locator::locate;
pub use position::PositionModel;
pub use session::SyncSession;
pub use suppression::{PropagationGuard, PropagationToken};

// Re-export contracts types
pub use contracts::{
    CompatibilityResult, EngineConfig, Peer, PeerId, Position, SyncError, SyncMode,
};
