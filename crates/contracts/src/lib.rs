//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-module data structures and
//! the host-collaborator traits. All business crates can only depend on this
//! crate, reverse dependencies are prohibited.
//!
//! ## Position Model
//! - Scroll offsets are absolute `ScrollUnits` in `[0, max]`
//! - Relative fractions are `f64` in `[0, 1]`, rounded to hundredths

mod config;
mod error;
mod host;
mod paragraph;
mod peer;
mod position;

pub use config::*;
pub use error::*;
pub use host::{
    ChangeCallback, DocumentHandle, HostApp, Severity, SubscriptionId, ViewportAdapter,
    ViewportChange,
};
pub use paragraph::*;
pub use peer::{Peer, PeerId};
pub use position::*;
