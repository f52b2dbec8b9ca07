//! # Host Adapter
//!
//! Mock implementation of the host-collaborator traits from `contracts`.
//!
//! Lets the engine run without a real host application: in-memory documents
//! and viewports with synchronous change dispatch, an inspectable alert
//! surface, and a fixture loader for document files. Used by the CLI playback
//! driver and by every test that exercises the engine end to end.
//!
//! Real hosts implement the same traits out of tree; nothing in the engine
//! distinguishes them from these mocks.

mod fixture;
mod mock_document;
mod mock_host;
mod mock_viewport;

pub use fixture::{load_paragraphs, parse_paragraphs};
pub use mock_document::MockDocument;
pub use mock_host::MockHost;
pub use mock_viewport::MockViewport;
