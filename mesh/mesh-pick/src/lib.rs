//! Two-pick measurement sessions.
//!
//! A session collects two snapped features, one per confirm action, and
//! measures between them:
//!
//! - [`PickSession::hover`] records the latest classification and keeps a
//!   live preview measurement while waiting for the second pick
//! - [`PickSession::commit`] stores the hovered candidate, rejecting a
//!   second pick that is the same feature as the first
//! - [`PickSession::repick_first`] and [`PickSession::repick_second`]
//!   re-open one slot without losing the other
//!
//! [`Pick::info`] and [`PickSession::report`] flatten picks and results
//! into plain values for a selection panel. Rendering, input handling and
//! unit formatting stay with the host.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Drawings
//!
//! For 2D content, pass [`PickSession::viewport_lock`] to
//! [`mesh_snap::classify_planar`] so the second pick comes from the same
//! viewport as the first.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod pick;
mod report;
mod session;

pub use pick::{Pick, SelectionInfo};
pub use report::MeasurementReport;
pub use session::{CommitOutcome, PickSession, PickSlot, PickState, SessionEvent};
