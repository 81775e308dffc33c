//! Weighted constrained sequence generation library.
//!
//! This crate builds long sequences of symbolic categories under three
//! constraints at once:
//! - weighted random selection (some categories common, some rare)
//! - a hard per-category occurrence ceiling over the whole sequence
//! - no two adjacent positions holding the same category
//!
//! The reconciliation of the three is a greedy draw-and-place loop with
//! a swap-based conflict resolution, exposed through `SequenceBuilder`.
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core sampling and placement logic.
///
/// This module exposes the high-level builder interface while keeping
/// internal bookkeeping private.
pub mod model;

/// Error taxonomy shared by configuration, generation and export.
pub mod error;

/// I/O utilities (sequence export, profile persistence).
pub mod io;
