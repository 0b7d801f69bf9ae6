//! Shared UI state collaborators.
//!
//! - [`motion`] - Process-wide reduced-motion preference
//! - [`events`] - Broadcast event bus with a fixed vocabulary
//! - [`preview`] - Single-slot "currently active preview" registry

pub mod events;
pub mod motion;
pub mod preview;
