//! Pointer input mapped to camera control actions.
//!
//! # Invariants
//! - Controls consume `ControlAction`s, never raw window events.
//! - This crate has no windowing dependency; the app translates platform events.

pub mod action;
pub mod pointer;

pub use action::ControlAction;
pub use pointer::{Modifiers, PointerButton, PointerTracker};
