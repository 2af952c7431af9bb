//! Adapter utilities for the `looping-pager` crate.
//!
//! The `looping-pager` crate is UI-agnostic and focuses on the core slot math
//! and state. This crate provides small, framework-neutral helpers commonly
//! needed by hosts:
//!
//! - A controller that owns the pager plus its adapter and keeps a window of
//!   instantiated views attached around the current slot
//! - Measurement helpers for the aspect-ratio and wrap-content sizing rules
//!
//! This crate is intentionally framework-agnostic (no Android/GTK bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod measure;


pub use controller::PagerController;
pub use measure::{HeightConstraint, MeasuredHeight, aspect_height, resolve_height, wrap_content_height};
