//! A headless looping pager engine.
//!
//! For adapter-level utilities (controller, measure helpers), see the
//! `looping-pager-adapter` crate.
//!
//! This crate implements the illusion of infinite circular paging on top of a
//! strictly finite, linear paging primitive: two sentinel slots mirroring the
//! opposite ends of the item list, silent position teleports when a sentinel
//! comes to rest, and indicator callbacks that stay in sync through partial,
//! reversed, and multi-page drags.
//!
//! It is UI-agnostic. A GUI/mobile layer is expected to provide:
//! - the scroll-event stream of its linear pager (scrolled/selected/state)
//! - view construction and binding (via [`ViewBinder`])
//! - application of the [`Jump`] commands the engine hands back
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod cache;
mod indicator;
mod options;
mod pager;
mod source;
mod state;
mod types;


pub use adapter::{LoopingAdapter, RefreshGuard, ViewBinder};
pub use cache::ViewCache;
pub use indicator::IndicatorBridge;
pub use options::PagerOptions;
pub use pager::LoopingPager;
pub use source::PageSource;
pub use state::PagerState;
pub use types::{Jump, ScrollDirection, ScrollPhase, ViewId, ViewKind};
