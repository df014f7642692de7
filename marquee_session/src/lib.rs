// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Session: a deterministic drag/resize/overlap engine for
//! non-overlapping region selectors.
//!
//! ## Overview
//!
//! A host UI displays an image inside a container and lets the user draw,
//! move, resize, and delete rectangular "selector" regions over it. This
//! crate is the headless core of that interaction: it converts a stream of
//! pointer samples plus a chosen interaction mode into rectangle geometry,
//! live overlap feedback, handle re-labelling when a resize inverts past the
//! opposite edge, and an atomic commit-or-discard decision when the gesture
//! ends. It performs no rendering and owns no event loop.
//!
//! Three pieces:
//!
//! - [`Handle`](crate::handle::Handle) — the static directory of the eight
//!   resize handles: which edges each drives, its mirror under inversion, and
//!   a hit test for classifying pointer-down.
//! - [`SelectorSet`](crate::set::SelectorSet) — the authoritative,
//!   creation-ordered collection of committed selectors. Only a finished
//!   gesture mutates it.
//! - [`Session`](crate::session::Session) — the per-gesture state machine:
//!   `Idle → {Creating | Moving | Resizing} → Idle`, fed one pointer sample
//!   at a time.
//!
//! ## Usage
//!
//! The host wires pointer events to one [`Session`](crate::session::Session):
//! pointer-down picks a `begin_*` entry point (empty container → create,
//! selector body → move, handle → resize), every pointer-move goes to
//! `update`, and pointer-up goes to `finish`. Between events the host renders
//! the committed set plus, while a gesture is active, the
//! [`Live`](crate::session::Live) preview (dashed outline, red border on
//! overlap). Register the move/up listeners when the gesture starts and
//! remove them on both the commit and discard exit paths.
//!
//! ```
//! use kurbo::{Point, Size};
//! use marquee_geom::ContainerBounds;
//! use marquee_session::session::{CommitOutcome, Session};
//! use marquee_session::set::SelectorSet;
//!
//! let bounds = ContainerBounds::new(Point::ZERO, Size::new(400.0, 300.0));
//! let mut set = SelectorSet::new();
//! let mut session = Session::new();
//!
//! session.begin_create(bounds, Point::new(50.0, 50.0));
//! session.update(Point::new(150.0, 120.0), &set);
//! let outcome = session.finish(&mut set);
//!
//! assert!(matches!(outcome, CommitOutcome::Committed(_)));
//! assert_eq!(set.len(), 1);
//! ```
//!
//! ## Determinism
//!
//! Everything is single-threaded and synchronous: one session at a time, one
//! `update` per pointer-move, processed in arrival order. Intermediate moves
//! only ever touch preview state; the committed set changes exactly once per
//! gesture, at `finish`, or not at all.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod handle;
pub mod session;
pub mod set;

pub use handle::Handle;
pub use session::Session;
pub use set::{SelectorId, SelectorSet};
