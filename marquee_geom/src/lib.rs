// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Geom: coordinate policy and overlap tests for region selection.
//!
//! ## Overview
//!
//! This crate holds the two pure-geometry pieces the selection engine is built
//! on:
//!
//! - [`ContainerBounds`](crate::bounds::ContainerBounds) — the on-screen
//!   rectangle of the container an image is displayed in. It converts absolute
//!   pointer coordinates into container-local coordinates and clamps them to
//!   the container, so everything downstream operates in a bounded local frame
//!   regardless of pointer overshoot.
//! - [`overlaps`](crate::overlap::overlaps) — the boundary-inclusive
//!   axis-aligned overlap predicate used to reject intersecting selectors.
//!
//! Geometry vocabulary comes from [`kurbo`]: points are [`kurbo::Point`],
//! extents are [`kurbo::Size`], rectangles are [`kurbo::Rect`] with `x0 ≤ x1`
//! and `y0 ≤ y1` once normalized.
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

pub mod bounds;
pub mod overlap;

pub use bounds::ContainerBounds;
pub use overlap::overlaps;
