// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary-inclusive overlap test for axis-aligned rectangles.
//!
//! ## Overview
//!
//! Two selectors may not overlap, and "overlap" here includes sharing an
//! edge: rectangles that merely touch are rejected. The separating-axis
//! condition therefore uses strict inequalities — `b` is separate from `a`
//! only when it lies strictly beyond one of `a`'s edges. Keep the `>`/`<`
//! comparisons as they are; relaxing them to `>=`/`<=` silently changes the
//! touching-edge policy.

use kurbo::Rect;

/// Whether two rectangles overlap, counting shared boundaries as overlap.
///
/// Inputs are expected to be normalized (`x0 ≤ x1`, `y0 ≤ y1`). The test is
/// symmetric, and a rectangle with positive area overlaps itself.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    // Strict inequalities: touching edges do not separate.
    !(b.x0 > a.x1 || b.x1 < a.x0 || b.y0 > a.y1 || b.y1 < a.y0)
}
