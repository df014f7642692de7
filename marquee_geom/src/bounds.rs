// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container bounds: screen→local conversion and the clamp policy.
//!
//! ## Overview
//!
//! A gesture is measured against the container's on-screen rectangle as it was
//! at pointer-down. The host reads that rectangle once when a gesture starts
//! and hands it to the session; it is deliberately *not* re-read mid-gesture,
//! so one gesture runs in one stable coordinate frame even if the page
//! reflows underneath it.
//!
//! Every pointer sample is converted to container-local coordinates; create
//! and move gestures clamp the sample to `[0, width] × [0, height]` before
//! any geometry math, while resize clamps the resulting rectangle per edge.
//! Either way, selectors can never be created or dragged outside the
//! container.
//!
//! An unmounted or not-yet-measured container is represented by
//! [`ContainerBounds::ZERO`]: zero-sized bounds clamp every point to the
//! origin and the gesture proceeds (and later commits nothing, since the
//! resulting rectangle is degenerate).

use kurbo::{Point, Rect, Size};

/// The container's on-screen rectangle, captured at gesture start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerBounds {
    origin: Point,
    size: Size,
}

impl ContainerBounds {
    /// Zero-sized bounds at the screen origin.
    ///
    /// Used when the container has not been mounted or measured yet; clamping
    /// against it collapses every point to the local origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create bounds from a screen-space origin and size.
    ///
    /// Negative extents are treated as zero.
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size: Size::new(size.width.max(0.0), size.height.max(0.0)),
        }
    }

    /// Create bounds from a screen-space rectangle (e.g. the host's measured
    /// bounding box).
    pub fn from_rect(rect: Rect) -> Self {
        let rect = Rect::new(
            rect.x0.min(rect.x1),
            rect.y0.min(rect.y1),
            rect.x0.max(rect.x1),
            rect.y0.max(rect.y1),
        );
        Self {
            origin: Point::new(rect.x0, rect.y0),
            size: Size::new(rect.x1 - rect.x0, rect.y1 - rect.y0),
        }
    }

    /// Screen-space origin of the container.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Extents of the container.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Container width in pixels.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Container height in pixels.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The container's own area in local coordinates: `(0, 0)` to
    /// `(width, height)`.
    pub fn local_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.size.height)
    }

    /// Convert an absolute screen point into container-local coordinates.
    pub fn to_local(&self, screen: Point) -> Point {
        Point::new(screen.x - self.origin.x, screen.y - self.origin.y)
    }

    /// Clamp a container-local point to `[0, width] × [0, height]`.
    ///
    /// Idempotent: clamping a clamped point is a no-op.
    pub fn clamp_local(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(0.0, self.size.width),
            p.y.clamp(0.0, self.size.height),
        )
    }

    /// Convert and clamp in one step: the form every pointer sample takes
    /// before geometry math.
    pub fn clamp_screen(&self, screen: Point) -> Point {
        self.clamp_local(self.to_local(screen))
    }
}

impl Default for ContainerBounds {
    fn default() -> Self {
        Self::ZERO
    }
}
