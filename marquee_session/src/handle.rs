// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resize handle directory.
//!
//! ## Overview
//!
//! A selector exposes eight handles: four corners and four edge midlines,
//! compass-named. Each handle drives one or two edges of the rectangle —
//! `W` moves the left edge (`x0`, affecting x and width), `N` the top edge
//! (`y0`, affecting y and height), corners combine both axes. The directory
//! is static: [`Handle::edges`] says which edges a handle may adjust, and
//! [`Handle::mirror_x`] / [`Handle::mirror_y`] give the opposite handle used
//! when a resize drags an edge past its opposite edge and the rectangle
//! inverts.
//!
//! [`Handle::hit_test`] classifies a container-local point against a
//! selector's border, corners before edges, so hosts can decide on
//! pointer-down whether a gesture grabs a handle.

use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// The rectangle edges a handle may adjust.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Left edge: `x0`, affecting x and width.
        const LEFT   = 0b0000_0001;
        /// Right edge: `x1`, affecting width only.
        const RIGHT  = 0b0000_0010;
        /// Top edge: `y0`, affecting y and height.
        const TOP    = 0b0000_0100;
        /// Bottom edge: `y1`, affecting height only.
        const BOTTOM = 0b0000_1000;
    }
}

/// One of the eight resize handles on a selector's border.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Handle {
    /// North-west corner (top-left).
    NW,
    /// North edge (top).
    N,
    /// North-east corner (top-right).
    NE,
    /// East edge (right).
    E,
    /// South-east corner (bottom-right).
    SE,
    /// South edge (bottom).
    S,
    /// South-west corner (bottom-left).
    SW,
    /// West edge (left).
    W,
}

impl Handle {
    /// All eight handles, clockwise from the top-left corner.
    pub const ALL: [Self; 8] = [
        Self::NW,
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
    ];

    /// Which edges this handle drives.
    pub fn edges(self) -> Edges {
        match self {
            Self::NW => Edges::LEFT | Edges::TOP,
            Self::N => Edges::TOP,
            Self::NE => Edges::RIGHT | Edges::TOP,
            Self::E => Edges::RIGHT,
            Self::SE => Edges::RIGHT | Edges::BOTTOM,
            Self::S => Edges::BOTTOM,
            Self::SW => Edges::LEFT | Edges::BOTTOM,
            Self::W => Edges::LEFT,
        }
    }

    /// The handle this one becomes when the rectangle inverts horizontally.
    ///
    /// Purely vertical handles are their own mirror.
    pub fn mirror_x(self) -> Self {
        match self {
            Self::W => Self::E,
            Self::E => Self::W,
            Self::NW => Self::NE,
            Self::NE => Self::NW,
            Self::SW => Self::SE,
            Self::SE => Self::SW,
            Self::N | Self::S => self,
        }
    }

    /// The handle this one becomes when the rectangle inverts vertically.
    ///
    /// Purely horizontal handles are their own mirror.
    pub fn mirror_y(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::S => Self::N,
            Self::NW => Self::SW,
            Self::SW => Self::NW,
            Self::NE => Self::SE,
            Self::SE => Self::NE,
            Self::W | Self::E => self,
        }
    }

    /// Whether this handle is a corner (drives both axes).
    pub fn is_corner(self) -> bool {
        let e = self.edges();
        e.intersects(Edges::LEFT | Edges::RIGHT) && e.intersects(Edges::TOP | Edges::BOTTOM)
    }

    /// Classify a container-local point against a selector's border.
    ///
    /// Returns the handle whose grab area contains `p`, or `None` when the
    /// point grabs no handle. Corners take priority over edges so that a
    /// small selector still exposes all four corners; edge grab bands span
    /// the full edge, not just its midpoint. `tolerance` is the grab radius
    /// in pixels on each side of the border.
    pub fn hit_test(p: Point, rect: Rect, tolerance: f64) -> Option<Self> {
        let near = |a: f64, b: f64| (a - b).max(b - a) <= tolerance;

        // Corners first.
        if near(p.x, rect.x0) && near(p.y, rect.y0) {
            return Some(Self::NW);
        }
        if near(p.x, rect.x1) && near(p.y, rect.y0) {
            return Some(Self::NE);
        }
        if near(p.x, rect.x0) && near(p.y, rect.y1) {
            return Some(Self::SW);
        }
        if near(p.x, rect.x1) && near(p.y, rect.y1) {
            return Some(Self::SE);
        }

        let in_x_span = p.x >= rect.x0 && p.x <= rect.x1;
        let in_y_span = p.y >= rect.y0 && p.y <= rect.y1;
        if near(p.y, rect.y0) && in_x_span {
            return Some(Self::N);
        }
        if near(p.y, rect.y1) && in_x_span {
            return Some(Self::S);
        }
        if near(p.x, rect.x0) && in_y_span {
            return Some(Self::W);
        }
        if near(p.x, rect.x1) && in_y_span {
            return Some(Self::E);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_table_matches_directory() {
        assert_eq!(Handle::N.edges(), Edges::TOP);
        assert_eq!(Handle::S.edges(), Edges::BOTTOM);
        assert_eq!(Handle::W.edges(), Edges::LEFT);
        assert_eq!(Handle::E.edges(), Edges::RIGHT);
        assert_eq!(Handle::NW.edges(), Edges::LEFT | Edges::TOP);
        assert_eq!(Handle::NE.edges(), Edges::RIGHT | Edges::TOP);
        assert_eq!(Handle::SW.edges(), Edges::LEFT | Edges::BOTTOM);
        assert_eq!(Handle::SE.edges(), Edges::RIGHT | Edges::BOTTOM);
    }

    #[test]
    fn every_handle_drives_at_least_one_edge() {
        for h in Handle::ALL {
            assert!(!h.edges().is_empty(), "handle {h:?} drives no edge");
        }
    }

    // Mirrors are involutions and swap exactly the expected axis.
    #[test]
    fn mirror_tables_are_involutions() {
        for h in Handle::ALL {
            assert_eq!(h.mirror_x().mirror_x(), h);
            assert_eq!(h.mirror_y().mirror_y(), h);
        }
    }

    #[test]
    fn mirror_x_swaps_horizontal_edges_only() {
        for h in Handle::ALL {
            let m = h.mirror_x().edges();
            let e = h.edges();
            assert_eq!(m.contains(Edges::LEFT), e.contains(Edges::RIGHT));
            assert_eq!(m.contains(Edges::RIGHT), e.contains(Edges::LEFT));
            assert_eq!(m & (Edges::TOP | Edges::BOTTOM), e & (Edges::TOP | Edges::BOTTOM));
        }
    }

    #[test]
    fn mirror_y_swaps_vertical_edges_only() {
        for h in Handle::ALL {
            let m = h.mirror_y().edges();
            let e = h.edges();
            assert_eq!(m.contains(Edges::TOP), e.contains(Edges::BOTTOM));
            assert_eq!(m.contains(Edges::BOTTOM), e.contains(Edges::TOP));
            assert_eq!(m & (Edges::LEFT | Edges::RIGHT), e & (Edges::LEFT | Edges::RIGHT));
        }
    }

    #[test]
    fn corner_predicate() {
        assert!(Handle::NW.is_corner());
        assert!(Handle::SE.is_corner());
        assert!(!Handle::N.is_corner());
        assert!(!Handle::E.is_corner());
    }

    #[test]
    fn hit_test_corners() {
        let r = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(
            Handle::hit_test(Point::new(100.0, 100.0), r, 4.0),
            Some(Handle::NW)
        );
        assert_eq!(
            Handle::hit_test(Point::new(203.0, 98.0), r, 4.0),
            Some(Handle::NE)
        );
        assert_eq!(
            Handle::hit_test(Point::new(101.0, 199.0), r, 4.0),
            Some(Handle::SW)
        );
        assert_eq!(
            Handle::hit_test(Point::new(200.0, 200.0), r, 4.0),
            Some(Handle::SE)
        );
    }

    #[test]
    fn hit_test_edges_span_the_full_edge() {
        let r = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(
            Handle::hit_test(Point::new(150.0, 100.0), r, 4.0),
            Some(Handle::N)
        );
        assert_eq!(
            Handle::hit_test(Point::new(130.0, 202.0), r, 4.0),
            Some(Handle::S)
        );
        assert_eq!(
            Handle::hit_test(Point::new(98.0, 170.0), r, 4.0),
            Some(Handle::W)
        );
        assert_eq!(
            Handle::hit_test(Point::new(200.0, 110.0), r, 4.0),
            Some(Handle::E)
        );
    }

    #[test]
    fn hit_test_corners_beat_edges() {
        let r = Rect::new(100.0, 100.0, 200.0, 200.0);
        // Near both the top edge and the left edge: the corner wins.
        assert_eq!(
            Handle::hit_test(Point::new(102.0, 102.0), r, 4.0),
            Some(Handle::NW)
        );
    }

    #[test]
    fn hit_test_misses_interior_and_outside() {
        let r = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(Handle::hit_test(Point::new(150.0, 150.0), r, 4.0), None);
        assert_eq!(Handle::hit_test(Point::new(50.0, 50.0), r, 4.0), None);
        // Beyond the edge span.
        assert_eq!(Handle::hit_test(Point::new(250.0, 100.0), r, 4.0), None);
    }
}
