// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The authoritative set of committed selectors.
//!
//! ## Overview
//!
//! [`SelectorSet`] owns the creation-ordered sequence of committed selector
//! rectangles. It is mutated only when a gesture commits (or the host deletes
//! a selector); live/preview geometry never enters it. Order is creation
//! order and survives `replace`, which is what keeps the displayed index
//! badge of a selector stable across moves and resizes.
//!
//! Observers detect change through [`SelectorSet::revision`], a counter
//! bumped on every successful mutation; an unchanged revision means the
//! sequence is byte-for-byte the one previously observed.
//!
//! `replace` and `remove` on an id that is not in the set are no-ops. Under
//! the one-session-at-a-time discipline they are unreachable, so they
//! `debug_assert!` to surface model violations in testing while staying
//! harmless in release hosts.

use alloc::vec::Vec;

use kurbo::Rect;
use marquee_geom::overlaps;

/// Stable, opaque identifier of a committed selector.
///
/// Minted by [`SelectorSet::append`] from a per-set monotone counter. The id
/// of a selector never changes across moves and resizes; a fresh id appears
/// only when a new selector is created.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SelectorId(u64);

/// A committed selector: an id plus its normalized rectangle in
/// container-local pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Selector {
    id: SelectorId,
    rect: Rect,
}

impl Selector {
    /// The selector's stable identifier.
    pub fn id(&self) -> SelectorId {
        self.id
    }

    /// The selector's rectangle (`x0 ≤ x1`, `y0 ≤ y1`, positive area).
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// The host-facing projection of one selector: origin and extents, id
/// dropped.
///
/// [`SelectorSet::regions`] emits these in creation order; with the `serde`
/// feature they serialize as `{"x": …, "y": …, "width": …, "height": …}`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Region {
    /// Left offset in container-local pixels.
    pub x: f64,
    /// Top offset in container-local pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// Creation-ordered collection of committed selectors.
#[derive(Clone, Debug, Default)]
pub struct SelectorSet {
    items: Vec<Selector>,
    active: Option<SelectorId>,
    next_id: u64,
    revision: u64,
}

impl SelectorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed selectors.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no selectors.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The committed selectors in creation order.
    pub fn selectors(&self) -> &[Selector] {
        &self.items
    }

    /// Look up a selector by id.
    pub fn get(&self, id: SelectorId) -> Option<&Selector> {
        self.items.iter().find(|s| s.id == id)
    }

    /// Position of a selector in creation order (the displayed badge index).
    pub fn index_of(&self, id: SelectorId) -> Option<usize> {
        self.items.iter().position(|s| s.id == id)
    }

    /// The focused selector, if any.
    pub fn active(&self) -> Option<SelectorId> {
        self.active
    }

    /// Set or clear the focused selector.
    ///
    /// Focusing an id that is not in the set is refused (and debug-asserted).
    pub fn set_active(&mut self, id: Option<SelectorId>) {
        if let Some(id) = id
            && self.get(id).is_none()
        {
            debug_assert!(false, "set_active: unknown selector id {id:?}");
            return;
        }
        self.active = id;
    }

    /// Mutation counter; bumped on every successful `append`/`replace`/
    /// `remove`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a newly created selector, minting its id.
    ///
    /// Callers are responsible for only committing normalized, positive-area,
    /// in-bounds, non-overlapping rectangles; the session enforces this.
    pub fn append(&mut self, rect: Rect) -> SelectorId {
        let id = SelectorId(self.next_id);
        self.next_id += 1;
        self.items.push(Selector { id, rect });
        self.revision += 1;
        id
    }

    /// Replace the rectangle of an existing selector in place, preserving its
    /// position in creation order.
    ///
    /// Returns whether a selector was updated.
    pub fn replace(&mut self, id: SelectorId, rect: Rect) -> bool {
        let Some(s) = self.items.iter_mut().find(|s| s.id == id) else {
            debug_assert!(false, "replace: unknown selector id {id:?}");
            return false;
        };
        s.rect = rect;
        self.revision += 1;
        true
    }

    /// Remove a selector, clearing focus if it was focused.
    ///
    /// Returns whether a selector was removed.
    pub fn remove(&mut self, id: SelectorId) -> bool {
        let Some(idx) = self.index_of(id) else {
            debug_assert!(false, "remove: unknown selector id {id:?}");
            return false;
        };
        self.items.remove(idx);
        if self.active == Some(id) {
            self.active = None;
        }
        self.revision += 1;
        true
    }

    /// Whether `candidate` overlaps any committed selector other than
    /// `exclude`.
    ///
    /// `exclude` is the id of the selector being edited, so a move or resize
    /// is not tested against its own pre-edit geometry. Boundary-touching
    /// counts as overlap (see [`marquee_geom::overlaps`]).
    pub fn any_overlap(&self, candidate: Rect, exclude: Option<SelectorId>) -> bool {
        self.items
            .iter()
            .filter(|s| Some(s.id) != exclude)
            .any(|s| overlaps(candidate, s.rect))
    }

    /// The host-facing projection: `{x, y, width, height}` per selector, in
    /// creation order, ids dropped.
    pub fn regions(&self) -> Vec<Region> {
        self.items
            .iter()
            .map(|s| Region {
                x: s.rect.x0,
                y: s.rect.y0,
                width: s.rect.x1 - s.rect.x0,
                height: s.rect.y1 - s.rect.y0,
            })
            .collect()
    }
}
