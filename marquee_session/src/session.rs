// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-gesture interaction state machine.
//!
//! ## Overview
//!
//! One [`Session`] turns a pointer-down → move×N → pointer-up stream into a
//! committed selector mutation, or into nothing. The machine is a single
//! tagged value — `Idle → {Creating | Moving | Resizing} → Idle` — so there
//! is no combination of half-set flags to reason about: a gesture either is
//! in exactly one mode with all of its state, or the session is idle.
//!
//! The container's on-screen bounds are captured once at `begin_*` and used
//! unchanged for the whole gesture, keeping one gesture in one coordinate
//! frame.
//!
//! ## Geometry rules
//!
//! - **Creating**: the live rectangle is the normalized span of the anchor
//!   and the clamped current point; dragging in any direction works.
//! - **Moving**: the grab offset captured at pointer-down keeps the grab
//!   point fixed relative to the shape; the origin is clamped so the whole
//!   rectangle stays inside the container (size is fixed during a move).
//! - **Resizing**: each active edge follows the incremental pointer delta
//!   since the previous sample. When an edge is dragged past its opposite
//!   edge the rectangle is re-normalized and the active handle is re-assigned
//!   to its mirror, so continued dragging keeps manipulating the edge under
//!   the pointer. The normalized rectangle is then clamped to the container
//!   per edge. Deltas are taken from the unclamped local pointer: clamping
//!   the pointer first would make an inversion at the container edge
//!   unreachable.
//!
//! Every update recomputes the live overlap flag against the committed set,
//! excluding the gesture's own target. The flag is feedback only; geometry is
//! never adjusted to avoid an overlap.
//!
//! ## Commit
//!
//! [`Session::finish`] applies the gesture atomically: an overlapping or
//! zero-area result is discarded (for move/resize the pre-gesture geometry
//! simply remains in the set — preview state never leaked into it), otherwise
//! a create appends and focuses a fresh selector and a move/resize replaces
//! its target in place. The session returns to `Idle` on every exit path,
//! including [`Session::cancel`] for hosts that treat pointer-cancel or grab
//! loss as discard.

use core::mem;

use kurbo::{Point, Rect, Size, Vec2};
use marquee_geom::ContainerBounds;

use crate::handle::{Edges, Handle};
use crate::set::{SelectorId, SelectorSet};

/// The interaction mode of an active gesture.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Drawing a new selector from an anchor point.
    Create,
    /// Dragging an existing selector by its body.
    Move,
    /// Dragging one of an existing selector's handles.
    Resize,
}

/// Why a finished gesture was discarded.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DiscardReason {
    /// The result overlapped a sibling selector (boundary-touching counts).
    Overlap,
    /// The result had zero width or zero height.
    Degenerate,
}

/// The result of [`Session::finish`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CommitOutcome {
    /// The gesture was applied; for a create this carries the fresh id, for a
    /// move/resize the (unchanged) target id.
    Committed(SelectorId),
    /// The gesture was discarded and the committed set is untouched.
    Discarded(DiscardReason),
    /// There was no gesture to finish, or its target vanished from the set
    /// (the latter is a model violation and debug-asserted downstream).
    NoGesture,
}

/// Published preview state for an active gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Live {
    /// Which kind of gesture is running.
    pub mode: Mode,
    /// The selector being edited; `None` while creating.
    pub target: Option<SelectorId>,
    /// The active handle; `None` unless resizing. Reflects inversion swaps.
    pub handle: Option<Handle>,
    /// The live rectangle, normalized, in container-local pixels.
    pub rect: Rect,
    /// Whether the live rectangle currently overlaps a sibling.
    pub overlap: bool,
}

#[derive(Clone, Debug)]
enum Phase {
    Idle,
    Creating {
        anchor: Point,
        current: Point,
        overlap: bool,
    },
    Moving {
        target: SelectorId,
        grab: Vec2,
        size: Size,
        origin: Point,
        overlap: bool,
    },
    Resizing {
        target: SelectorId,
        handle: Handle,
        rect: Rect,
        last: Point,
        overlap: bool,
    },
}

/// The drag/resize state machine for one gesture at a time.
#[derive(Clone, Debug)]
pub struct Session {
    bounds: ContainerBounds,
    phase: Phase,
}

impl Session {
    /// Create an idle session.
    pub fn new() -> Self {
        Self {
            bounds: ContainerBounds::ZERO,
            phase: Phase::Idle,
        }
    }

    /// Whether no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Start a create gesture from a pointer-down on empty container area.
    ///
    /// `bounds` is the container's on-screen rectangle measured now; it is
    /// held for the whole gesture. `pointer` is in absolute screen
    /// coordinates.
    pub fn begin_create(&mut self, bounds: ContainerBounds, pointer: Point) {
        self.debug_assert_idle("begin_create");
        let p = bounds.clamp_screen(pointer);
        self.bounds = bounds;
        self.phase = Phase::Creating {
            anchor: p,
            current: p,
            overlap: false,
        };
    }

    /// Start a move gesture from a pointer-down on a selector's body.
    ///
    /// Captures the pointer-to-origin grab offset so the grab point stays
    /// fixed relative to the shape. Returns `false` (staying idle) if
    /// `target` is not in the set, which is a model violation under the
    /// one-session discipline.
    pub fn begin_move(
        &mut self,
        bounds: ContainerBounds,
        pointer: Point,
        target: SelectorId,
        set: &SelectorSet,
    ) -> bool {
        self.debug_assert_idle("begin_move");
        let Some(sel) = set.get(target) else {
            debug_assert!(false, "begin_move: stale target {target:?}");
            return false;
        };
        let rect = sel.rect();
        let grab = bounds.to_local(pointer) - rect.origin();
        self.bounds = bounds;
        self.phase = Phase::Moving {
            target,
            grab,
            size: rect.size(),
            origin: rect.origin(),
            overlap: false,
        };
        true
    }

    /// Start a resize gesture from a pointer-down on one of a selector's
    /// handles.
    ///
    /// Returns `false` (staying idle) if `target` is not in the set.
    pub fn begin_resize(
        &mut self,
        bounds: ContainerBounds,
        pointer: Point,
        target: SelectorId,
        handle: Handle,
        set: &SelectorSet,
    ) -> bool {
        self.debug_assert_idle("begin_resize");
        let Some(sel) = set.get(target) else {
            debug_assert!(false, "begin_resize: stale target {target:?}");
            return false;
        };
        let last = bounds.to_local(pointer);
        self.bounds = bounds;
        self.phase = Phase::Resizing {
            target,
            handle,
            rect: sel.rect(),
            last,
            overlap: false,
        };
        true
    }

    /// Feed one pointer-move sample (absolute screen coordinates).
    ///
    /// Recomputes the live rectangle and overlap flag and returns the new
    /// preview, or `None` when idle (hover moves are ignored). The committed
    /// set is read, never written.
    pub fn update(&mut self, pointer: Point, set: &SelectorSet) -> Option<Live> {
        match &mut self.phase {
            Phase::Idle => {}
            Phase::Creating {
                anchor,
                current,
                overlap,
            } => {
                *current = self.bounds.clamp_screen(pointer);
                let rect = Rect::from_points(*anchor, *current);
                *overlap = set.any_overlap(rect, None);
            }
            Phase::Moving {
                target,
                grab,
                size,
                origin,
                overlap,
            } => {
                let desired = self.bounds.to_local(pointer) - *grab;
                let clamped = self.bounds.clamp_local(desired);
                // Size is fixed during a move; keep the far corner inside.
                let max_x = (self.bounds.width() - size.width).max(0.0);
                let max_y = (self.bounds.height() - size.height).max(0.0);
                *origin = Point::new(clamped.x.min(max_x), clamped.y.min(max_y));
                let rect = Rect::from_origin_size(*origin, *size);
                *overlap = set.any_overlap(rect, Some(*target));
            }
            Phase::Resizing {
                target,
                handle,
                rect,
                last,
                overlap,
            } => {
                let p = self.bounds.to_local(pointer);
                let dx = p.x - last.x;
                let dy = p.y - last.y;
                let edges = handle.edges();

                let mut r = *rect;
                if edges.contains(Edges::LEFT) {
                    r.x0 += dx;
                }
                if edges.contains(Edges::RIGHT) {
                    r.x1 += dx;
                }
                if edges.contains(Edges::TOP) {
                    r.y0 += dy;
                }
                if edges.contains(Edges::BOTTOM) {
                    r.y1 += dy;
                }

                // Inversion: the edge crossed its opposite. Re-normalize and
                // hand the gesture to the mirrored handle so the edge under
                // the pointer stays the one being dragged.
                if r.x1 < r.x0 {
                    mem::swap(&mut r.x0, &mut r.x1);
                    *handle = handle.mirror_x();
                }
                if r.y1 < r.y0 {
                    mem::swap(&mut r.y0, &mut r.y1);
                    *handle = handle.mirror_y();
                }

                // Per-edge container clamp on the normalized rectangle.
                r.x0 = r.x0.max(0.0);
                r.y0 = r.y0.max(0.0);
                r.x1 = r.x1.min(self.bounds.width()).max(r.x0);
                r.y1 = r.y1.min(self.bounds.height()).max(r.y0);

                *rect = r;
                *last = p;
                *overlap = set.any_overlap(r, Some(*target));
            }
        }
        self.live()
    }

    /// The current preview, or `None` when idle.
    pub fn live(&self) -> Option<Live> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Creating {
                anchor,
                current,
                overlap,
            } => Some(Live {
                mode: Mode::Create,
                target: None,
                handle: None,
                rect: Rect::from_points(*anchor, *current),
                overlap: *overlap,
            }),
            Phase::Moving {
                target,
                size,
                origin,
                overlap,
                ..
            } => Some(Live {
                mode: Mode::Move,
                target: Some(*target),
                handle: None,
                rect: Rect::from_origin_size(*origin, *size),
                overlap: *overlap,
            }),
            Phase::Resizing {
                target,
                handle,
                rect,
                overlap,
                ..
            } => Some(Live {
                mode: Mode::Resize,
                target: Some(*target),
                handle: Some(*handle),
                rect: *rect,
                overlap: *overlap,
            }),
        }
    }

    /// End the gesture on pointer-up and apply or discard it.
    ///
    /// Overlapping or zero-area results are discarded and the set is left
    /// untouched. Otherwise a create appends a fresh selector and focuses it;
    /// a move/resize replaces its target's rectangle in place, preserving
    /// creation order. The session is idle afterwards in every case.
    pub fn finish(&mut self, set: &mut SelectorSet) -> CommitOutcome {
        let phase = mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Idle => CommitOutcome::NoGesture,
            Phase::Creating {
                anchor,
                current,
                overlap,
            } => Self::commit(set, Rect::from_points(anchor, current), overlap, None),
            Phase::Moving {
                target,
                size,
                origin,
                overlap,
                ..
            } => Self::commit(set, Rect::from_origin_size(origin, size), overlap, Some(target)),
            Phase::Resizing {
                target,
                rect,
                overlap,
                ..
            } => Self::commit(set, rect, overlap, Some(target)),
        }
    }

    /// Abandon the gesture without touching the committed set.
    ///
    /// For hosts that receive pointer-cancel or lose the grab: treated as
    /// discard. Returns whether a gesture was actually abandoned.
    pub fn cancel(&mut self) -> bool {
        let was_active = !self.is_idle();
        self.phase = Phase::Idle;
        was_active
    }

    fn commit(
        set: &mut SelectorSet,
        rect: Rect,
        overlap: bool,
        target: Option<SelectorId>,
    ) -> CommitOutcome {
        if overlap {
            return CommitOutcome::Discarded(DiscardReason::Overlap);
        }
        if rect.width() == 0.0 || rect.height() == 0.0 {
            return CommitOutcome::Discarded(DiscardReason::Degenerate);
        }
        match target {
            None => {
                let id = set.append(rect);
                set.set_active(Some(id));
                CommitOutcome::Committed(id)
            }
            Some(id) => {
                if set.replace(id, rect) {
                    CommitOutcome::Committed(id)
                } else {
                    CommitOutcome::NoGesture
                }
            }
        }
    }

    fn debug_assert_idle(&self, op: &str) {
        debug_assert!(
            self.is_idle(),
            "{op}: a gesture is already in progress; finish or cancel it first"
        );
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
