// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Move with overlap rollback.
//!
//! Two committed selectors; the second is dragged onto the first. The live
//! preview flags the overlap while the drag is in flight, and the release
//! discards the gesture, leaving the committed geometry exactly as it was.
//!
//! Run:
//! - `cargo run -p marquee_demos --example move_overlap_discard`

use kurbo::{Point, Rect, Size};
use marquee_geom::ContainerBounds;
use marquee_session::session::Session;
use marquee_session::set::SelectorSet;

fn main() {
    let bounds = ContainerBounds::new(Point::ZERO, Size::new(640.0, 480.0));
    let mut set = SelectorSet::new();
    set.append(Rect::new(40.0, 40.0, 160.0, 160.0));
    let target = set.append(Rect::new(300.0, 40.0, 420.0, 160.0));
    let before = set.get(target).unwrap().rect();

    let mut session = Session::new();
    // Grab the second selector at its center.
    assert!(session.begin_move(bounds, Point::new(360.0, 100.0), target, &set));

    println!("== Dragging selector 2 toward selector 1 ==");
    for x in [300.0, 220.0, 140.0] {
        let live = session.update(Point::new(x, 100.0), &set).unwrap();
        println!("  pointer x={x:>5}: rect={:?} overlap={}", live.rect, live.overlap);
    }

    let outcome = session.finish(&mut set);
    println!("== Release: {outcome:?} ==");
    let after = set.get(target).unwrap().rect();
    println!("  before={before:?}");
    println!("  after ={after:?} (unchanged: {})", before == after);
}
