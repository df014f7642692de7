// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize with handle inversion.
//!
//! Grabs the east handle of a selector and drags it left past the west edge.
//! The rectangle re-normalizes, the active handle flips to west, and further
//! samples drive the left edge. The trace prints the live handle and
//! rectangle at each sample.
//!
//! Run:
//! - `cargo run -p marquee_demos --example resize_inversion`

use kurbo::{Point, Size};
use marquee_geom::ContainerBounds;
use marquee_session::Handle;
use marquee_session::session::Session;
use marquee_session::set::SelectorSet;

fn main() {
    let bounds = ContainerBounds::new(Point::ZERO, Size::new(640.0, 480.0));
    let mut set = SelectorSet::new();
    let id = set.append(kurbo::Rect::new(200.0, 100.0, 280.0, 180.0));

    let mut session = Session::new();
    assert!(session.begin_resize(bounds, Point::new(280.0, 140.0), id, Handle::E, &set));

    println!("== Dragging the east handle left, past the west edge ==");
    for x in [250.0, 210.0, 170.0, 140.0] {
        let live = session.update(Point::new(x, 140.0), &set).unwrap();
        println!(
            "  pointer x={x:>5}: handle={:?} rect={:?}",
            live.handle.unwrap(),
            live.rect
        );
    }

    let outcome = session.finish(&mut set);
    println!("== Release: {outcome:?} ==");
    println!("  committed: {:?}", set.get(id).unwrap().rect());
}
