// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Create basics.
//!
//! Draws two selectors from synthetic pointer streams, then attempts a third
//! that overlaps the first and is discarded on release. Prints each outcome
//! and the final host-facing `{x, y, width, height}` projection as JSON.
//!
//! Run:
//! - `cargo run -p marquee_demos --example create_and_commit`

use kurbo::{Point, Size};
use marquee_geom::ContainerBounds;
use marquee_session::session::Session;
use marquee_session::set::SelectorSet;

fn draw(
    session: &mut Session,
    set: &mut SelectorSet,
    bounds: ContainerBounds,
    from: Point,
    to: Point,
) {
    session.begin_create(bounds, from);
    // A real host feeds many intermediate samples; the endpoint decides.
    session.update(from.midpoint(to), set);
    let live = session.update(to, set).unwrap();
    let outcome = session.finish(set);
    println!(
        "  drag {from:?} -> {to:?}: live={:?} overlap={} => {outcome:?}",
        live.rect, live.overlap
    );
}

fn main() {
    let bounds = ContainerBounds::new(Point::ZERO, Size::new(640.0, 480.0));
    let mut set = SelectorSet::new();
    let mut session = Session::new();

    println!("== Drawing selectors ==");
    draw(&mut session, &mut set, bounds, Point::new(40.0, 40.0), Point::new(180.0, 140.0));
    draw(&mut session, &mut set, bounds, Point::new(300.0, 60.0), Point::new(420.0, 200.0));
    // Overlaps the first selector: flagged live, discarded at release.
    draw(&mut session, &mut set, bounds, Point::new(150.0, 100.0), Point::new(260.0, 220.0));

    println!("== Committed regions ({} of 3 drags) ==", set.len());
    let json = serde_json::to_string_pretty(&set.regions()).expect("regions serialize");
    println!("{json}");
}
