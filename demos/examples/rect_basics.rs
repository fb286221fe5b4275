// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rect basics.
//!
//! Build rectangles, move their edges, and combine them.
//!
//! Run:
//! - `cargo run -p understory_examples --example rect_basics`

use kurbo::{Point, Vec2};
use understory_rect::Rect;

fn main() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::side_rect(5.0, 15.0, 5.0, 15.0);
    println!("a = {a}, b = {b}");

    // Moving the left edge keeps the right edge where it was.
    let mut c = a;
    c.set_left(5.0);
    println!("a with left = 5: {c}");
    assert_eq!(c.right(), a.right());

    let overlap = a.intersect(&b);
    let bounds = a.union(&b);
    println!("intersect: {overlap}, union: {bounds}");
    assert_eq!(overlap, Rect::new(5.0, 5.0, 5.0, 5.0));
    assert_eq!(bounds, Rect::new(0.0, 0.0, 15.0, 15.0));

    // Edge-adjacent rectangles touch but do not intersect.
    let neighbor = a + Vec2::new(a.width, 0.0);
    println!(
        "neighbor {neighbor}: intersects = {}, intersection empty = {}",
        a.intersects_with(&neighbor),
        a.intersect(&neighbor).is_empty()
    );
    assert!(!a.intersects_with(&neighbor));

    let marker = Rect::square(a.center(), 2.0);
    println!("marker around center: {marker}");
    assert!(a.contains_rect(&marker));
    assert!(a.contains(Point::new(10.0, 10.0)), "corners are inside");
}
