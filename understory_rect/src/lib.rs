// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rect --heading-base-level=0

//! Understory Rect: the axis-aligned rectangle every widget is laid out, clipped, and hit-tested with.
//!
//! [`Rect`] is a small `Copy` value holding a top-left corner and an extent, in a
//! flat 2D space where Y grows downward.
//!
//! - Build rectangles from origin and size, from edges ([`Rect::side_rect`]), from
//!   corners, or as a centered [`Rect::square`].
//! - Read and move edges; moving one edge keeps the opposite edge fixed.
//! - Test points and rectangles with [`Rect::contains`], [`Rect::contains_rect`],
//!   and [`Rect::intersects_with`].
//! - Combine rectangles with [`Rect::intersect`] and [`Rect::union`].
//! - Translate with `+`/`-` by a [`kurbo::Vec2`], scale with `*`, and derive
//!   sub-rectangles with [`Rect::expand`], [`Rect::left_part`], and [`Rect::right_part`].
//!
//! Positions, sizes, and offsets use Kurbo's [`Point`](kurbo::Point),
//! [`Size`](kurbo::Size), and [`Vec2`](kurbo::Vec2), and [`Rect`] converts to and
//! from [`kurbo::Rect`].
//!
//! ## Not a layout engine
//!
//! This crate does not measure, arrange, or render anything.
//! Upstream code decides where widgets go and uses [`Rect`] to describe and query the result.
//!
//! ## Degenerate values
//!
//! No operation fails. Inverted edges, disjoint intersections, and negative
//! expansions produce zero- or negative-area rectangles, which are ordinary values.
//! Check [`Rect::is_empty`] where an empty region matters.
//!
//! ## Clipping without a clip
//!
//! [`Rect::VERY_BIG`] covers the whole usable coordinate space while keeping its
//! edges finite, so it can stand in for "no clip" and still be intersected,
//! translated, or expanded.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_rect::Rect;
//!
//! // A row with a 24px icon on the right.
//! let row = Rect::new(0.0, 100.0, 200.0, 24.0);
//! let icon = row.right_part(24.0);
//! assert_eq!(icon, Rect::new(176.0, 100.0, 24.0, 24.0));
//!
//! // Clip the row against a scrolled viewport.
//! let viewport = Rect::new(0.0, 0.0, 200.0, 110.0) + Vec2::new(0.0, 5.0);
//! let visible = row.intersect(&viewport);
//! assert_eq!(visible, Rect::new(0.0, 100.0, 200.0, 15.0));
//!
//! // Hit-test a pointer against the visible part.
//! assert!(visible.contains(Point::new(10.0, 110.0)));
//! assert!(!visible.contains(Point::new(10.0, 120.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod ops;
mod rect;

pub use rect::Rect;
