#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::consts::STAR_COLOR;
use crate::recording::{DrawCall, RecordingSurface};

// =============================================================
// Helpers
// =============================================================

fn star_at(x: f64, y: f64) -> Star {
    Star { x, y, base_radius: 3.0, radius: 3.0, speed: 0.5, color: STAR_COLOR }
}

/// Five stars inside the box around (100, 100), interleaved with stars outside it.
fn clustered_stars() -> Vec<Star> {
    vec![
        star_at(500.0, 500.0), // 0 outside
        star_at(100.0, 100.0), // 1 s0
        star_at(105.0, 95.0),  // 2 s1
        star_at(500.0, 100.0), // 3 outside
        star_at(90.0, 110.0),  // 4 s2
        star_at(101.0, 101.0), // 5 s3
        star_at(99.0, 92.0),   // 6 s4
    ]
}

fn cluster_box() -> SelectionBox {
    SelectionBox::new(Point::new(100.0, 100.0), 20.0)
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

// =============================================================
// Selection
// =============================================================

#[test]
fn from_box_takes_first_matches_in_population_order() {
    let stars = clustered_stars();
    let c = Constellation::from_box(&stars, cluster_box(), 3, false, 4.0);
    assert_eq!(c.stars, vec![1, 2, 4]);
}

#[test]
fn from_box_with_large_limit_takes_all_matches() {
    let stars = clustered_stars();
    let c = Constellation::from_box(&stars, cluster_box(), 10, true, 4.0);
    assert_eq!(c.stars, vec![1, 2, 4, 5, 6]);
    assert!(c.closed);
}

#[test]
fn from_box_with_no_matches_is_empty() {
    let stars = clustered_stars();
    let c = Constellation::from_box(&stars, SelectionBox::new(Point::new(300.0, 300.0), 10.0), 10, false, 4.0);
    assert!(c.stars.is_empty());
    assert!(!c.is_drawable());
}

#[test]
fn from_box_clamps_negative_width() {
    let c = Constellation::from_box(&[], cluster_box(), 3, false, -2.0);
    assert_eq!(c.width, 0.0);
}

#[test]
fn random_selection_stays_inside_its_box_limits() {
    let mut rng = StdRng::seed_from_u64(21);
    let stars = Star::populate(&mut rng, viewport(), 500);
    for _ in 0..200 {
        let c = Constellation::random(&mut rng, &stars, viewport(), 4.0);
        assert!(c.stars.len() <= 10);
        assert_eq!(c.width, 4.0);
        let mut sorted = c.stars.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, c.stars, "selection must keep population order");
    }
}

#[test]
fn random_selection_is_deterministic_for_a_seed() {
    let stars = Star::populate(&mut StdRng::seed_from_u64(1), viewport(), 500);
    let a = Constellation::random(&mut StdRng::seed_from_u64(2), &stars, viewport(), 4.0);
    let b = Constellation::random(&mut StdRng::seed_from_u64(2), &stars, viewport(), 4.0);
    assert_eq!(a, b);
}

#[test]
fn star_limit_spans_three_to_ten() {
    assert_eq!(star_limit(0.0), 3);
    assert_eq!(star_limit(0.07), 3);
    assert_eq!(star_limit(0.08), 4);
    assert_eq!(star_limit(0.5), 7);
    assert_eq!(star_limit(0.999_999), 10);
}

// =============================================================
// Fade
// =============================================================

#[test]
fn fade_reduces_width() {
    let mut c = Constellation { width: 4.0, ..Default::default() };
    c.fade(0.07);
    assert!((c.width - 3.93).abs() < 1e-12);
}

#[test]
fn fade_never_goes_negative() {
    let mut c = Constellation { width: 0.05, ..Default::default() };
    c.fade(0.07);
    assert_eq!(c.width, 0.0);
    for _ in 0..10 {
        c.fade(1.0);
        assert_eq!(c.width, 0.0);
    }
}

// =============================================================
// Drawing
// =============================================================

#[test]
fn fewer_than_three_stars_draws_nothing() {
    let stars = clustered_stars();
    let mut surface = RecordingSurface::new();
    let c = Constellation { stars: vec![1, 2], closed: true, width: 4.0 };
    c.draw(&stars, &mut surface);
    assert!(surface.calls().is_empty());
}

#[test]
fn open_constellation_strokes_through_stars_in_order() {
    let stars = clustered_stars();
    let mut surface = RecordingSurface::new();
    let c = Constellation { stars: vec![1, 2, 4], closed: false, width: 2.5 };
    c.draw(&stars, &mut surface);
    assert_eq!(
        surface.calls(),
        &[
            DrawCall::BeginPath,
            DrawCall::MoveTo(Point::new(100.0, 100.0)),
            DrawCall::LineTo(Point::new(105.0, 95.0)),
            DrawCall::LineTo(Point::new(90.0, 110.0)),
            DrawCall::Stroke { color: "#f7eada".to_owned(), width: 2.5 },
        ]
    );
}

#[test]
fn closed_constellation_returns_to_first_star() {
    let stars = clustered_stars();
    let mut surface = RecordingSurface::new();
    let c = Constellation { stars: vec![1, 2, 4], closed: true, width: 4.0 };
    c.draw(&stars, &mut surface);
    let line_tos: Vec<_> = surface
        .calls()
        .iter()
        .filter_map(|call| match call {
            DrawCall::LineTo(pt) => Some(*pt),
            _ => None,
        })
        .collect();
    assert_eq!(line_tos.last(), Some(&Point::new(100.0, 100.0)));
    assert_eq!(line_tos.len(), 3);
}

#[test]
fn faded_constellation_still_strokes_with_zero_width() {
    let stars = clustered_stars();
    let mut surface = RecordingSurface::new();
    let c = Constellation { stars: vec![1, 2, 4], closed: false, width: 0.0 };
    c.draw(&stars, &mut surface);
    assert_eq!(surface.strokes(), vec![("#f7eada", 0.0)]);
}

#[test]
fn points_follow_star_motion() {
    let mut stars = clustered_stars();
    let c = Constellation { stars: vec![1, 2, 4], closed: false, width: 4.0 };
    stars[1].x = 150.0;
    assert_eq!(c.points(&stars)[0], Point::new(150.0, 100.0));
}
