//! Unit tests for the percentage gauge
//!
//! Tests cover:
//! - Sweep saturation at 100%
//! - Sign handling
//! - Ring geometry and dash offsets

use super::super::gauge::*;

const EPS: f64 = 1e-9;

#[test]
fn test_sweep_saturates_at_full_circle() {
    assert_eq!(compute_arc(150.0).sweep_fraction, 1.0);
    assert_eq!(compute_arc(100.0).sweep_fraction, 1.0);
    assert_eq!(compute_arc(-250.0).sweep_fraction, 1.0);
}

#[test]
fn test_negative_values_keep_their_magnitude() {
    let negative = compute_arc(-30.0);
    let positive = compute_arc(30.0);

    assert!(!negative.is_positive);
    assert!(positive.is_positive);
    assert_eq!(negative.sweep_fraction, positive.sweep_fraction);
    assert!((positive.sweep_fraction - 0.3).abs() < EPS);
}

#[test]
fn test_zero_is_positive_and_empty() {
    let arc = compute_arc(0.0);
    assert!(arc.is_positive);
    assert_eq!(arc.sweep_fraction, 0.0);
}

#[test]
fn test_palette_follows_sign() {
    assert_eq!(compute_arc(80.0).palette().text_class, "text-green-400");
    assert_eq!(compute_arc(-40.0).palette().text_class, "text-red-400");
    assert_ne!(compute_arc(80.0).palette().id, compute_arc(-40.0).palette().id);
}

#[test]
fn test_ring_geometry() {
    let ring = RingGeometry::new(48, 12);
    assert_eq!(ring.radius, 18.0);
    assert!((ring.circumference - 36.0 * std::f64::consts::PI).abs() < EPS);
}

#[test]
fn test_dash_offset() {
    let ring = RingGeometry::new(40, 20);

    assert!((ring.dash_offset(compute_arc(0.0)) - ring.circumference).abs() < EPS);
    assert!(ring.dash_offset(compute_arc(100.0)).abs() < EPS);
    assert!((ring.dash_offset(compute_arc(-50.0)) - ring.circumference / 2.0).abs() < EPS);
}
