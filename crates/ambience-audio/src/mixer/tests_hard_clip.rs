//! Tests for hard clipping.

use super::*;

#[test]
fn test_hard_clip_passes_in_range() {
    assert_eq!(hard_clip(0.5), 0.5);
    assert_eq!(hard_clip(-0.5), -0.5);
    assert_eq!(hard_clip(1.0), 1.0);
    assert_eq!(hard_clip(-1.0), -1.0);
}

#[test]
fn test_hard_clip_saturates() {
    assert_eq!(hard_clip(1.7), 1.0);
    assert_eq!(hard_clip(-3.0), -1.0);
}

#[test]
fn test_hard_clip_buffer() {
    let mut samples = vec![0.5, 1.5, -0.3, 2.0, -1.2];
    hard_clip_buffer(&mut samples);
    assert_eq!(samples, vec![0.5, 1.0, -0.3, 1.0, -1.0]);
}

#[test]
fn test_hard_clip_empty_buffer() {
    let mut samples: Vec<f64> = Vec::new();
    hard_clip_buffer(&mut samples);
    assert!(samples.is_empty());
}
