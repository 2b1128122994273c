//! Tests for mono mixing operations.

use super::*;

#[test]
fn test_mix_mono_single_layer_with_volume() {
    let mut mixer = Mixer::new(100);
    mixer.add_mono(vec![1.0; 100], 0.5);

    let output = mixer.mix_mono();
    assert_eq!(output.len(), 100);
    assert!(output.iter().all(|&s| (s - 0.5).abs() < 1e-12));
}

#[test]
fn test_mix_mono_multiple_layers() {
    let mut mixer = Mixer::new(100);
    mixer
        .add_mono(vec![0.4; 100], 0.7)
        .add_mono(vec![0.2; 100], 0.5)
        .add_mono(vec![0.1; 100], 1.0);

    assert_eq!(mixer.layer_count(), 3);
    let output = mixer.mix_mono();
    // 0.28 + 0.1 + 0.1
    assert!(output.iter().all(|&s| (s - 0.48).abs() < 1e-12));
}

#[test]
fn test_mix_shorter_layer_pads_with_silence() {
    let mut mixer = Mixer::new(4);
    mixer.add_mono(vec![1.0, 1.0], 1.0);

    assert_eq!(mixer.mix_mono(), vec![1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_mix_longer_layer_is_cut() {
    let mut mixer = Mixer::new(2);
    mixer.add_mono(vec![0.1, 0.2, 0.3], 1.0);

    assert_eq!(mixer.mix_mono(), vec![0.1, 0.2]);
    assert_eq!(mixer.num_samples(), 2);
}

#[test]
fn test_mix_clipped_bounds_output() {
    let mut mixer = Mixer::new(3);
    mixer
        .add_mono(vec![0.9, -0.9, 0.1], 1.0)
        .add_mono(vec![0.9, -0.9, 0.1], 1.0);

    assert_eq!(mixer.mix_clipped(), vec![1.0, -1.0, 0.2]);
}

#[test]
fn test_empty_mixer_is_silent() {
    let mixer = Mixer::new(8);
    assert!(mixer.mix_mono().iter().all(|&s| s == 0.0));
    assert!(Mixer::new(0).mix_clipped().is_empty());
}
