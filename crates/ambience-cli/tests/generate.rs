//! End-to-end tests for the generate command.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use ambience_audio::{RateTier, RenderSettings, Texture};
use ambience_cli::commands::generate::{generate_catalog, generate_report, run_with_settings};
use ambience_cli::output::relative_path;
use pretty_assertions::assert_eq;

fn one_second() -> RenderSettings {
    RenderSettings {
        duration_seconds: 1,
        ..RenderSettings::default()
    }
}

fn read_wav(path: &Path) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::open(path).expect("readable wav");
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("valid samples");
    (spec, samples)
}

#[test]
fn test_generate_writes_sixteen_files() {
    let tmp = tempfile::tempdir().unwrap();
    let code = run_with_settings(tmp.path(), &one_second(), false, false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    for texture in Texture::ALL {
        for tier in RateTier::ALL {
            let path = tmp.path().join(relative_path(tier, texture));
            let (spec, samples) = read_wav(&path);

            assert_eq!(spec.channels, 1, "{}", path.display());
            assert_eq!(spec.bits_per_sample, 16);
            assert_eq!(spec.sample_format, hound::SampleFormat::Int);
            match tier {
                RateTier::Master => {
                    assert_eq!(spec.sample_rate, 44100);
                    assert_eq!(samples.len(), 44100);
                }
                RateTier::App => {
                    assert_eq!(spec.sample_rate, 22050);
                    assert_eq!(samples.len(), 22050);
                }
            }
        }
    }

    let master_count = fs::read_dir(tmp.path().join("master")).unwrap().count();
    let app_count = fs::read_dir(tmp.path().join("app")).unwrap().count();
    assert_eq!(master_count, 8);
    assert_eq!(app_count, 8);
}

#[test]
fn test_app_file_is_every_other_master_sample() {
    let tmp = tempfile::tempdir().unwrap();
    run_with_settings(tmp.path(), &one_second(), false, false).unwrap();

    let master_path = tmp
        .path()
        .join(relative_path(RateTier::Master, Texture::ForestBirds));
    let app_path = tmp
        .path()
        .join(relative_path(RateTier::App, Texture::ForestBirds));
    let (_, master) = read_wav(&master_path);
    let (_, app) = read_wav(&app_path);

    let strided: Vec<i16> = master.iter().step_by(2).copied().collect();
    assert_eq!(app, strided);
}

#[test]
fn test_regeneration_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    run_with_settings(first.path(), &one_second(), false, false).unwrap();
    run_with_settings(second.path(), &one_second(), true, true).unwrap();

    for texture in Texture::ALL {
        for tier in RateTier::ALL {
            let rel = relative_path(tier, texture);
            let a = fs::read(first.path().join(&rel)).unwrap();
            let b = fs::read(second.path().join(&rel)).unwrap();
            assert!(a == b, "{} differs between runs", rel.display());
        }
    }
}

#[test]
fn test_generate_overwrites_existing_files() {
    let tmp = tempfile::tempdir().unwrap();
    let rel = relative_path(RateTier::Master, Texture::WhiteNoise);
    fs::create_dir_all(tmp.path().join("master")).unwrap();
    fs::write(tmp.path().join(&rel), b"stale").unwrap();

    run_with_settings(tmp.path(), &one_second(), false, false).unwrap();

    let (_, samples) = read_wav(&tmp.path().join(&rel));
    assert_eq!(samples.len(), 44100);
}

#[test]
fn test_reported_files_match_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let mut outputs = Vec::new();
    generate_catalog(tmp.path(), &one_second(), false, |t| outputs.push(t)).unwrap();

    assert_eq!(outputs.len(), 8);
    for output in &outputs {
        assert_eq!(output.files.len(), 2);
        assert_eq!(output.files[0].tier, "master");
        assert_eq!(output.files[1].tier, "app");
        for file in &output.files {
            let bytes = fs::read(&file.path).unwrap();
            assert_eq!(bytes.len(), 44 + 2 * file.num_samples);
            assert_eq!(
                blake3::hash(&bytes[44..]).to_hex().to_string(),
                file.pcm_hash
            );
        }
    }
}

#[test]
fn test_json_mode_reports_failure_exit_code() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = RenderSettings {
        app_rate: 96000,
        ..one_second()
    };

    let code = run_with_settings(tmp.path(), &settings, true, false).unwrap();
    assert_eq!(code, ExitCode::from(1));
}

#[test]
fn test_human_mode_propagates_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = RenderSettings {
        app_rate: 0,
        ..one_second()
    };

    let err = run_with_settings(tmp.path(), &settings, false, false).unwrap_err();
    assert!(err.to_string().contains("invalid sample rate"));
}

#[test]
fn test_unwritable_out_root_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let err = run_with_settings(&blocker, &one_second(), false, false).unwrap_err();
    assert!(
        err.to_string().contains("Failed to create output directory"),
        "{:#}",
        err
    );

    let (report, code) = generate_report(&blocker, &one_second(), false);
    assert_eq!(code, ExitCode::from(1));
    assert!(!report.success);
    assert!(report.textures.is_empty());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, "CLI_001");
    assert!(report.errors[0]
        .message
        .contains("Failed to create output directory"));

    assert_eq!(
        run_with_settings(&blocker, &one_second(), true, true).unwrap(),
        ExitCode::from(1)
    );
}

#[test]
fn test_validation_failure_report_carries_audio_code() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = RenderSettings {
        app_rate: 96000,
        ..one_second()
    };

    let (report, code) = generate_report(tmp.path(), &settings, false);
    assert_eq!(code, ExitCode::from(1));
    assert_eq!(report.errors[0].code, "AUDIO_002");
}
