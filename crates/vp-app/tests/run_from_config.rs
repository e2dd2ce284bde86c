//! Service-layer runs driven from config and table files on disk.

use std::path::PathBuf;

use vp_app::{
    AppError, RunOverrides, RunRequest, RunStage, SeriesKind, execute, execute_with_progress,
    extract_series, get_run_summary, locate,
};

/// 3 isentropes × 5 densities in CGS. Pressure runs 1e-4..100 GPa on every
/// row, sound speed is 5 km/s everywhere.
const ISENTROPE: &str = "\
5 3
1.0 1.5 2.0 2.5 3.0
6.0e7 7.0e7 8.0e7
1.0e6 2.5e11 5.0e11 7.5e11 1.0e12
1.0e6 2.5e11 5.0e11 7.5e11 1.0e12
1.0e6 2.5e11 5.0e11 7.5e11 1.0e12
1000 2000 3000 4000 5000
1100 2100 3100 4100 5100
1200 2200 3200 4200 5200
0 0 0 0 0
0 0 0 0 0
0 0 0 0 0
5e5 5e5 5e5 5e5 5e5
5e5 5e5 5e5 5e5 5e5
5e5 5e5 5e5 5e5 5e5
";

const HUGONIOT: &str = "\
T(K) rho(g/cc) P(GPa) U(MJ/kg) S(MJ/K/kg) up(km/s) us(km/s)
--
--
8000, 5.0, 60.0, 30.0, 0.006, 8.0, 13.0
12000, 5.5, 100.0, 50.0, 0.007, 10.0, 15.0
";

fn fixture(tag: &str, triple_point_pa: f64) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vp-app-{}-{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("isentrope.txt"), ISENTROPE).unwrap();
    std::fs::write(dir.join("hugoniot.txt"), HUGONIOT).unwrap();

    let config = format!(
        "\
name: synthetic
material:
  name: test-material
  isentrope:
    path: isentrope.txt
  hugoniot:
    path: hugoniot.txt
    header_rows: 3
  triple_point_pressure_pa: {triple_point_pa}
release:
  target_entropy_j_per_kg_k: 7000.0
  initial_radius_km: 1.0
"
    );
    let path = dir.join("run.yaml");
    std::fs::write(&path, config).unwrap();
    path
}

#[test]
fn run_from_yaml_produces_time_profile() {
    // 0.01 GPa sits between columns 0 and 1.
    let config_path = fixture("run", 1.0e7);
    let response = execute(&RunRequest {
        config_path: &config_path,
        overrides: RunOverrides::default(),
    })
    .unwrap();

    assert_eq!(response.material.name.as_deref(), Some("test-material"));
    let summary = get_run_summary(&response);
    assert_eq!(summary.entropy_row, 1);
    assert_eq!(summary.peak_index, 3);
    assert_eq!(summary.triple_point_index, 0);
    assert_eq!(summary.steps, 3);
    assert!(summary.total_time_s > 0.0);
    assert!(summary.final_radius_km > 1.0);
    assert!(!summary.jump_flattened);

    // Release velocity grows as pressure falls below the 100 GPa shock.
    let velocity = response.run.release.velocity_km_s();
    assert!(velocity[summary.peak_index] > 10.0);
    assert!(velocity[0] > velocity[summary.peak_index]);
    assert_eq!(velocity[0], velocity[1]);
}

#[test]
fn series_follow_release_and_time_axes() {
    let config_path = fixture("series", 1.0e7);
    let response = execute(&RunRequest {
        config_path: &config_path,
        overrides: RunOverrides::default(),
    })
    .unwrap();

    let p_up = extract_series(&response, SeriesKind::PressureVelocity);
    assert_eq!(p_up.points.len(), response.run.shock.peak_index + 1);
    assert_eq!(p_up.y_label, "pressure_gpa");

    // Smooth row: repair leaves the raw curve as is.
    let raw = extract_series(&response, SeriesKind::RawPressureVelocity);
    assert_eq!(raw.name, "p-up-raw");
    assert_eq!(raw.points, p_up.points);

    let p_rho = extract_series(&response, SeriesKind::PressureDensity);
    assert_eq!(p_rho.points.len(), p_up.points.len());
    assert_eq!(p_rho.points[0].0, 1000.0);

    let r_time = extract_series(&response, SeriesKind::RadiusTime);
    assert_eq!(r_time.points.len(), response.run.time.len());
    for pair in r_time.points.windows(2) {
        assert!(pair[1].0 > pair[0].0);
        assert!(pair[1].1 > pair[0].1);
    }

    let hug = extract_series(&response, SeriesKind::HugoniotPressureVelocity);
    assert_eq!(hug.points, vec![(8.0, 60.0), (10.0, 100.0)]);
}

#[test]
fn overrides_take_precedence_over_file() {
    let config_path = fixture("override", 1.0e7);
    let overrides = RunOverrides {
        target_entropy: Some(6000.0),
        initial_radius_km: Some(2.0),
        triple_point_pressure_pa: None,
    };
    let (config, _material, shock) = locate(&RunRequest {
        config_path: &config_path,
        overrides,
    })
    .unwrap();

    assert_eq!(config.release.initial_radius_km, 2.0);
    assert_eq!(shock.entropy_row, 0);
    assert_eq!(shock.hugoniot_index, 0);
    // Last column below 60 GPa.
    assert_eq!(shock.peak_index, 2);
}

#[test]
fn invalid_override_is_rejected() {
    let config_path = fixture("invalid", 1.0e7);
    let err = execute(&RunRequest {
        config_path: &config_path,
        overrides: RunOverrides {
            initial_radius_km: Some(0.0),
            ..RunOverrides::default()
        },
    })
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn triple_point_below_table_surfaces_release_error() {
    let config_path = fixture("low-tp", 5.2);
    let err = execute(&RunRequest {
        config_path: &config_path,
        overrides: RunOverrides::default(),
    })
    .unwrap_err();
    assert!(matches!(err, AppError::Release(_)));
}

#[test]
fn missing_config_is_config_error() {
    let path = std::env::temp_dir().join("vp-app-no-such-run.yaml");
    let err = execute(&RunRequest {
        config_path: &path,
        overrides: RunOverrides::default(),
    })
    .unwrap_err();
    assert!(matches!(err, AppError::Config { .. }));
}

#[test]
fn progress_reports_every_stage_in_order() {
    let config_path = fixture("progress", 1.0e7);
    let mut stages = Vec::new();
    let mut cb = |event: vp_app::RunProgressEvent| stages.push(event.stage);
    let response = execute_with_progress(
        &RunRequest {
            config_path: &config_path,
            overrides: RunOverrides::default(),
        },
        Some(&mut cb),
    )
    .unwrap();

    assert_eq!(stages.first(), Some(&RunStage::LoadingTables));
    assert_eq!(stages.last(), Some(&RunStage::Completed));
    assert_eq!(stages.len(), 6);
    assert!(response.timing.total_time_s >= response.timing.load_time_s);
}
