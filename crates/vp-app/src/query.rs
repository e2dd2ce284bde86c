//! Query helpers for extracting plot-ready data from a completed run.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;
use crate::run_service::RunResponse;

/// Curves a presentation layer draws for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Release curve, pressure against particle velocity
    PressureVelocity,
    /// Release curve before jump repair
    RawPressureVelocity,
    PressureDensity,
    PressureTemperature,
    PressureTime,
    TemperatureTime,
    DensityTime,
    VelocityTime,
    RadiusTime,
    /// Hugoniot reference curves
    HugoniotPressureVelocity,
    HugoniotPressureDensity,
    HugoniotPressureTemperature,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 12] = [
        Self::PressureVelocity,
        Self::RawPressureVelocity,
        Self::PressureDensity,
        Self::PressureTemperature,
        Self::PressureTime,
        Self::TemperatureTime,
        Self::DensityTime,
        Self::VelocityTime,
        Self::RadiusTime,
        Self::HugoniotPressureVelocity,
        Self::HugoniotPressureDensity,
        Self::HugoniotPressureTemperature,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PressureVelocity => "p-up",
            Self::RawPressureVelocity => "p-up-raw",
            Self::PressureDensity => "p-rho",
            Self::PressureTemperature => "p-t",
            Self::PressureTime => "p-time",
            Self::TemperatureTime => "t-time",
            Self::DensityTime => "rho-time",
            Self::VelocityTime => "up-time",
            Self::RadiusTime => "r-time",
            Self::HugoniotPressureVelocity => "hug-p-up",
            Self::HugoniotPressureDensity => "hug-p-rho",
            Self::HugoniotPressureTemperature => "hug-p-t",
        }
    }

    /// `(x, y)` axis labels.
    pub fn labels(&self) -> (&'static str, &'static str) {
        const P: &str = "pressure_gpa";
        const TIME: &str = "time_s";
        match self {
            Self::PressureVelocity
            | Self::RawPressureVelocity
            | Self::HugoniotPressureVelocity => ("particle_velocity_km_s", P),
            Self::PressureDensity | Self::HugoniotPressureDensity => ("density_kg_m3", P),
            Self::PressureTemperature | Self::HugoniotPressureTemperature => ("temperature_k", P),
            Self::PressureTime => (TIME, P),
            Self::TemperatureTime => (TIME, "temperature_k"),
            Self::DensityTime => (TIME, "density_kg_m3"),
            Self::VelocityTime => (TIME, "expansion_velocity_km_s"),
            Self::RadiusTime => (TIME, "radius_km"),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeriesKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                AppError::InvalidInput(format!(
                    "Unknown series '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
}

/// Extract one curve from a run.
pub fn extract_series(response: &RunResponse, kind: SeriesKind) -> Series {
    let run = &response.run;
    let hugoniot = &response.material.hugoniot;
    let release = &run.release;
    let row = response.material.isentrope.row(run.shock.entropy_row);
    let samples = run.time.samples();

    let zip = |x: &[f64], y: &[f64]| -> Vec<(f64, f64)> {
        x.iter().copied().zip(y.iter().copied()).collect()
    };
    let over_time = |f: fn(&vp_release::TimeSample) -> f64| -> Vec<(f64, f64)> {
        samples.iter().map(|s| (s.elapsed_s, f(s))).collect()
    };

    let points = match kind {
        SeriesKind::PressureVelocity => zip(release.velocity_km_s(), release.pressure_gpa()),
        SeriesKind::RawPressureVelocity => zip(&run.raw_velocity_km_s, release.pressure_gpa()),
        SeriesKind::PressureDensity => row
            .map(|r| zip(&r.density()[..release.len()], release.pressure_gpa()))
            .unwrap_or_default(),
        SeriesKind::PressureTemperature => row
            .map(|r| zip(&r.temperature_k()[..release.len()], release.pressure_gpa()))
            .unwrap_or_default(),
        SeriesKind::PressureTime => over_time(|s| s.pressure_gpa),
        SeriesKind::TemperatureTime => over_time(|s| s.temperature_k),
        SeriesKind::DensityTime => over_time(|s| s.density_kg_m3),
        SeriesKind::VelocityTime => over_time(|s| s.velocity_km_s),
        SeriesKind::RadiusTime => over_time(|s| s.radius_km),
        SeriesKind::HugoniotPressureVelocity => {
            zip(hugoniot.particle_velocity_km_s(), hugoniot.pressure_gpa())
        }
        SeriesKind::HugoniotPressureDensity => {
            zip(hugoniot.density_kg_m3(), hugoniot.pressure_gpa())
        }
        SeriesKind::HugoniotPressureTemperature => {
            zip(hugoniot.temperature_k(), hugoniot.pressure_gpa())
        }
    };

    let (x_label, y_label) = kind.labels();
    Series {
        name: kind.name().to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        points,
    }
}

/// Headline numbers of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub entropy_row: usize,
    pub peak_index: usize,
    pub triple_point_index: usize,
    pub steps: usize,
    /// Release velocity reached at the lowest tabulated pressure.
    pub final_velocity_km_s: f64,
    pub final_radius_km: f64,
    pub total_time_s: f64,
    pub jump_flattened: bool,
}

pub fn get_run_summary(response: &RunResponse) -> RunSummary {
    let run = &response.run;
    RunSummary {
        entropy_row: run.shock.entropy_row,
        peak_index: run.shock.peak_index,
        triple_point_index: run.triple_point_index,
        steps: run.time.len(),
        final_velocity_km_s: run.release.velocity_km_s().first().copied().unwrap_or(0.0),
        final_radius_km: run.time.final_radius_km(),
        total_time_s: run.time.total_time_s(),
        jump_flattened: run.repair.flattened(),
    }
}
