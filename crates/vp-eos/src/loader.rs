//! Text loaders for material-model tables.
//!
//! Isentrope files are a flat stream of numbers (whitespace or comma
//! separated, line breaks insignificant) after `header_rows` skipped lines:
//!
//! ```text
//! ND NS
//! rho[0..ND]                       g/cm³
//! S[0..NS]                         erg/(g·K)
//! P[NS][ND]                        dyn/cm²
//! T[NS][ND]                        K
//! U[NS][ND]                        erg/g
//! cs[NS][ND]                       cm/s
//! ```
//!
//! Hugoniot files hold one shock state per line after `header_rows` skipped
//! lines, columns `T(K), rho(g/cm³), P(GPa), U(MJ/kg), S(MJ/(kg·K)), up(km/s), us(km/s)`.

use std::path::Path;

use crate::error::{EosError, EosResult};
use crate::hugoniot::{HugoniotCurve, HugoniotPoint};
use crate::isentrope::{IsentropeGrid, IsentropeTable};
use vp_core::units::cgs;

pub const DEFAULT_ISENTROPE_HEADER_ROWS: usize = 0;
pub const DEFAULT_HUGONIOT_HEADER_ROWS: usize = 3;

const HUGONIOT_COLUMNS: usize = 7;

fn read(path: &Path) -> EosResult<String> {
    std::fs::read_to_string(path).map_err(|source| EosError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

fn parse_number(what: &'static str, line: usize, token: &str) -> EosResult<f64> {
    token.parse::<f64>().map_err(|_| EosError::Parse {
        what,
        line,
        token: token.to_string(),
    })
}

/// Load an isentrope table and convert it to SI/GPa.
pub fn load_isentrope(path: &Path, header_rows: usize) -> EosResult<IsentropeTable> {
    let content = read(path)?;
    let table = parse_isentrope(&content, header_rows)?;
    tracing::debug!(
        path = %path.display(),
        rows = table.rows(),
        columns = table.columns(),
        "loaded isentrope table"
    );
    Ok(table)
}

/// Load a Hugoniot curve and convert it to SI/GPa.
pub fn load_hugoniot(path: &Path, header_rows: usize) -> EosResult<HugoniotCurve> {
    let content = read(path)?;
    let curve = parse_hugoniot(&content, header_rows)?;
    tracing::debug!(path = %path.display(), points = curve.len(), "loaded hugoniot");
    Ok(curve)
}

pub fn parse_isentrope(content: &str, header_rows: usize) -> EosResult<IsentropeTable> {
    let mut values = Vec::new();
    for (idx, line) in content.lines().enumerate().skip(header_rows) {
        for token in split_fields(line) {
            values.push(parse_number("isentrope", idx + 1, token)?);
        }
    }

    if values.len() < 2 {
        return Err(EosError::malformed("isentrope", "missing ND/NS header"));
    }
    let nd = table_count(values[0], "ND")?;
    let ns = table_count(values[1], "NS")?;
    let too_large =
        || EosError::malformed("isentrope", format!("ND={nd}, NS={ns} is too large"));
    let cells = nd.checked_mul(ns).ok_or_else(too_large)?;
    let expected = cells
        .checked_mul(4)
        .and_then(|n| n.checked_add(nd))
        .and_then(|n| n.checked_add(ns))
        .and_then(|n| n.checked_add(2))
        .ok_or_else(too_large)?;
    if values.len() != expected {
        return Err(EosError::malformed(
            "isentrope",
            format!(
                "ND={nd}, NS={ns} needs {expected} numbers, found {}",
                values.len()
            ),
        ));
    }

    let mut rest = values[2..].iter().copied();
    let mut take = |n: usize, scale: f64| -> Vec<f64> {
        rest.by_ref().take(n).map(|v| v * scale).collect()
    };

    let density = take(nd, cgs::G_PER_CM3_TO_KG_PER_M3);
    let entropy = take(ns, cgs::ERG_PER_G_K_TO_J_PER_KG_K);
    let pressure_gpa = take(cells, cgs::DYN_PER_CM2_TO_GPA);
    let temperature_k = take(cells, 1.0);
    let energy = take(cells, cgs::ERG_PER_G_TO_J_PER_KG);
    let sound_speed_km_s = take(cells, cgs::CM_PER_S_TO_KM_PER_S);

    IsentropeTable::from_grid(IsentropeGrid {
        entropy,
        density,
        pressure_gpa,
        temperature_k,
        energy,
        sound_speed_km_s,
    })
}

fn table_count(v: f64, name: &str) -> EosResult<usize> {
    if v.is_finite() && v >= 1.0 && v.fract() == 0.0 {
        Ok(v as usize)
    } else {
        Err(EosError::malformed(
            "isentrope",
            format!("{name} must be a positive integer, got {v}"),
        ))
    }
}

pub fn parse_hugoniot(content: &str, header_rows: usize) -> EosResult<HugoniotCurve> {
    let mut points = Vec::new();
    for (idx, line) in content.lines().enumerate().skip(header_rows) {
        let line_no = idx + 1;
        let fields: Vec<&str> = split_fields(line).collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < HUGONIOT_COLUMNS {
            return Err(EosError::malformed(
                "hugoniot",
                format!(
                    "line {line_no} has {} columns, expected {HUGONIOT_COLUMNS}",
                    fields.len()
                ),
            ));
        }

        let mut col = [0.0; HUGONIOT_COLUMNS];
        for (slot, token) in col.iter_mut().zip(&fields) {
            *slot = parse_number("hugoniot", line_no, token)?;
        }

        points.push(HugoniotPoint {
            temperature_k: col[0],
            density_kg_m3: col[1] * cgs::G_PER_CM3_TO_KG_PER_M3,
            pressure_gpa: col[2],
            energy: col[3] * cgs::MJ_PER_KG_TO_J_PER_KG,
            entropy: col[4] * cgs::MJ_PER_KG_K_TO_J_PER_KG_K,
            particle_velocity_km_s: col[5],
            shock_velocity_km_s: col[6],
        });
    }
    HugoniotCurve::from_points(points)
}
