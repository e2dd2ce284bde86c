//! Isentrope table: one row per entropy, one column per density.
//!
//! The density grid is shared by every row. Pressure, temperature, internal
//! energy and sound speed vary with both row and column, density only with
//! column. Release calculations index density by column alone, so this shared
//! grid is an invariant of the table and not something to interpolate away.

use crate::error::{EosError, EosResult};
use vp_core::{Monotonic, SpecEnergy, SpecEntropy, ensure_all_finite, monotonic_direction};

/// Column data used to build an [`IsentropeTable`].
///
/// Row-major grids hold `entropy.len()` rows of `density.len()` values each.
#[derive(Debug, Clone, Default)]
pub struct IsentropeGrid {
    /// Entropy per row [J/(kg·K)]
    pub entropy: Vec<SpecEntropy>,
    /// Density per column [kg/m³]
    pub density: Vec<f64>,
    /// Pressure [GPa]
    pub pressure_gpa: Vec<f64>,
    /// Temperature [K]
    pub temperature_k: Vec<f64>,
    /// Specific internal energy [J/kg]
    pub energy: Vec<SpecEnergy>,
    /// Bulk sound speed [km/s]
    pub sound_speed_km_s: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct IsentropeTable {
    grid: IsentropeGrid,
    direction: Option<Monotonic>,
}

impl IsentropeTable {
    /// Validate grid shape and values and wrap them in a table.
    pub fn from_grid(grid: IsentropeGrid) -> EosResult<Self> {
        let rows = grid.entropy.len();
        let cols = grid.density.len();
        if rows == 0 || cols < 2 {
            return Err(EosError::malformed(
                "isentrope",
                format!("need at least 1 entropy row and 2 density columns, got {rows}x{cols}"),
            ));
        }

        let cells = rows * cols;
        for (name, values) in [
            ("pressure", &grid.pressure_gpa),
            ("temperature", &grid.temperature_k),
            ("energy", &grid.energy),
            ("sound speed", &grid.sound_speed_km_s),
        ] {
            if values.len() != cells {
                return Err(EosError::malformed(
                    "isentrope",
                    format!("{name} grid has {} values, expected {cells}", values.len()),
                ));
            }
        }

        ensure_all_finite(&grid.entropy, "isentrope entropy")?;
        ensure_all_finite(&grid.density, "isentrope density")?;
        ensure_all_finite(&grid.pressure_gpa, "isentrope pressure")?;

        let direction = monotonic_direction(&grid.entropy);
        if direction.is_none() {
            tracing::warn!(rows, "isentrope entropy axis is not monotonic");
        }

        Ok(Self { grid, direction })
    }

    pub fn rows(&self) -> usize {
        self.grid.entropy.len()
    }

    pub fn columns(&self) -> usize {
        self.grid.density.len()
    }

    pub fn entropy(&self) -> &[SpecEntropy] {
        &self.grid.entropy
    }

    pub fn density(&self) -> &[f64] {
        &self.grid.density
    }

    /// Direction of the entropy axis, `None` when it is not monotonic.
    pub fn entropy_direction(&self) -> Option<Monotonic> {
        self.direction
    }

    pub fn row(&self, index: usize) -> Option<IsentropeRow<'_>> {
        (index < self.rows()).then_some(IsentropeRow { table: self, index })
    }

    fn slice<'a>(&self, values: &'a [f64], row: usize) -> &'a [f64] {
        let cols = self.columns();
        &values[row * cols..(row + 1) * cols]
    }
}

/// Borrowed view of one isentrope.
#[derive(Debug, Clone, Copy)]
pub struct IsentropeRow<'a> {
    table: &'a IsentropeTable,
    index: usize,
}

impl<'a> IsentropeRow<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entropy(&self) -> SpecEntropy {
        self.table.grid.entropy[self.index]
    }

    pub fn len(&self) -> usize {
        self.table.columns()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pressure_gpa(&self) -> &'a [f64] {
        self.table.slice(&self.table.grid.pressure_gpa, self.index)
    }

    pub fn temperature_k(&self) -> &'a [f64] {
        self.table.slice(&self.table.grid.temperature_k, self.index)
    }

    pub fn energy(&self) -> &'a [SpecEnergy] {
        self.table.slice(&self.table.grid.energy, self.index)
    }

    pub fn sound_speed_km_s(&self) -> &'a [f64] {
        self.table.slice(&self.table.grid.sound_speed_km_s, self.index)
    }

    /// Shared density grid; identical for every row.
    pub fn density(&self) -> &'a [f64] {
        &self.table.grid.density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2x3() -> IsentropeGrid {
        IsentropeGrid {
            entropy: vec![6000.0, 7000.0],
            density: vec![10.0, 100.0, 1000.0],
            pressure_gpa: vec![0.1, 1.0, 10.0, 0.2, 2.0, 20.0],
            temperature_k: vec![1000.0, 2000.0, 3000.0, 1500.0, 2500.0, 3500.0],
            energy: vec![1.0; 6],
            sound_speed_km_s: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        }
    }

    #[test]
    fn row_views_slice_the_grid() {
        let table = IsentropeTable::from_grid(grid_2x3()).unwrap();
        assert_eq!(table.rows(), 2);
        assert_eq!(table.columns(), 3);

        let row = table.row(1).unwrap();
        assert_eq!(row.entropy(), 7000.0);
        assert_eq!(row.pressure_gpa(), &[0.2, 2.0, 20.0]);
        assert_eq!(row.sound_speed_km_s(), &[4.0, 5.0, 6.0]);
        assert_eq!(row.density(), table.density());
        assert!(table.row(2).is_none());
        assert_eq!(table.entropy_direction(), Some(Monotonic::Increasing));
    }

    #[test]
    fn reject_shape_mismatch() {
        let mut grid = grid_2x3();
        grid.temperature_k.pop();
        let err = IsentropeTable::from_grid(grid).unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn reject_non_finite_pressure() {
        let mut grid = grid_2x3();
        grid.pressure_gpa[4] = f64::NAN;
        assert!(matches!(
            IsentropeTable::from_grid(grid),
            Err(EosError::Malformed { .. })
        ));
    }

    #[test]
    fn reject_single_column() {
        let grid = IsentropeGrid {
            entropy: vec![1.0],
            density: vec![1.0],
            pressure_gpa: vec![1.0],
            temperature_k: vec![1.0],
            energy: vec![1.0],
            sound_speed_km_s: vec![1.0],
        };
        assert!(IsentropeTable::from_grid(grid).is_err());
    }
}
