//! Heatmap grid attached to image results.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Side length of every heatmap grid.
pub const HEATMAP_GRID_SIZE: usize = 20;

/// Square grid of per-region intensities, row-major.
///
/// Intensities are finite and non-negative. They are *not* capped at 1.0:
/// the generator's amplification step can push a cell up to 1.5, and
/// renderers are expected to cope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heatmap(Vec<Vec<f64>>);

impl Heatmap {
    /// Build a full grid by evaluating `f(row, col)` for every cell, row by row.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let rows = (0..HEATMAP_GRID_SIZE)
            .map(|row| (0..HEATMAP_GRID_SIZE).map(|col| f(row, col)).collect())
            .collect();
        Self(rows)
    }

    /// Wrap existing rows, checking shape and values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> CoreResult<Self> {
        if rows.len() != HEATMAP_GRID_SIZE {
            return Err(CoreError::invariant(format!(
                "heatmap must have {HEATMAP_GRID_SIZE} rows, got {}",
                rows.len()
            )));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != HEATMAP_GRID_SIZE {
                return Err(CoreError::invariant(format!(
                    "heatmap row {i} has {} cells, expected {HEATMAP_GRID_SIZE}",
                    row.len()
                )));
            }
            if let Some(v) = row.iter().find(|v| !v.is_finite() || **v < 0.0) {
                return Err(CoreError::invariant(format!(
                    "heatmap row {i} contains invalid intensity {v}"
                )));
            }
        }
        Ok(Self(rows))
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Every `(row, col, intensity)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| (r, c, *v)))
    }

    pub fn max_intensity(&self) -> f64 {
        self.cells().map(|(_, _, v)| v).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_fills_every_cell() {
        let h = Heatmap::from_fn(|r, c| (r * HEATMAP_GRID_SIZE + c) as f64);
        assert_eq!(h.size(), HEATMAP_GRID_SIZE);
        assert!(h.rows().iter().all(|row| row.len() == HEATMAP_GRID_SIZE));
        assert_eq!(h.cells().count(), HEATMAP_GRID_SIZE * HEATMAP_GRID_SIZE);
        assert_eq!(h.cell(1, 2), Some(22.0));
        assert_eq!(h.cell(HEATMAP_GRID_SIZE, 0), None);
    }

    #[test]
    fn from_rows_rejects_ragged_grids() {
        let mut rows = vec![vec![0.5; HEATMAP_GRID_SIZE]; HEATMAP_GRID_SIZE];
        rows[3].pop();
        assert!(matches!(
            Heatmap::from_rows(rows),
            Err(CoreError::InvariantViolation(_))
        ));
        assert!(Heatmap::from_rows(vec![vec![0.0; 5]; 5]).is_err());
    }

    #[test]
    fn from_rows_rejects_non_finite_values() {
        let mut rows = vec![vec![0.5; HEATMAP_GRID_SIZE]; HEATMAP_GRID_SIZE];
        rows[0][0] = f64::NAN;
        assert!(Heatmap::from_rows(rows).is_err());
    }

    #[test]
    fn values_above_one_are_allowed() {
        let mut rows = vec![vec![0.2; HEATMAP_GRID_SIZE]; HEATMAP_GRID_SIZE];
        rows[10][10] = 1.5;
        let h = Heatmap::from_rows(rows).unwrap();
        assert_eq!(h.max_intensity(), 1.5);
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let h = Heatmap::from_fn(|_, _| 0.0);
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json.as_array().unwrap().len(), HEATMAP_GRID_SIZE);
        let back: Heatmap = serde_json::from_value(json).unwrap();
        assert_eq!(back, h);
    }
}
