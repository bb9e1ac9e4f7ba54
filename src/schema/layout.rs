use crate::graph::Position;
use serde::{Deserialize, Serialize};

/// Canvas placement used when a graph is synthesized rather than drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Top-left corner of the field grid.
    pub grid_origin: Position,
    pub column_step: f64,
    pub row_step: f64,
    /// Fields per grid row.
    pub columns: usize,
    /// Column in which `start`, `end` and `submit` are stacked.
    pub structural_x: f64,
    pub structural_top: f64,
    pub structural_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_origin: Position::new(50.0, 50.0),
            column_step: 250.0,
            row_step: 150.0,
            columns: 3,
            structural_x: 40.0,
            structural_top: 40.0,
            structural_step: 120.0,
        }
    }
}

impl LayoutConfig {
    /// Position of the `index`-th field on the grid, filled row by row.
    pub fn grid_position(&self, index: usize) -> Position {
        let columns = self.columns.max(1);
        let row = index / columns;
        let column = index % columns;
        Position::new(
            self.grid_origin.x + self.column_step * column as f64,
            self.grid_origin.y + self.row_step * row as f64,
        )
    }

    /// Position of the `slot`-th structural node in the structural column.
    pub fn structural_position(&self, slot: usize) -> Position {
        Position::new(
            self.structural_x,
            self.structural_top + self.structural_step * slot as f64,
        )
    }
}
