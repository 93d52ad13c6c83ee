//! Per-column boundary records and span-fill rasterization
//!
//! A traced closed path is reduced to the set of y values it touched in each
//! column. Filling then covers `[min y, max y]` of every recorded column. This
//! is a single-span approximation: concave or self-crossing outlines are
//! over-filled, and generators rely on that exact behavior.

use crate::spatial::layer::TerrainLayer;
use crate::spatial::tile::{Position, Tile};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Column → recorded y crossings of a traced path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryMap {
    columns: BTreeMap<i32, Vec<i32>>,
}

impl BoundaryMap {
    /// Create an empty boundary record
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one boundary cell
    pub fn record(&mut self, position: Position) {
        self.columns.entry(position.x).or_default().push(position.y);
    }

    /// Record every cell of a path
    pub fn record_all(&mut self, path: impl IntoIterator<Item = Position>) {
        for position in path {
            self.record(position);
        }
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of recorded columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Filled row span of a column
    pub fn span(&self, x: i32) -> Option<RangeInclusive<i32>> {
        let ys = self.columns.get(&x)?;
        let min = ys.iter().min()?;
        let max = ys.iter().max()?;
        Some(*min..=*max)
    }

    /// Filled row span of every recorded column, west to east
    pub fn spans(&self) -> impl Iterator<Item = (i32, RangeInclusive<i32>)> + '_ {
        self.columns.keys().filter_map(|&x| self.span(x).map(|span| (x, span)))
    }

    /// Every cell the span fill covers
    pub fn filled_cells(&self) -> Vec<Position> {
        self.spans()
            .flat_map(|(x, span)| span.map(move |y| Position::new(x, y)))
            .collect()
    }

    /// Paint the span fill onto a terrain layer, returning the cells written
    pub fn fill(&self, layer: &mut TerrainLayer, tile: Tile) -> usize {
        self.filled_cells()
            .into_iter()
            .filter(|position| layer.set_tile(position.x, position.y, tile))
            .count()
    }
}

/// Cells visited when stepping from `from` to `to`, both ends included
///
/// Each step moves one axis by one: x first until it matches the target,
/// then y. The result is a 4-connected staircase.
pub fn step_line(from: Position, to: Position) -> Vec<Position> {
    let mut path = vec![from];
    let mut current = from;
    while current != to {
        if current.x == to.x {
            current.y += (to.y - current.y).signum();
        } else {
            current.x += (to.x - current.x).signum();
        }
        path.push(current);
    }
    path
}
