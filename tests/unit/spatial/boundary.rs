//! Tests for boundary records, span fill and staircase lines

#[cfg(test)]
mod tests {
    use worldgen::spatial::boundary::{BoundaryMap, step_line};
    use worldgen::spatial::{Position, Size, TerrainLayer, Tile};

    // Columns {3: [2], 4: [1, 3], 5: [2]} fill exactly five cells
    #[test]
    fn test_column_span_fill() {
        let mut boundaries = BoundaryMap::new();
        boundaries.record_all([
            Position::new(3, 2),
            Position::new(4, 1),
            Position::new(4, 3),
            Position::new(5, 2),
        ]);

        let mut layer = TerrainLayer::new("terrain", Size::new(8, 8));
        let written = boundaries.fill(&mut layer, Tile::new(1));
        assert_eq!(written, 5);

        let mut filled: Vec<Position> = layer
            .grid()
            .iter()
            .filter(|(_, tile)| tile.is_some())
            .map(|(position, _)| position)
            .collect();
        filled.sort();
        let mut expected = vec![
            Position::new(3, 2),
            Position::new(4, 1),
            Position::new(4, 2),
            Position::new(4, 3),
            Position::new(5, 2),
        ];
        expected.sort();
        assert_eq!(filled, expected);
    }

    // Each column fills from its min to max y regardless of record order
    #[test]
    fn test_span_uses_min_and_max() {
        let mut boundaries = BoundaryMap::new();
        boundaries.record_all([Position::new(0, 7), Position::new(0, 2), Position::new(0, 4)]);
        assert_eq!(boundaries.span(0), Some(2..=7));
        assert_eq!(boundaries.span(1), None);
        assert_eq!(boundaries.column_count(), 1);
    }

    // Concave outlines are over-filled to a single span per column
    #[test]
    fn test_concave_column_overfills() {
        let mut boundaries = BoundaryMap::new();
        boundaries.record_all([Position::new(2, 0), Position::new(2, 5)]);
        assert_eq!(boundaries.filled_cells().len(), 6);
    }

    // Spans outside the layer are clipped when painting
    #[test]
    fn test_fill_clips_to_layer() {
        let mut boundaries = BoundaryMap::new();
        boundaries.record_all([Position::new(1, -2), Position::new(1, 1)]);
        let mut layer = TerrainLayer::new("terrain", Size::new(3, 3));
        assert_eq!(boundaries.fill(&mut layer, Tile::new(1)), 2);
    }

    // Lines step x first, then y, including both ends
    #[test]
    fn test_step_line_x_then_y() {
        let path = step_line(Position::new(0, 0), Position::new(2, -1));
        assert_eq!(
            path,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, -1),
            ]
        );
        assert_eq!(step_line(Position::new(1, 1), Position::new(1, 1)), [Position::new(1, 1)]);
    }
}
