//! Tests for footprints and placed objects

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use worldgen::spatial::{Footprint, Object, PlacementOptions, Position};

    // Height rounds up a partial last row
    #[test]
    fn test_footprint_height() {
        assert_eq!(Footprint::solid(3, 2, 1).height(), 2);
        assert_eq!(Footprint::new(2, vec![Some(1); 5]).height(), 3);
        assert_eq!(Footprint::new(0, vec![Some(1); 2]).width, 1);
    }

    // Only opaque cells are reported, row-major
    #[test]
    fn test_footprint_cells_skip_transparent() {
        let footprint = Footprint::new(2, vec![Some(1), None, None, Some(4)]);
        let cells: Vec<(i32, i32, u32)> = footprint.cells().collect();
        assert_eq!(cells, [(0, 0, 1), (1, 1, 4)]);
    }

    // Covered cells are offset by the top-left corner
    #[test]
    fn test_object_covered_cells() {
        let object = Object::new("tree-0", Position::new(3, 5), Footprint::solid(1, 2, 7));
        let cells: Vec<(Position, u32)> = object.covered_cells().collect();
        assert_eq!(cells, [(Position::new(3, 5), 7), (Position::new(3, 6), 7)]);
    }

    // Properties attach without touching the footprint
    #[test]
    fn test_with_properties() {
        let properties = BTreeMap::from([("kind".to_string(), "rock".to_string())]);
        let object = Object::new("rock-1", Position::default(), Footprint::solid(1, 1, 2))
            .with_properties(properties.clone());
        assert_eq!(object.properties, properties);
        assert_eq!(object.footprint, Footprint::solid(1, 1, 2));
    }

    // Placement defaults to rejecting collisions
    #[test]
    fn test_placement_options_default() {
        assert!(!PlacementOptions::default().allow_collisions);
        assert!(PlacementOptions::overlapping().allow_collisions);
    }
}
