//! Tests for neighbor order, octal vectors and direction wheels

#[cfg(test)]
mod tests {
    use worldgen::spatial::Size;
    use worldgen::spatial::direction::{
        Alignment, DirectionWheel, EAST, NEIGHBOR_OFFSETS, NORTH, OCTAL_DELTAS, SOUTH, WEST,
    };

    // Cardinal indices point the right way in screen coordinates
    #[test]
    fn test_neighbor_cardinals() {
        assert_eq!(NEIGHBOR_OFFSETS.get(EAST), Some(&(1, 0)));
        assert_eq!(NEIGHBOR_OFFSETS.get(SOUTH), Some(&(0, 1)));
        assert_eq!(NEIGHBOR_OFFSETS.get(WEST), Some(&(-1, 0)));
        assert_eq!(NEIGHBOR_OFFSETS.get(NORTH), Some(&(0, -1)));
    }

    // One pass through every octal vector returns to the start
    #[test]
    fn test_octal_deltas_sum_to_zero() {
        let (x, y) = OCTAL_DELTAS
            .iter()
            .fold((0, 0), |(x, y), (dx, dy)| (x + dx, y + dy));
        assert_eq!((x, y), (0, 0));
        assert_eq!(OCTAL_DELTAS.first(), Some(&(1, 0)));
        assert_eq!(OCTAL_DELTAS.get(2), Some(&(0, -1)));
    }

    // Alignment offsets place the next piece against the right edge
    #[test]
    fn test_alignment_offsets() {
        let current = Size::new(3, 2);
        let next = Size::new(1, 4);
        assert_eq!(Alignment::Bottom.offset(current, next), (3, -2));
        assert_eq!(Alignment::Right.offset(current, next), (2, -4));
        assert_eq!(Alignment::Top.offset(current, next), (-1, 0));
        assert_eq!(Alignment::Left.offset(current, next), (0, 2));
    }

    // Wheels decode with range defaulting to one and an optional start piece
    #[test]
    fn test_wheel_deserialize() {
        let wheel: DirectionWheel = serde_json::from_value(serde_json::json!({
            "start": {
                "actsAs": 1,
                "name": "gate",
                "size": {"width": 1, "height": 1},
                "tiles": [5],
                "alignNext": "left"
            },
            "directions": [
                {"name": "east", "size": {"width": 2, "height": 1}, "tiles": [1, 1], "alignNext": "bottom"},
                {"name": "south", "size": {"width": 1, "height": 2}, "tiles": [2, null], "alignNext": "left",
                 "range": 2, "sameNext": {"deltaX": 0, "deltaY": 2}}
            ]
        }))
        .expect("wheel should decode");

        assert_eq!(wheel.len(), 2);
        assert_eq!(wheel.start.as_ref().map(|start| start.acts_as), Some(1));
        assert_eq!(wheel.direction(0).map(|d| d.range), Some(1));
        assert_eq!(
            wheel.direction(1).and_then(|d| d.same_next).map(|s| s.delta_y),
            Some(2)
        );
        assert_eq!(
            wheel.direction(1).map(|d| d.footprint().cells().count()),
            Some(1)
        );
    }

    // Reachable indices wrap past the end of the wheel
    #[test]
    fn test_reachable_wraps() {
        let wheel: DirectionWheel = serde_json::from_value(serde_json::json!({
            "directions": [
                {"tiles": [1], "alignNext": "bottom"},
                {"tiles": [1], "alignNext": "bottom"},
                {"tiles": [1], "alignNext": "bottom"}
            ]
        }))
        .expect("wheel should decode");
        assert_eq!(wheel.reachable(2, 2), [2, 0, 1]);
        // a zero range may still turn one position
        assert_eq!(wheel.reachable(1, 0), [1, 2]);
        assert!(DirectionWheel::default().reachable(0, 1).is_empty());
    }
}
