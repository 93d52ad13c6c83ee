//! Tests for neighbor masks, edge tiles and edge objects

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeMap;
    use worldgen::WorldError;
    use worldgen::generation::edger::{
        BitPattern, EdgeObject, ObjectEdge, Offset, TerrainEdge, neighbor_mask,
    };
    use worldgen::generation::{AdvancedEdger, Edger, Generator};
    use worldgen::math::membership::TerrainSet;
    use worldgen::spatial::{Map, Position, Size, Tile};

    /// 3×3 map of terrain 1 with terrain 2 east and south of the center
    fn shore_map() -> Map {
        let mut map = Map::new(Size::new(3, 3), Size::new(16, 16));
        if let Ok(layer) = map.terrain_layer_or_create("terrain") {
            layer.fill(Tile::new(1));
            layer.set_tile(2, 1, Tile::new(2));
            layer.set_tile(1, 2, Tile::new(2));
        }
        map
    }

    fn pattern(bits: &str) -> BitPattern {
        BitPattern::try_from(bits.to_string()).expect("pattern should parse")
    }

    fn edger() -> Edger {
        Edger {
            source_tiles: TerrainSet::new([1]),
            next_to_tiles: TerrainSet::new([2]),
            edges: vec![
                TerrainEdge {
                    mask: pattern("00000001"),
                    terrain: 10,
                },
                TerrainEdge {
                    mask: pattern("00000101"),
                    terrain: 11,
                },
            ],
            ..Edger::default()
        }
    }

    fn post() -> EdgeObject {
        EdgeObject {
            width: 1,
            tiles: vec![Some(9)],
            offset: Offset::default(),
            overwrite: false,
            properties: BTreeMap::new(),
        }
    }

    fn advanced() -> AdvancedEdger {
        AdvancedEdger {
            source_tiles: TerrainSet::new([1]),
            next_to_tiles: TerrainSet::new([2]),
            objects: BTreeMap::from([("post".to_string(), post())]),
            edges: vec![vec![
                ObjectEdge {
                    mask: pattern("00000001"),
                    object: "post".to_string(),
                },
                ObjectEdge {
                    mask: pattern("00000101"),
                    object: "post".to_string(),
                },
            ]],
            ..AdvancedEdger::default()
        }
    }

    // East and south neighbors set bits 0 and 2
    #[test]
    fn test_neighbor_mask_bits() {
        let map = shore_map();
        let layer = map.layer("terrain").expect("terrain layer");
        let next_to = TerrainSet::new([2]);
        assert_eq!(neighbor_mask(&layer.surrounds(1, 1), &next_to), 0b0000_0101);
        assert_eq!(neighbor_mask(&layer.surrounds(0, 0), &next_to), 0);
    }

    // Patterns parse from binary strings and match when all their bits are set
    #[test]
    fn test_bit_pattern() {
        assert_eq!(pattern("00000101"), BitPattern(5));
        assert!(BitPattern(5).matches(0b0000_0111));
        assert!(!BitPattern(5).matches(0b0000_0001));
        assert!(BitPattern::try_from("2".to_string()).is_err());
        assert!(BitPattern::try_from("111111111".to_string()).is_err());
        assert_eq!(String::from(BitPattern(5)), "00000101");
    }

    // Later matching rules overwrite earlier ones on the edge layer
    #[test]
    fn test_edge_layer_rule_order() {
        let map = shore_map();
        let edges = edger().edge_layer(map.layer("terrain").expect("terrain layer"));
        assert_eq!(edges.tile(Position::new(1, 1)).map(|t| t.terrain), Some(11));
        assert_eq!(edges.tile(Position::new(0, 2)).map(|t| t.terrain), Some(10));
        assert_eq!(edges.grid().tiles().flatten().count(), 2);
    }

    // Generating adds the edge layer and leaves the source alone without invert
    #[test]
    fn test_edger_generate() {
        let mut map = shore_map();
        let mut rng = StdRng::seed_from_u64(0);
        edger().generate(&mut map, &mut rng).expect("edger");
        let edges = map.layer("edges").expect("edge layer");
        assert_eq!(edges.grid().tiles().flatten().count(), 2);
        let terrain = map.layer("terrain").expect("terrain layer");
        assert_eq!(terrain.tile(Position::new(1, 1)).map(|t| t.terrain), Some(1));
    }

    // Invert turns edged source cells into the first next-to terrain
    #[test]
    fn test_edger_invert() {
        let mut map = shore_map();
        let mut rng = StdRng::seed_from_u64(0);
        Edger {
            invert: true,
            ..edger()
        }
        .generate(&mut map, &mut rng)
        .expect("edger");
        let terrain = map.layer("terrain").expect("terrain layer");
        assert_eq!(terrain.tile(Position::new(1, 1)).map(|t| t.terrain), Some(2));
        assert_eq!(terrain.tile(Position::new(0, 2)).map(|t| t.terrain), Some(2));
        assert_eq!(terrain.tile(Position::new(0, 0)).map(|t| t.terrain), Some(1));
    }

    // Invert without any terrain to invert to is a parameter error
    #[test]
    fn test_edger_invert_needs_target() {
        let mut map = shore_map();
        let mut rng = StdRng::seed_from_u64(0);
        let result = Edger {
            invert: true,
            next_to_tiles: TerrainSet::default(),
            ..edger()
        }
        .generate(&mut map, &mut rng);
        assert!(matches!(
            result,
            Err(WorldError::InvalidParameter { parameter: "invertTo", .. })
        ));
    }

    // Every matching rule places an object; ids count placement attempts
    #[test]
    fn test_advanced_edger_places_objects() {
        let mut map = shore_map();
        let mut rng = StdRng::seed_from_u64(0);
        advanced().generate(&mut map, &mut rng).expect("advanced edger");

        let layer = map.layer("objects").expect("object layer");
        let objects = layer.as_objects().expect("tiled object layer").objects();
        let placed: Vec<(&str, Position)> = objects
            .iter()
            .map(|object| (object.id.as_str(), object.top_left))
            .collect();
        assert_eq!(
            placed,
            vec![("post-0", Position::new(1, 1)), ("post-2", Position::new(0, 2))]
        );
    }

    // Overwriting templates may stack on one cell
    #[test]
    fn test_advanced_edger_overwrite() {
        let mut map = shore_map();
        let mut rng = StdRng::seed_from_u64(0);
        let mut generator = advanced();
        if let Some(template) = generator.objects.get_mut("post") {
            template.overwrite = true;
        }
        generator.generate(&mut map, &mut rng).expect("advanced edger");
        let layer = map.layer("objects").expect("object layer");
        assert_eq!(layer.as_objects().map(|l| l.objects().len()), Some(3));
    }

    // Rules naming undeclared templates are rejected
    #[test]
    fn test_advanced_edger_unknown_object() {
        let mut map = shore_map();
        let mut rng = StdRng::seed_from_u64(0);
        let mut generator = advanced();
        generator.objects.clear();
        let result = generator.generate(&mut map, &mut rng);
        assert!(matches!(result, Err(WorldError::UnknownObject { name }) if name == "post"));
    }

    // Invert rewrites the source cells under placed objects
    #[test]
    fn test_advanced_edger_invert() {
        let mut map = shore_map();
        let mut rng = StdRng::seed_from_u64(0);
        AdvancedEdger {
            invert: true,
            invert_to: Some(4),
            ..advanced()
        }
        .generate(&mut map, &mut rng)
        .expect("advanced edger");
        let terrain = map.layer("terrain").expect("terrain layer");
        assert_eq!(terrain.tile(Position::new(1, 1)).map(|t| t.terrain), Some(4));
        assert_eq!(terrain.tile(Position::new(0, 2)).map(|t| t.terrain), Some(4));
        assert_eq!(terrain.tile(Position::new(2, 1)).map(|t| t.terrain), Some(2));
    }

    // Edge objects decode with camelCase fields and an offset
    #[test]
    fn test_advanced_edger_decode() {
        let generator: AdvancedEdger = serde_json::from_value(serde_json::json!({
            "sourceTiles": [1],
            "nextToTiles": [2],
            "objects": {
                "cliff": { "width": 2, "tiles": [3, null], "offset": { "y": -1 } }
            },
            "edges": [[{ "mask": "00000100", "object": "cliff" }]]
        }))
        .expect("options should decode");
        let cliff = generator.objects.get("cliff").expect("template");
        assert_eq!(cliff.offset, Offset { x: 0, y: -1 });
        assert_eq!(cliff.tiles, vec![Some(3), None]);
        assert_eq!(generator.edges.first().map(Vec::len), Some(1));
    }
}
