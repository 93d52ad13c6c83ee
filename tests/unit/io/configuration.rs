//! Tests for generation constants and output naming

#[cfg(test)]
mod tests {
    use worldgen::io::configuration::{
        CAPTURE_SUFFIX, DEFAULT_BIOME_PASSES, DEFAULT_CHANGE_PROBABILITY,
        DEFAULT_FILL_THRESHOLD, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_MAX_VECTOR_LENGTH,
        DEFAULT_MIN_VECTOR_LENGTH, DEFAULT_MINIMUM_MOVEMENTS, DEFAULT_SEED, FILL_ELEVATION,
        LAND_ELEVATION, OUTPUT_SUFFIX, SNAPSHOT_SUFFIX,
    };

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests default map dimensions
    // Verified by changing the defaults
    #[test]
    fn test_default_map_size() {
        assert_eq!((DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT), (100, 100));
    }

    // Tests vector length defaults form a valid range
    // Verified by swapping the bounds
    #[test]
    fn test_vector_length_range() {
        assert!(DEFAULT_MIN_VECTOR_LENGTH <= DEFAULT_MAX_VECTOR_LENGTH);
    }

    // Tests land sits above filled ground
    // Verified by equalizing the elevations
    #[test]
    fn test_elevations() {
        assert_eq!(FILL_ELEVATION, 1);
        assert_eq!(LAND_ELEVATION, 2);
    }

    // Tests walk and propagation defaults
    // Verified by changing constant values
    #[test]
    fn test_generator_defaults() {
        assert_eq!(DEFAULT_BIOME_PASSES, 2);
        assert!(DEFAULT_FILL_THRESHOLD > 8);
        assert_eq!(DEFAULT_MINIMUM_MOVEMENTS, 3);
        assert!((0.0..=1.0).contains(&DEFAULT_CHANGE_PROBABILITY));
    }

    // Tests output suffixes are distinct and filesystem safe
    // Verified by adding special characters
    #[test]
    fn test_output_suffixes() {
        let suffixes = [OUTPUT_SUFFIX, CAPTURE_SUFFIX, SNAPSHOT_SUFFIX];
        for suffix in suffixes {
            assert!(suffix.starts_with('_'));
            assert!(
                suffix.chars().all(|ch| ch.is_alphanumeric() || ch == '_'),
                "suffix {suffix} contains invalid characters"
            );
        }
        assert_ne!(OUTPUT_SUFFIX, CAPTURE_SUFFIX);
        assert_ne!(OUTPUT_SUFFIX, SNAPSHOT_SUFFIX);
    }
}
