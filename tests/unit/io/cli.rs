//! Tests for command-line parsing, file selection and batch processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use worldgen::io::cli::{Cli, FileProcessor, is_config_file, sibling_path};
    use worldgen::io::configuration::{DEFAULT_RENDER_SCALE, DEFAULT_SEED};

    const SMALL_WORLD: &str = r#"{
        "parameters": { "size": { "width": 6, "height": 5 } },
        "phases": [
            { "plugin": "Filler", "options": { "fillTile": 1 }, "description": "grass" },
            { "plugin": "ObjectRandomizer", "options": {
                "sections": [{ "baseTiles": [1], "objects": [
                    { "name": "rock", "probability": 0.3, "sprite": { "width": 1, "tiles": [4] } }
                ] }]
            } }
        ]
    }"#;

    fn create_test_cli(target: &Path, extra: &[&str]) -> Cli {
        let target = target.to_string_lossy().to_string();
        let mut args = vec!["program", target.as_str(), "--quiet"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    fn write_world(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, SMALL_WORLD).expect("write configuration");
        path
    }

    // Tests CLI parsing with only the target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "world.json"]);

        assert_eq!(cli.target, PathBuf::from("world.json"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.scale, DEFAULT_RENDER_SCALE);
        assert!(!cli.quiet);
        assert!(!cli.visualize);
        assert!(!cli.snapshot);
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping flags from the derive
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "worlds",
            "--seed",
            "123",
            "--quiet",
            "--no-skip",
            "--visualize",
            "--snapshot",
            "--scale",
            "2",
            "-vv",
        ]);

        assert_eq!(cli.seed, 123);
        assert!(cli.quiet);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
        assert!(cli.visualize);
        assert!(cli.snapshot);
        assert_eq!(cli.scale, 2);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }

    // Tests verbosity saturates at trace
    // Verified by removing the catch-all arm
    #[test]
    fn test_log_level_saturates() {
        let cli = Cli::parse_from(["program", "w.json", "-vvvvv"]);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
        let cli = Cli::parse_from(["program", "w.json", "-v"]);
        assert_eq!(cli.log_level(), tracing::Level::INFO);
    }

    // Tests output paths sit next to the configuration
    // Verified by dropping the parent directory
    #[test]
    fn test_sibling_path() {
        assert_eq!(
            sibling_path(Path::new("maps/island.json"), "_world", "png"),
            PathBuf::from("maps/island_world.png")
        );
        assert_eq!(
            sibling_path(Path::new("island.json"), "_phases", "gif"),
            PathBuf::from("island_phases.gif")
        );
    }

    // Tests snapshots are never mistaken for configurations
    // Verified by removing the suffix check
    #[test]
    fn test_is_config_file() {
        assert!(is_config_file(Path::new("a/island.json")));
        assert!(!is_config_file(Path::new("a/island_snapshot.json")));
        assert!(!is_config_file(Path::new("a/island.png")));
        assert!(!is_config_file(Path::new("a/island")));
    }

    // Tests error handling for missing targets
    // Verified by removing error return for nonexistent paths
    #[test]
    fn test_process_nonexistent_target() {
        let mut processor = FileProcessor::new(create_test_cli(Path::new("missing.json"), &[]));
        assert!(processor.process().is_err());
    }

    // Tests error handling for non-JSON target files
    // Verified by removing file type validation
    #[test]
    fn test_process_invalid_file_type() {
        let temp_dir = TempDir::new().expect("temp dir");
        let txt_file = temp_dir.path().join("world.txt");
        fs::write(&txt_file, "{}").expect("write");

        let mut processor = FileProcessor::new(create_test_cli(&txt_file, &[]));
        assert!(processor.process().is_err());
    }

    // Tests processing empty directories
    // Verified by adding error for empty directories
    #[test]
    fn test_process_empty_directory() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut processor = FileProcessor::new(create_test_cli(temp_dir.path(), &[]));
        assert!(processor.process().is_ok());
    }

    // Tests a configuration produces its preview and optional outputs
    // Verified by skipping the GIF and snapshot exports
    #[test]
    fn test_process_writes_outputs() {
        let temp_dir = TempDir::new().expect("temp dir");
        let config = write_world(&temp_dir, "meadow.json");

        let mut processor =
            FileProcessor::new(create_test_cli(&config, &["--visualize", "--snapshot"]));
        processor.process().expect("processing should succeed");

        assert!(temp_dir.path().join("meadow_world.png").exists());
        assert!(temp_dir.path().join("meadow_phases.gif").exists());
        let snapshot = fs::read_to_string(temp_dir.path().join("meadow_snapshot.json"))
            .expect("snapshot written");
        assert!(snapshot.contains("\"terrain\""));
    }

    // Tests directories are scanned for configurations, skipping done ones
    // Verified by removing the skip check
    #[test]
    fn test_collect_files_skips_existing() {
        let temp_dir = TempDir::new().expect("temp dir");
        write_world(&temp_dir, "b.json");
        write_world(&temp_dir, "a.json");
        fs::write(temp_dir.path().join("b_world.png"), "done").expect("write");
        fs::write(temp_dir.path().join("a_snapshot.json"), "{}").expect("write");
        fs::write(temp_dir.path().join("notes.txt"), "x").expect("write");

        let processor = FileProcessor::new(create_test_cli(temp_dir.path(), &[]));
        let files = processor.collect_files().expect("collect");
        assert_eq!(files, vec![temp_dir.path().join("a.json")]);

        let processor = FileProcessor::new(create_test_cli(temp_dir.path(), &["--no-skip"]));
        let files = processor.collect_files().expect("collect");
        assert_eq!(
            files,
            vec![temp_dir.path().join("a.json"), temp_dir.path().join("b.json")]
        );
    }

    // Tests a broken configuration aborts processing
    // Verified by ignoring configuration load errors
    #[test]
    fn test_process_invalid_configuration() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, r#"{ "phases": [{ "plugin": "nope" }] }"#).expect("write");

        let mut processor = FileProcessor::new(create_test_cli(&path, &[]));
        assert!(processor.process().is_err());
        assert!(!temp_dir.path().join("broken_world.png").exists());
    }
}
