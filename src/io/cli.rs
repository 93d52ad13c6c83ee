//! Command-line interface for batch world generation from JSON configurations

use crate::io::configuration::{
    CAPTURE_SUFFIX, DEFAULT_RENDER_SCALE, DEFAULT_SEED, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX,
    SNAPSHOT_SUFFIX,
};
use crate::io::error::{Result, WorldError, invalid_parameter};
use crate::io::image::export_map_png;
use crate::io::progress::ProgressManager;
use crate::io::snapshot::MapSnapshot;
use crate::io::visualization::PhaseCapture;
use crate::io::world::{WorldConfig, WorldGenerator};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "worldgen")]
#[command(
    author,
    version,
    about = "Generate tile-based world maps from JSON phase pipelines"
)]
/// Command-line arguments for the world generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// World configuration file or directory of configurations
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process configurations even if their preview exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Export an animated GIF with one frame per phase
    #[arg(long)]
    pub visualize: bool,

    /// Export a JSON snapshot of the finished map
    #[arg(long)]
    pub snapshot: bool,

    /// Pixels per tile in rendered images
    #[arg(long, default_value_t = DEFAULT_RENDER_SCALE)]
    pub scale: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by `-v` repetitions
    pub const fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Sibling path of a configuration with a suffix and new extension
pub fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Whether a path names a world configuration rather than a generated snapshot
pub fn is_config_file(path: &Path) -> bool {
    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
    let is_snapshot = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(SNAPSHOT_SUFFIX));
    is_json && !is_snapshot
}

/// Orchestrates batch processing of configuration files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Configuration files the target selects, sorted, minus skipped ones
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a JSON file nor a directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_config_file(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a JSON world configuration",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|source| WorldError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_config_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a JSON file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if sibling_path(input_path, OUTPUT_SUFFIX, "png").exists() {
            tracing::warn!(path = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();
        let config = WorldConfig::from_file(input_path)?;
        let generator = WorldGenerator::new(&config)?;

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path, generator.phases().len());
        }

        let mut capture = self.cli.visualize.then(|| PhaseCapture::new(self.cli.scale));
        let map = generator.generate_with(self.cli.seed, |_, resolved, map| {
            if let Some(capture) = capture.as_mut() {
                capture.record(resolved.label(), map);
            }
            if let Some(ref pm) = self.progress_manager {
                pm.complete_phase(resolved.label());
            }
        })?;

        export_map_png(
            &map,
            self.cli.scale,
            &sibling_path(input_path, OUTPUT_SUFFIX, "png"),
        )?;

        if let Some(capture) = capture.filter(|capture| capture.frame_count() > 0) {
            capture.export_gif(
                &sibling_path(input_path, CAPTURE_SUFFIX, "gif"),
                GIF_FRAME_DELAY_MS,
            )?;
        }

        if self.cli.snapshot {
            MapSnapshot::new(&map).write(&sibling_path(input_path, SNAPSHOT_SUFFIX, "json"))?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }
        tracing::info!(
            path = %input_path.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "world generated"
        );

        Ok(())
    }
}
