//! Per-phase frame capture and GIF export

use crate::io::error::{Result, WorldError, invalid_parameter};
use crate::io::image::render_map;
use crate::spatial::Map;
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// How many frame delays the final frame is held for
const FINAL_FRAME_HOLD: u32 = 5;

/// Captures one rendered frame per completed phase
#[derive(Debug, Clone)]
pub struct PhaseCapture {
    scale: u32,
    frames: Vec<(String, RgbaImage)>,
}

impl PhaseCapture {
    /// Create an empty capture rendering at `scale` pixels per tile
    pub const fn new(scale: u32) -> Self {
        Self {
            scale,
            frames: Vec::new(),
        }
    }

    /// Render the map as it stands after a phase
    pub fn record(&mut self, label: &str, map: &Map) {
        self.frames
            .push((label.to_string(), render_map(map, self.scale)));
    }

    /// Labels of the recorded phases, in order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(|(label, _)| label.as_str())
    }

    /// Number of recorded frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// The last frame is held longer so the finished map stays readable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no phases captured for visualization",
            ));
        }

        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, (_, img))| {
            let delay = if index == last {
                frame_delay_ms * FINAL_FRAME_HOLD
            } else {
                frame_delay_ms
            };
            Frame::from_parts(img.clone(), 0, 0, Delay::from_numer_denom_ms(delay, 1))
        });

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WorldError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| WorldError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| WorldError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
