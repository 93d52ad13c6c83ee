//! Flat PNG previews of a map

use crate::io::error::{Result, WorldError};
use crate::spatial::{Map, TerrainId};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Transparent pixel used where no layer has a tile
pub const EMPTY_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Stable preview color of a terrain id
///
/// Ids are scattered over the color cube by a multiplicative hash, so
/// neighboring ids get visibly different colors.
pub const fn terrain_color(terrain: TerrainId) -> Rgba<u8> {
    let [r, g, b, _] = terrain.wrapping_mul(0x9E37_79B9).to_le_bytes();
    Rgba([r | 0x20, g | 0x20, b | 0x20, 255])
}

/// Composite every layer in creation order, one `scale`×`scale` block per tile
pub fn render_map(map: &Map, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let size = map.size();
    let mut img = RgbaImage::from_pixel(
        size.width as u32 * scale,
        size.height as u32 * scale,
        EMPTY_COLOR,
    );

    for layer in map.layers() {
        for (position, tile) in layer.grid().iter() {
            let Some(tile) = tile else {
                continue;
            };
            let color = terrain_color(tile.terrain);
            let (left, top) = (position.x as u32 * scale, position.y as u32 * scale);
            for dy in 0..scale {
                for dx in 0..scale {
                    if let Some(pixel) = img.get_pixel_mut_checked(left + dx, top + dy) {
                        *pixel = color;
                    }
                }
            }
        }
    }
    img
}

/// Render a map and save it as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_png(map: &Map, scale: u32, output_path: &Path) -> Result<()> {
    let img = render_map(map, scale);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| WorldError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| WorldError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
