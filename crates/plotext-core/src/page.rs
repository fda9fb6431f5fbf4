// File: crates/plotext-core/src/page.rs
// Summary: Headless raster page backed by a Skia CPU surface, with PNG encoding.

use std::path::Path;

use skia_safe as skia;
use thiserror::Error;
use tracing::debug;

use crate::draw::DrawArea;
use crate::geometry::Rect;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A raster image to draw plots on. One page unit is one pixel.
pub struct Page {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl Page {
    pub fn new(width: i32, height: i32) -> Result<Self, RenderError> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        debug!(width, height, "created raster page");
        Ok(Self { surface, width, height })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// The whole page as a Y-up rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width as f64, self.height as f64)
    }

    pub fn clear(&mut self, color: skia::Color) {
        self.surface.canvas().clear(color);
    }

    /// A drawing area covering the whole page.
    pub fn draw_area(&mut self) -> DrawArea<'_> {
        let bounds = self.bounds();
        let height = self.height as f64;
        DrawArea::new(self.surface.canvas(), height, bounds)
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>, RenderError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let bytes = self.encode_png()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }
}
