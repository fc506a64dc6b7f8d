//! Pixel sinks: the raster surface the tracer writes into.

use std::path::Path;

/// Destination raster for packed `0x00RRGGBB` pixels.
///
/// Coordinates are signed so callers can draw without clipping first;
/// the sink silently drops anything out of range. `line` and `bar` exist
/// for the overhead debug view and come with default implementations on
/// top of `plot`.
pub trait PixelSink {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Write one pixel. Out-of-range coordinates are ignored.
    fn plot(&mut self, x: i32, y: i32, rgb: u32);

    /// Fill the whole raster with one color.
    fn clear(&mut self, rgb: u32) {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                self.plot(x, y, rgb);
            }
        }
    }

    /// Draw a line segment between two points, endpoints included.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, rgb: u32) {
        // Bresenham over both octant families.
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y, rgb);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill the axis-aligned rectangle spanned by two corners, inclusive.
    fn bar(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, rgb: u32) {
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.plot(x, y, rgb);
            }
        }
    }
}

/// In-memory film buffer, row-major packed RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Film {
    /// Create a film filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read back the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Unpack to tightly packed RGBA bytes.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &pixel in &self.pixels {
            bytes.push((pixel >> 16) as u8);
            bytes.push((pixel >> 8) as u8);
            bytes.push(pixel as u8);
            bytes.push(0xff);
        }
        bytes
    }

    /// Write the film to disk as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

impl PixelSink for Film {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn plot(&mut self, x: i32, y: i32, rgb: u32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = rgb;
    }

    fn clear(&mut self, rgb: u32) {
        self.pixels.fill(rgb);
    }
}
