//! Rectangle fill/stroke into an owned row-major RGBA pixel buffer.

/// Pack a color as `a<<24 | b<<16 | g<<8 | r` (little-endian RGBA bytes)
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | r as u32
}

/// Opaque black
pub const BLACK: u32 = rgba(0, 0, 0, 255);
/// Opaque white
pub const WHITE: u32 = rgba(255, 255, 255, 255);

/// Finished render: dimensions plus packed pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Packed pixel at (x, y), `None` out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Unpack to `[r, g, b, a]` bytes per pixel
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }
}

/// Drawing surface with a fixed size
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    /// Canvas filled with `background`
    pub fn new(width: u32, height: u32, background: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill a rectangle. Negative extents are normalised and the result is
    /// clipped to the canvas.
    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: u32) {
        let (mut x0, mut x1) = (x, x + width);
        let (mut y0, mut y1) = (y, y + height);
        if x1 < x0 {
            std::mem::swap(&mut x0, &mut x1);
        }
        if y1 < y0 {
            std::mem::swap(&mut y0, &mut y1);
        }
        let x0 = x0.clamp(0, self.width as i64) as usize;
        let x1 = x1.clamp(0, self.width as i64) as usize;
        let y0 = y0.clamp(0, self.height as i64) as usize;
        let y1 = y1.clamp(0, self.height as i64) as usize;
        if x0 == x1 || y0 == y1 {
            return;
        }

        let stride = self.width as usize;
        for row in self.pixels.chunks_exact_mut(stride).take(y1).skip(y0) {
            row[x0..x1].fill(color);
        }
    }

    /// Border of `border` pixels drawn inside the rectangle
    pub fn stroke_rect(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        border: i64,
        color: u32,
    ) {
        let (x, width) = if width < 0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0 { (y + height, -height) } else { (y, height) };
        if border <= 0 || width == 0 || height == 0 {
            return;
        }
        if border * 2 >= width || border * 2 >= height {
            self.fill_rect(x, y, width, height, color);
            return;
        }
        self.fill_rect(x, y, width, border, color);
        self.fill_rect(x, y + height - border, width, border, color);
        self.fill_rect(x, y + border, border, height - 2 * border, color);
        self.fill_rect(x + width - border, y + border, border, height - 2 * border, color);
    }

    pub fn into_buffer(self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels,
        }
    }
}
