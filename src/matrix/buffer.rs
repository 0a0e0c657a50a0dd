//! Fixed-resolution pixel surface.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Row-major pixels where each row starts `stride` pixels after the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    stride: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        Self::with_stride(width, height, width, fill)
    }

    /// `stride` is raised to `width` if smaller.
    pub fn with_stride(width: usize, height: usize, stride: usize, fill: Rgb) -> Self {
        let stride = stride.max(width);
        Self {
            width,
            height,
            stride,
            pixels: vec![fill; stride * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.stride + x])
        } else {
            None
        }
    }

    /// Paint `len` pixels of row `y` starting at column `x`. Anything outside
    /// the visible area is skipped.
    pub fn fill_span(&mut self, x: isize, y: isize, len: usize, color: Rgb) {
        let Ok(row) = usize::try_from(y) else {
            return;
        };
        if row >= self.height {
            return;
        }

        let end = x.saturating_add(len as isize).min(self.width as isize);
        let start = x.max(0);
        if start >= end {
            return;
        }

        let base = row * self.stride;
        self.pixels[base + start as usize..base + end as usize].fill(color);
    }
}
