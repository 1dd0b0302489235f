//! Framebuffer - minimal raster target for the render readout
//!
//! Pixels are packed ABGR so the browser can copy them straight into
//! `ImageData`. All drawing is clipped to the buffer.

pub struct Framebuffer {
    width: u16,
    height: u16,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: u16, height: u16, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 { self.width }

    #[inline]
    pub fn height(&self) -> u16 { self.height }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Filled disc: every pixel within `radius` of the center. Radius 0 is a
    /// single pixel.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u8, color: u32) {
        let r = radius as i32;
        let r2 = r * r;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r2 {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Vertical segment from `y0` to `y1` inclusive.
    pub fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, color: u32) {
        if x < 0 || x >= self.width as i32 {
            return;
        }
        let top = y0.min(y1).max(0);
        let bottom = y0.max(y1).min(self.height as i32 - 1);
        for y in top..=bottom {
            self.put(x, y, color);
        }
    }

    /// Pile outline: each column filled from its height to the bottom edge.
    pub fn draw_skyline(&mut self, heights: &[u16], color: u32) {
        let bottom = self.height as i32 - 1;
        for (x, &h) in heights.iter().enumerate() {
            if (h as i32) <= bottom {
                self.draw_vline(x as i32, h as i32, bottom, color);
            }
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn as_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
