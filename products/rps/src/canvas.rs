use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use std::convert::Infallible;

/// Pack a color the way `minifb` expects it: `0x00RRGGBB`.
pub fn pack(color: Rgb888) -> u32 {
    ((color.r() as u32) << 16) | ((color.g() as u32) << 8) | color.b() as u32
}

/// Off-screen `0RGB` framebuffer that `embedded-graphics` can draw on.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.buffer[y * self.width + x])
        } else {
            None
        }
    }

    /// Copy a packed `width`×`height` image with its top-left corner at `(x, y)`.
    /// Whatever falls outside the canvas is clipped.
    pub fn blit(&mut self, pixels: &[u32], width: usize, height: usize, x: i32, y: i32) {
        if pixels.len() < width * height {
            log::warn!(
                "blit: expected {} pixels, got {}",
                width * height,
                pixels.len()
            );
            return;
        }
        for row in 0..height {
            let ty = y + row as i32;
            if ty < 0 || ty as usize >= self.height {
                continue;
            }
            for col in 0..width {
                let tx = x + col as i32;
                if tx < 0 || tx as usize >= self.width {
                    continue;
                }
                self.buffer[ty as usize * self.width + tx as usize] = pixels[row * width + col];
            }
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && (point.x as usize) < self.width
                && point.y >= 0
                && (point.y as usize) < self.height
            {
                self.buffer[point.y as usize * self.width + point.x as usize] = pack(color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer.fill(pack(color));
        Ok(())
    }
}
