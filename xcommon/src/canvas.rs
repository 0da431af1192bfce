use image::{ImageBuffer, Pixel};

/// Axis aligned rectangle. Both corners are inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}

/// Fills `rect` with `color`, clipped to the image bounds.
pub fn fill_rect<P: Pixel>(img: &mut ImageBuffer<P, Vec<P::Subpixel>>, rect: Rect, color: P) {
    let (width, height) = img.dimensions();
    if rect.x0 > rect.x1 || rect.y0 > rect.y1 || rect.x0 >= width || rect.y0 >= height {
        return;
    }
    let x1 = rect.x1.min(width - 1);
    let y1 = rect.y1.min(height - 1);
    for y in rect.y0..=y1 {
        for x in rect.x0..=x1 {
            img.put_pixel(x, y, color);
        }
    }
}
