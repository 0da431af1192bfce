use image::{Rgb, RgbImage};
use xcommon::{fill_rect, Rect};

/// `#5CD6BA`
pub const TURQUOISE: Rgb<u8> = Rgb([92, 214, 186]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// The canonical full resolution icon every other size is scaled from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseIcon {
    pub size: u32,
    pub background: Rgb<u8>,
    pub color: Rgb<u8>,
    pub bars: [Rect; 2],
}

impl Default for BaseIcon {
    fn default() -> Self {
        Self {
            size: 1024,
            background: BLACK,
            color: TURQUOISE,
            bars: [
                // vertical
                Rect::new(384, 128, 640, 896),
                // horizontal
                Rect::new(128, 384, 896, 640),
            ],
        }
    }
}

impl BaseIcon {
    pub fn render(&self) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.size, self.size, self.background);
        for bar in self.bars {
            fill_rect(&mut img, bar, self.color);
        }
        img
    }
}
