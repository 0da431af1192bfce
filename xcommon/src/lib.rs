use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

mod canvas;

pub use canvas::{fill_rect, Rect};
pub use image::imageops::FilterType;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalerOpts {
    pub size: u32,
    pub filter: FilterType,
}

impl ScalerOpts {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            filter: FilterType::Lanczos3,
        }
    }

    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}

/// Writes square PNG copies of a source image at arbitrary sizes.
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    pub fn new(img: impl Into<DynamicImage>) -> Result<Self> {
        let img = img.into();
        let (width, height) = img.dimensions();
        if width != height {
            anyhow::bail!("expected width == height");
        }
        if width < 512 {
            anyhow::bail!("expected icon of at least 512x512 px");
        }
        Ok(Self { img })
    }

    pub fn size(&self) -> u32 {
        self.img.width()
    }

    /// Returns the source resampled to `opts.size`. A request for the
    /// source size returns an exact copy.
    pub fn scale(&self, opts: ScalerOpts) -> DynamicImage {
        if opts.size == self.size() {
            return self.img.clone();
        }
        self.img.resize_exact(opts.size, opts.size, opts.filter)
    }

    pub fn write<W: Write + Seek>(&self, w: &mut W, opts: ScalerOpts) -> Result<()> {
        self.scale(opts).write_to(w, ImageFormat::Png)?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, opts: ScalerOpts) -> Result<()> {
        let path = path.as_ref();
        log::debug!("writing {}x{} {}", opts.size, opts.size, path.display());
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut w = BufWriter::new(file);
        self.write(&mut w, opts)
            .with_context(|| format!("encoding {}", path.display()))?;
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    fn checker(size: u32) -> RgbImage {
        RgbImage::from_fn(size, size, |x, y| {
            if (x / 64 + y / 64) % 2 == 0 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    #[test]
    fn rejects_non_square() {
        assert!(Scaler::new(RgbImage::new(1024, 512)).is_err());
    }

    #[test]
    fn rejects_small() {
        assert!(Scaler::new(RgbImage::new(256, 256)).is_err());
    }

    #[test]
    fn scale_to_size() -> Result<()> {
        let scaler = Scaler::new(checker(1024))?;
        assert_eq!(scaler.size(), 1024);
        assert_eq!(scaler.scale(ScalerOpts::new(167)).dimensions(), (167, 167));
        let nearest = ScalerOpts::new(20).filter(FilterType::Nearest);
        assert_eq!(scaler.scale(nearest).dimensions(), (20, 20));
        Ok(())
    }

    #[test]
    fn same_size_is_exact_copy() -> Result<()> {
        let img = checker(512);
        let scaler = Scaler::new(img.clone())?;
        let copy = scaler.scale(ScalerOpts::new(512)).to_rgb8();
        assert_eq!(copy, img);
        Ok(())
    }

    #[test]
    fn write_png() -> Result<()> {
        let scaler = Scaler::new(checker(512))?;
        let mut buf = Cursor::new(Vec::new());
        scaler.write(&mut buf, ScalerOpts::new(58))?;
        let decoded = image::load_from_memory_with_format(buf.get_ref(), ImageFormat::Png)?;
        assert_eq!(decoded.dimensions(), (58, 58));
        Ok(())
    }
}
