//! Generates an iOS `AppIcon.appiconset`: a procedurally drawn base icon,
//! every scaled variant the asset catalog needs, and its `Contents.json`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use xcommon::{Scaler, ScalerOpts};

mod contents;
mod icon;
mod spec;

pub use contents::{Contents, ImageEntry, Info};
pub use icon::{BaseIcon, BLACK, TURQUOISE};
pub use spec::{IconSpec, Idiom, ICON_SPECS};

pub const BASE_FILENAME: &str = "AppIcon-1024.png";
pub const CONTENTS_FILENAME: &str = "Contents.json";

/// Files written by a completed [`AppIconSet`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconSet {
    pub dir: PathBuf,
    pub images: Vec<PathBuf>,
    pub contents: PathBuf,
}

/// Writes an icon set step by step. Existing files are overwritten.
pub struct AppIconSet {
    dir: PathBuf,
    scaler: Scaler,
    images: Vec<PathBuf>,
}

impl AppIconSet {
    /// Creates `dir` if needed and renders the base icon.
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let scaler = Scaler::new(BaseIcon::default().render())?;
        Ok(Self {
            dir: dir.to_path_buf(),
            scaler,
            images: vec![],
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn add_base(&mut self) -> Result<()> {
        let path = self.dir.join(BASE_FILENAME);
        self.scaler.save(&path, ScalerOpts::new(self.scaler.size()))?;
        tracing::debug!("wrote {}", path.display());
        self.images.push(path);
        Ok(())
    }

    pub fn add_scaled(&mut self) -> Result<()> {
        for spec in ICON_SPECS.iter() {
            let path = self.dir.join(spec.filename());
            self.scaler.save(&path, ScalerOpts::new(spec.pixel_size()))?;
            tracing::debug!("wrote {}", path.display());
            self.images.push(path);
        }
        tracing::info!("scaled {} icons", ICON_SPECS.len());
        Ok(())
    }

    pub fn finish(self) -> Result<IconSet> {
        let path = self.dir.join(CONTENTS_FILENAME);
        Contents::app_icon(self.scaler.size()).write(&path)?;
        tracing::info!("wrote {}", path.display());
        Ok(IconSet {
            dir: self.dir,
            images: self.images,
            contents: path,
        })
    }
}

/// Writes the complete icon set into `dir`.
pub fn generate_icon_set(dir: &Path) -> Result<IconSet> {
    let mut set = AppIconSet::new(dir)?;
    set.add_base()?;
    set.add_scaled()?;
    set.finish()
}

/// Checks that every image `Contents.json` references, and every scaled
/// icon, exists in `dir` with the expected pixel size.
pub fn verify_icon_set(dir: &Path) -> Result<()> {
    let contents = Contents::read(&dir.join(CONTENTS_FILENAME))?;
    let referenced = contents
        .images
        .iter()
        .map(|entry| -> Result<(String, u32)> {
            Ok((entry.filename.clone(), entry.pixel_size()?))
        });
    let scaled = ICON_SPECS
        .iter()
        .map(|spec| -> Result<(String, u32)> { Ok((spec.filename(), spec.pixel_size())) });
    for item in referenced.chain(scaled) {
        let (filename, size) = item?;
        let path = dir.join(&filename);
        let (width, height) = image::image_dimensions(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        anyhow::ensure!(
            width == size && height == size,
            "{} is {}x{}, expected {}x{}",
            filename,
            width,
            height,
            size,
            size
        );
    }
    tracing::info!("verified {}", dir.display());
    Ok(())
}
