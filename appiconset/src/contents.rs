use crate::spec::{Idiom, ICON_SPECS};
use crate::BASE_FILENAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;
use std::path::Path;

/// `Contents.json` of an `.appiconset`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contents {
    pub images: Vec<ImageEntry>,
    #[serde(default)]
    pub info: Info,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: Idiom,
    /// Display scale, e.g. `2x`.
    pub scale: String,
    /// Logical size in points, e.g. `83.5x83.5`.
    pub size: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode".into(),
            version: 1,
        }
    }
}

impl ImageEntry {
    /// Side length in pixels the referenced image must have.
    pub fn pixel_size(&self) -> Result<u32> {
        let scale = self
            .scale
            .strip_suffix('x')
            .with_context(|| format!("invalid scale {:?}", self.scale))?
            .parse::<f32>()
            .with_context(|| format!("invalid scale {:?}", self.scale))?;
        let (width, height) = self
            .size
            .split_once('x')
            .with_context(|| format!("invalid size {:?}", self.size))?;
        anyhow::ensure!(width == height, "expected square size, got {}", self.size);
        let width = width
            .parse::<f32>()
            .with_context(|| format!("invalid size {:?}", self.size))?;
        Ok((width * scale).round() as u32)
    }
}

impl Contents {
    /// The manifest for the generated icon set: every iphone entry, then
    /// every ipad entry, then the app store icon.
    pub fn app_icon(base_size: u32) -> Self {
        let mut images = vec![];
        for idiom in [Idiom::Iphone, Idiom::Ipad] {
            for spec in ICON_SPECS.iter().filter(|spec| spec.targets(idiom)) {
                images.push(ImageEntry {
                    filename: spec.filename(),
                    idiom,
                    scale: spec.scale_label(),
                    size: spec.size_label(),
                });
            }
        }
        images.push(ImageEntry {
            filename: BASE_FILENAME.into(),
            idiom: Idiom::IosMarketing,
            scale: "1x".into(),
            size: format!("{0}x{0}", base_size),
        });
        Self {
            images,
            info: Info::default(),
        }
    }

    /// Serializes the way Xcode writes asset catalogs.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = vec![];
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, XcodeFormatter::default());
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(String::from_utf8(buf)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Pretty printer with Xcode's `"key" : value` separator.
#[derive(Default)]
struct XcodeFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> Formatter for XcodeFormatter<'a> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" : ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}
