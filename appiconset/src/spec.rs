use serde::{Deserialize, Serialize};

/// Device class an asset catalog entry targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Idiom {
    #[serde(rename = "iphone")]
    Iphone,
    #[serde(rename = "ipad")]
    Ipad,
    #[serde(rename = "ios-marketing")]
    IosMarketing,
}

impl std::fmt::Display for Idiom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Iphone => write!(f, "iphone"),
            Self::Ipad => write!(f, "ipad"),
            Self::IosMarketing => write!(f, "ios-marketing"),
        }
    }
}

const BOTH: &[Idiom] = &[Idiom::Iphone, Idiom::Ipad];
const IPHONE: &[Idiom] = &[Idiom::Iphone];
const IPAD: &[Idiom] = &[Idiom::Ipad];

/// One required icon image: a logical point size at a display scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconSpec {
    pub size: f32,
    pub scale: u32,
    /// Idioms whose `Contents.json` entries reference this image.
    pub idioms: &'static [Idiom],
}

impl IconSpec {
    const fn new(size: f32, scale: u32, idioms: &'static [Idiom]) -> Self {
        Self {
            size,
            scale,
            idioms,
        }
    }

    pub fn pixel_size(&self) -> u32 {
        (self.size * self.scale as f32).round() as u32
    }

    /// `AppIcon-{size}-{scale}x.png` with the decimal point dropped from
    /// the size, so 83.5pt becomes `835`.
    pub fn filename(&self) -> String {
        let size = self.size.to_string().replace('.', "");
        format!("AppIcon-{}-{}x.png", size, self.scale)
    }

    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }

    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.size)
    }

    pub fn targets(&self, idiom: Idiom) -> bool {
        self.idioms.contains(&idiom)
    }
}

pub const ICON_SPECS: [IconSpec; 15] = [
    // notification
    IconSpec::new(20.0, 1, BOTH),
    IconSpec::new(20.0, 2, BOTH),
    IconSpec::new(20.0, 3, IPHONE),
    // settings
    IconSpec::new(29.0, 1, BOTH),
    IconSpec::new(29.0, 2, BOTH),
    IconSpec::new(29.0, 3, IPHONE),
    // spotlight
    IconSpec::new(40.0, 1, BOTH),
    IconSpec::new(40.0, 2, BOTH),
    IconSpec::new(40.0, 3, IPHONE),
    // iphone app
    IconSpec::new(60.0, 2, IPHONE),
    IconSpec::new(60.0, 3, IPHONE),
    // ipad app
    IconSpec::new(76.0, 1, IPAD),
    IconSpec::new(76.0, 2, IPAD),
    // ipad pro app
    IconSpec::new(83.5, 2, IPAD),
    // app store, referenced through the base image
    IconSpec::new(1024.0, 1, &[]),
];
