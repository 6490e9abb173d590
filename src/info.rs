use crate::decode;
use crate::error::PnmError;
use crate::image::ColorModel;
use crate::reader::TokenReader;

/// Which PNM wire variant to use.
///
/// Any [`crate::Image`] can be encoded as any variant; encoding a color
/// image as a bilevel or grayscale variant is lossy.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// P1 — ASCII bilevel (plain PBM).
    PbmAscii,
    /// P4 — binary bilevel (raw PBM).
    PbmBinary,
    /// P2 — ASCII grayscale (plain PGM).
    PgmAscii,
    /// P5 — binary grayscale (raw PGM).
    PgmBinary,
    /// P3 — ASCII RGB (plain PPM).
    PpmAscii,
    /// P6 — binary RGB (raw PPM).
    PpmBinary,
}

impl PnmFormat {
    /// Map a magic token to its variant. `None` for anything but P1–P6.
    pub fn from_magic(magic: &[u8]) -> Option<PnmFormat> {
        match magic {
            b"P1" => Some(PnmFormat::PbmAscii),
            b"P2" => Some(PnmFormat::PgmAscii),
            b"P3" => Some(PnmFormat::PpmAscii),
            b"P4" => Some(PnmFormat::PbmBinary),
            b"P5" => Some(PnmFormat::PgmBinary),
            b"P6" => Some(PnmFormat::PpmBinary),
            _ => None,
        }
    }

    /// The two-byte magic beginning every file of this variant.
    pub fn magic(&self) -> &'static str {
        match self {
            PnmFormat::PbmAscii => "P1",
            PnmFormat::PgmAscii => "P2",
            PnmFormat::PpmAscii => "P3",
            PnmFormat::PbmBinary => "P4",
            PnmFormat::PgmBinary => "P5",
            PnmFormat::PpmBinary => "P6",
        }
    }

    /// Color model this variant decodes into.
    pub fn color_model(&self) -> ColorModel {
        match self {
            PnmFormat::PbmAscii | PnmFormat::PbmBinary => ColorModel::Bilevel,
            PnmFormat::PgmAscii | PnmFormat::PgmBinary => ColorModel::Gray,
            PnmFormat::PpmAscii | PnmFormat::PpmBinary => ColorModel::Rgb,
        }
    }

    /// Whether the pixel payload is raw bytes rather than ASCII tokens.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            PnmFormat::PbmBinary | PnmFormat::PgmBinary | PnmFormat::PpmBinary
        )
    }
}

/// Image metadata probed from a header, without decoding pixels.
#[derive(Clone, Copy, Debug)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: PnmFormat,
    pub model: ColorModel,
}

impl ImageInfo {
    /// Probe the header of `data`.
    ///
    /// Reads the magic token and dimensions only; the pixel payload may be
    /// absent or truncated.
    pub fn from_bytes(data: &[u8]) -> Result<ImageInfo, PnmError> {
        let (format, width, height) = decode::parse_header(&mut TokenReader::new(data))?;
        Ok(ImageInfo {
            width,
            height,
            format,
            model: format.color_model(),
        })
    }
}
