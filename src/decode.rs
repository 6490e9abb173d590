//! PNM decoder: header parsing and the six per-variant pixel readers.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::bitset::Bitset;
use crate::error::PnmError;
use crate::image::Image;
use crate::info::PnmFormat;
use crate::limits::Limits;
use crate::reader::TokenReader;

/// Decode a PNM byte stream (any of P1–P6).
///
/// P5/P6 data with maxval 255 decodes zero-copy; everything else allocates.
pub fn decode(data: &[u8]) -> Result<Image<'_>, PnmError> {
    DecodeRequest::new(data).decode()
}

/// Read (width, height) from a PNM header.
///
/// Consumes the magic and dimension tokens only; the pixel payload may be
/// absent or truncated.
pub fn decode_dimensions(data: &[u8]) -> Result<(u32, u32), PnmError> {
    let (_, width, height) = parse_header(&mut TokenReader::new(data))?;
    Ok((width, height))
}

/// Decode with options.
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a, 'b> {
    data: &'a [u8],
    limits: Option<&'b Limits>,
}

impl<'a, 'b> DecodeRequest<'a, 'b> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Enforce resource limits while decoding.
    pub fn with_limits(mut self, limits: &'b Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<Image<'a>, PnmError> {
        let mut reader = TokenReader::new(self.data);
        let (format, width, height) = parse_header(&mut reader)?;

        if let Some(limits) = self.limits {
            limits.check_dimensions(width, height)?;
        }

        let w = width as usize;
        let h = height as usize;
        let model = format.color_model();
        let out_bytes = w
            .checked_mul(h)
            .and_then(|wh| wh.checked_mul(model.bytes_per_pixel()))
            .ok_or(PnmError::DimensionsTooLarge { width, height })?;
        if let Some(limits) = self.limits {
            limits.check_alloc(out_bytes)?;
        }

        let pixels = match format {
            PnmFormat::PbmAscii => Cow::Owned(decode_p1(&mut reader, w, h)?),
            PnmFormat::PgmAscii => Cow::Owned(decode_p2(&mut reader, w, h)?),
            PnmFormat::PpmAscii => Cow::Owned(decode_p3(&mut reader, w, h)?),
            PnmFormat::PbmBinary => Cow::Owned(decode_p4(&mut reader, w, h)?),
            PnmFormat::PgmBinary => decode_p5(&mut reader, w, h)?,
            PnmFormat::PpmBinary => decode_p6(&mut reader, w, h)?,
        };

        Ok(match pixels {
            Cow::Borrowed(data) => Image::borrowed(data, width, height, model),
            Cow::Owned(data) => Image::owned(data, width, height, model),
        })
    }
}

/// Read the magic token and dimensions common to all six variants.
///
/// Header fields are ASCII tokens in every variant, binary ones included;
/// only the pixel payload differs in encoding.
pub(crate) fn parse_header(
    reader: &mut TokenReader<'_>,
) -> Result<(PnmFormat, u32, u32), PnmError> {
    let magic = reader.next_token()?;
    let Some(format) = PnmFormat::from_magic(magic) else {
        return Err(match magic {
            b"P7" => PnmError::UnsupportedVariant("P7 (PAM)".into()),
            b"Pf" | b"PF" => PnmError::UnsupportedVariant("PFM".into()),
            _ => PnmError::UnrecognizedFormat,
        });
    };

    let width = reader.next_u32()?;
    let height = reader.next_u32()?;
    if width == 0 || height == 0 {
        return Err(PnmError::InvalidHeader(alloc::format!(
            "image dimensions {width}x{height} must be nonzero"
        )));
    }
    Ok((format, width, height))
}

fn read_maxval(reader: &mut TokenReader<'_>) -> Result<u32, PnmError> {
    let maxval = reader.next_u32()?;
    if maxval == 0 {
        return Err(PnmError::ZeroMaxval);
    }
    if maxval > 255 {
        return Err(PnmError::InvalidHeader(alloc::format!(
            "maxval {maxval} exceeds 255"
        )));
    }
    Ok(maxval)
}

/// Sample rescale law: `(s & maxval) * (255 / maxval)`, integer division,
/// with `mul` precomputed as `255 / maxval`. The product never exceeds 255.
fn rescale(s: u32, maxval: u32, mul: u32) -> u8 {
    ((s & maxval) * mul) as u8
}

/// P1: ASCII bilevel. One token per pixel, 1 → 0xFF, 0 → 0x00.
fn decode_p1(reader: &mut TokenReader<'_>, w: usize, h: usize) -> Result<Vec<u8>, PnmError> {
    let mut out = Vec::with_capacity(w * h);
    for _ in 0..w * h {
        let sample = reader.next_u32()?;
        out.push((sample as u8).wrapping_mul(0xFF));
    }
    Ok(out)
}

/// P2: ASCII grayscale. Maxval token, then one sample token per pixel.
fn decode_p2(reader: &mut TokenReader<'_>, w: usize, h: usize) -> Result<Vec<u8>, PnmError> {
    let maxval = read_maxval(reader)?;
    let mul = 255 / maxval;
    let mut out = Vec::with_capacity(w * h);
    for _ in 0..w * h {
        out.push(rescale(reader.next_u32()?, maxval, mul));
    }
    Ok(out)
}

/// P3: ASCII RGB. As P2 with three sample tokens per pixel.
fn decode_p3(reader: &mut TokenReader<'_>, w: usize, h: usize) -> Result<Vec<u8>, PnmError> {
    let maxval = read_maxval(reader)?;
    let mul = 255 / maxval;
    let mut out = Vec::with_capacity(w * h * 3);
    for _ in 0..w * h * 3 {
        out.push(rescale(reader.next_u32()?, maxval, mul));
    }
    Ok(out)
}

/// P4: binary bilevel. Rows are packed MSB-first and padded to whole bytes;
/// the `row_bytes * 8 - width` trailing bits of each row are never
/// interpreted as pixels.
fn decode_p4(reader: &mut TokenReader<'_>, w: usize, h: usize) -> Result<Vec<u8>, PnmError> {
    let row_bytes = w.div_ceil(8);
    reader.skip_separator()?;
    let bits = Bitset::from_bytes(reader.read_raw(row_bytes * h)?);

    let mut out = Vec::with_capacity(w * h);
    for y in 0..h {
        let row = y * row_bytes * 8;
        for x in 0..w {
            out.push(if bits.test(row + x) { 0xFF } else { 0x00 });
        }
    }
    Ok(out)
}

/// P5: binary grayscale. Maxval token, separator, one raw byte per pixel.
fn decode_p5<'a>(
    reader: &mut TokenReader<'a>,
    w: usize,
    h: usize,
) -> Result<Cow<'a, [u8]>, PnmError> {
    let maxval = read_maxval(reader)?;
    reader.skip_separator()?;
    let raw = reader.read_raw(w * h)?;

    // Maxval 255 makes the rescale the identity; borrow the payload.
    if maxval == 255 {
        return Ok(Cow::Borrowed(raw));
    }
    let mul = 255 / maxval;
    Ok(Cow::Owned(
        raw.iter()
            .map(|&s| rescale(u32::from(s), maxval, mul))
            .collect(),
    ))
}

/// P6: binary RGB. As P5 with three interleaved raw bytes per pixel, each
/// channel rescaled independently.
fn decode_p6<'a>(
    reader: &mut TokenReader<'a>,
    w: usize,
    h: usize,
) -> Result<Cow<'a, [u8]>, PnmError> {
    let maxval = read_maxval(reader)?;
    reader.skip_separator()?;
    let raw = reader.read_raw(w * h * 3)?;

    if maxval == 255 {
        return Ok(Cow::Borrowed(raw));
    }
    let mul = 255 / maxval;
    Ok(Cow::Owned(
        raw.iter()
            .map(|&s| rescale(u32::from(s), maxval, mul))
            .collect(),
    ))
}
