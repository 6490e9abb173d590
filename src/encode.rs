//! PNM encoder: headers plus the six per-variant pixel serializers.

use alloc::format;
use alloc::vec::Vec;

use crate::bitset::Bitset;
use crate::error::PnmError;
use crate::image::Image;
use crate::info::PnmFormat;

/// Encode an image in the requested PNM variant.
///
/// Any color model encodes as any variant; bilevel and grayscale targets
/// take the red channel, so encoding a color image that way is lossy.
pub fn encode(image: &Image<'_>, format: PnmFormat) -> Result<Vec<u8>, PnmError> {
    EncodeRequest::new(format).encode(image)
}

/// Encode with a chosen wire variant.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: PnmFormat,
}

impl EncodeRequest {
    pub fn new(format: PnmFormat) -> Self {
        Self { format }
    }

    pub fn encode(&self, image: &Image<'_>) -> Result<Vec<u8>, PnmError> {
        let w = image.width as usize;
        let h = image.height as usize;
        let expected = w
            .checked_mul(h)
            .and_then(|wh| wh.checked_mul(image.model.bytes_per_pixel()))
            .ok_or(PnmError::DimensionsTooLarge {
                width: image.width,
                height: image.height,
            })?;
        if image.pixels().len() < expected {
            return Err(PnmError::BufferTooSmall {
                needed: expected,
                actual: image.pixels().len(),
            });
        }

        Ok(match self.format {
            PnmFormat::PbmAscii => encode_p1(image, w, h),
            PnmFormat::PgmAscii => encode_p2(image, w, h),
            PnmFormat::PpmAscii => encode_p3(image, w, h),
            PnmFormat::PbmBinary => encode_p4(image, w, h),
            PnmFormat::PgmBinary => encode_p5(image, w, h),
            PnmFormat::PpmBinary => encode_p6(image, w, h),
        })
    }
}

/// Append `v` as an ASCII decimal token.
fn push_decimal(out: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        out.push(b'0' + v / 100);
    }
    if v >= 10 {
        out.push(b'0' + v / 10 % 10);
    }
    out.push(b'0' + v % 10);
}

/// P1: one `0`/`1` token per pixel, one row per line. A pixel is `1` when
/// its red channel byte is 0xFF.
fn encode_p1(image: &Image<'_>, w: usize, h: usize) -> Vec<u8> {
    let header = format!("P1\n{} {}\n", image.width, image.height);
    let mut out = Vec::with_capacity(header.len() + w * 2 * h);
    out.extend_from_slice(header.as_bytes());

    for y in 0..h {
        for x in 0..w {
            if x > 0 {
                out.push(b' ');
            }
            let [r, _, _, _] = image.rgba(x as u32, y as u32);
            out.push(if r == 0xFF { b'1' } else { b'0' });
        }
        out.push(b'\n');
    }
    out
}

/// P2: red channel as one decimal token per pixel, one row per line.
fn encode_p2(image: &Image<'_>, w: usize, h: usize) -> Vec<u8> {
    let header = format!("P2\n{} {}\n255\n", image.width, image.height);
    let mut out = Vec::with_capacity(header.len() + w * 4 * h);
    out.extend_from_slice(header.as_bytes());

    for y in 0..h {
        for x in 0..w {
            if x > 0 {
                out.push(b' ');
            }
            let [r, _, _, _] = image.rgba(x as u32, y as u32);
            push_decimal(&mut out, r);
        }
        out.push(b'\n');
    }
    out
}

/// P3: three decimal tokens (R, G, B) per pixel, one row per line.
fn encode_p3(image: &Image<'_>, w: usize, h: usize) -> Vec<u8> {
    let header = format!("P3\n{} {}\n255\n", image.width, image.height);
    let mut out = Vec::with_capacity(header.len() + w * 12 * h);
    out.extend_from_slice(header.as_bytes());

    for y in 0..h {
        for x in 0..w {
            if x > 0 {
                out.push(b' ');
            }
            let [r, g, b, _] = image.rgba(x as u32, y as u32);
            push_decimal(&mut out, r);
            out.push(b' ');
            push_decimal(&mut out, g);
            out.push(b' ');
            push_decimal(&mut out, b);
        }
        out.push(b'\n');
    }
    out
}

/// P4: rows packed MSB-first and padded to whole bytes. A bit is set when
/// the pixel's red channel is nonzero; padding bits stay zero.
fn encode_p4(image: &Image<'_>, w: usize, h: usize) -> Vec<u8> {
    let row_bytes = w.div_ceil(8);
    let pad = row_bytes * 8 - w;
    let mut bits = Bitset::with_capacity(row_bytes * 8 * h);

    let mut bit = 0;
    for y in 0..h {
        for x in 0..w {
            let [r, _, _, _] = image.rgba(x as u32, y as u32);
            if r > 0 {
                bits.set(bit);
            }
            bit += 1;
        }
        bit += pad;
    }

    let header = format!("P4\n{} {}\n", image.width, image.height);
    let mut out = Vec::with_capacity(header.len() + row_bytes * h);
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(&bits.into_bytes());
    out
}

/// P5: red channel as one raw byte per pixel, no separators.
fn encode_p5(image: &Image<'_>, w: usize, h: usize) -> Vec<u8> {
    let header = format!("P5\n{} {}\n255\n", image.width, image.height);
    let mut out = Vec::with_capacity(header.len() + w * h);
    out.extend_from_slice(header.as_bytes());

    for y in 0..h {
        for x in 0..w {
            let [r, _, _, _] = image.rgba(x as u32, y as u32);
            out.push(r);
        }
    }
    out
}

/// P6: three raw bytes (R, G, B) per pixel, no separators.
fn encode_p6(image: &Image<'_>, w: usize, h: usize) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", image.width, image.height);
    let mut out = Vec::with_capacity(header.len() + w * h * 3);
    out.extend_from_slice(header.as_bytes());

    for y in 0..h {
        for x in 0..w {
            let [r, g, b, _] = image.rgba(x as u32, y as u32);
            out.push(r);
            out.push(g);
            out.push(b);
        }
    }
    out
}
