use zenpnm::*;

fn rgb_checkerboard(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            if (x + y) % 2 == 0 {
                pixels[off] = 255;
                pixels[off + 1] = 0;
                pixels[off + 2] = 128;
            } else {
                pixels[off] = 0;
                pixels[off + 1] = 200;
                pixels[off + 2] = 50;
            }
        }
    }
    pixels
}

fn gray_noise(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

fn bilevel_stripes(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h];
    for (i, p) in pixels.iter_mut().enumerate() {
        if i % 3 == 0 {
            *p = 0xFF;
        }
    }
    pixels
}

#[test]
fn ppm_binary_roundtrip() {
    let pixels = rgb_checkerboard(4, 3);
    let image = Image::new(4, 3, ColorModel::Rgb, pixels.clone()).unwrap();

    let encoded = encode(&image, PnmFormat::PpmBinary).unwrap();
    assert!(encoded.starts_with(b"P6\n4 3\n255\n"));

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.width, 4);
    assert_eq!(decoded.height, 3);
    assert_eq!(decoded.model, ColorModel::Rgb);
    assert_eq!(decoded.pixels(), &pixels[..]);
    // P6 with maxval=255 should be zero-copy
    assert!(decoded.is_borrowed(), "raw PPM decode should be zero-copy");
}

#[test]
fn ppm_ascii_roundtrip() {
    let pixels = rgb_checkerboard(5, 4);
    let image = Image::new(5, 4, ColorModel::Rgb, pixels.clone()).unwrap();

    let encoded = encode(&image, PnmFormat::PpmAscii).unwrap();
    assert!(encoded.starts_with(b"P3\n5 4\n255\n"));

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.model, ColorModel::Rgb);
    assert_eq!(decoded.pixels(), &pixels[..]);
    assert!(!decoded.is_borrowed());
}

#[test]
fn pgm_binary_roundtrip() {
    let pixels = gray_noise(16, 12);
    let image = Image::new(16, 12, ColorModel::Gray, pixels.clone()).unwrap();

    let encoded = encode(&image, PnmFormat::PgmBinary).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.model, ColorModel::Gray);
    assert_eq!(decoded.pixels(), &pixels[..]);
    assert!(decoded.is_borrowed(), "raw PGM decode should be zero-copy");
}

#[test]
fn pgm_ascii_roundtrip() {
    let pixels = gray_noise(3, 2);
    let image = Image::new(3, 2, ColorModel::Gray, pixels.clone()).unwrap();

    let encoded = encode(&image, PnmFormat::PgmAscii).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.model, ColorModel::Gray);
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn pbm_ascii_roundtrip() {
    let pixels = bilevel_stripes(7, 5);
    let image = Image::new(7, 5, ColorModel::Bilevel, pixels.clone()).unwrap();

    let encoded = encode(&image, PnmFormat::PbmAscii).unwrap();
    assert!(encoded.starts_with(b"P1\n7 5\n"));

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.model, ColorModel::Bilevel);
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn pbm_binary_roundtrip() {
    // Width deliberately not a multiple of 8 so rows carry padding bits.
    let pixels = bilevel_stripes(13, 4);
    let image = Image::new(13, 4, ColorModel::Bilevel, pixels.clone()).unwrap();

    let encoded = encode(&image, PnmFormat::PbmBinary).unwrap();
    assert!(encoded.starts_with(b"P4\n13 4\n"));
    // 13 pixels pack into 2 bytes per row
    assert_eq!(encoded.len(), b"P4\n13 4\n".len() + 2 * 4);

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.model, ColorModel::Bilevel);
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn rgb_encodes_as_grayscale_lossily() {
    // Gray targets take the red channel.
    let image = Image::new(2, 1, ColorModel::Rgb, vec![9, 100, 200, 77, 1, 2]).unwrap();

    let encoded = encode(&image, PnmFormat::PgmBinary).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.model, ColorModel::Gray);
    assert_eq!(decoded.pixels(), &[9, 77]);
}

#[test]
fn gray_encodes_as_rgb() {
    // Gray samples fan out into all three channels.
    let image = Image::new(2, 1, ColorModel::Gray, vec![7, 250]).unwrap();

    let encoded = encode(&image, PnmFormat::PpmBinary).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.pixels(), &[7, 7, 7, 250, 250, 250]);
}

#[test]
fn rgb_encodes_as_bilevel() {
    // P1 thresholds on red == 0xFF, P4 on red != 0.
    let image =
        Image::new(3, 1, ColorModel::Rgb, vec![255, 0, 0, 128, 255, 255, 0, 255, 255]).unwrap();

    let plain_encoded = encode(&image, PnmFormat::PbmAscii).unwrap();
    let plain = decode(&plain_encoded).unwrap();
    assert_eq!(plain.pixels(), &[0xFF, 0x00, 0x00]);

    let raw_encoded = encode(&image, PnmFormat::PbmBinary).unwrap();
    let raw = decode(&raw_encoded).unwrap();
    assert_eq!(raw.pixels(), &[0xFF, 0xFF, 0x00]);
}

#[test]
fn image_info_probe() {
    let image = Image::new(1, 2, ColorModel::Rgb, vec![255u8; 6]).unwrap();
    let encoded = encode(&image, PnmFormat::PpmBinary).unwrap();

    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 1);
    assert_eq!(info.height, 2);
    assert_eq!(info.format, PnmFormat::PpmBinary);
    assert_eq!(info.model, ColorModel::Rgb);
}

#[test]
fn header_only_decode_matches_full_decode() {
    for format in [
        PnmFormat::PbmAscii,
        PnmFormat::PbmBinary,
        PnmFormat::PgmAscii,
        PnmFormat::PgmBinary,
        PnmFormat::PpmAscii,
        PnmFormat::PpmBinary,
    ] {
        let pixels = match format.color_model() {
            ColorModel::Bilevel => bilevel_stripes(5, 3),
            ColorModel::Gray => gray_noise(5, 3),
            _ => rgb_checkerboard(5, 3),
        };
        let image = Image::new(5, 3, format.color_model(), pixels).unwrap();
        let encoded = encode(&image, format).unwrap();

        let decoded = decode(&encoded).unwrap();
        let dims = decode_dimensions(&encoded).unwrap();
        assert_eq!(dims, (decoded.width, decoded.height), "{format:?}");
    }
}

#[test]
fn limits_reject_large() {
    let image = Image::new(1, 2, ColorModel::Rgb, vec![255u8; 6]).unwrap();
    let encoded = encode(&image, PnmFormat::PpmBinary).unwrap();

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode();
    match result.unwrap_err() {
        PnmError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn into_owned_works() {
    let image = Image::new(1, 3, ColorModel::Gray, vec![1u8, 2, 3]).unwrap();
    let encoded = encode(&image, PnmFormat::PgmBinary).unwrap();

    let decoded = decode(&encoded).unwrap();
    assert!(decoded.is_borrowed());

    let owned = decoded.into_owned();
    assert!(!owned.is_borrowed());
    assert_eq!(owned.pixels(), &[1, 2, 3]);
}
