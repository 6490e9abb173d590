#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpnm::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding in the same variant and decoding
    // again must produce identical pixels
    let Ok(image) = decode(data) else {
        return;
    };
    let Ok(info) = ImageInfo::from_bytes(data) else {
        return;
    };

    // Plain-PBM samples beyond 0/1 decode to non-canonical bilevel bytes
    // that a re-encode thresholds away; skip those.
    if image.model == ColorModel::Bilevel
        && image.pixels().iter().any(|&p| p != 0x00 && p != 0xFF)
    {
        return;
    }

    let Ok(reencoded) = encode(&image, info.format) else {
        return;
    };
    let Ok(decoded2) = decode(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(image.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(image.width, decoded2.width);
    assert_eq!(image.height, decoded2.height);
});
