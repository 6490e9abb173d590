#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Full decode and header-only probe — must never panic
    let _ = zenpnm::decode(data);
    let _ = zenpnm::decode_dimensions(data);
});
