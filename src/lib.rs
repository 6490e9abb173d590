//! # zenpnm
//!
//! PNM (P1–P6) image format decoder and encoder.
//!
//! ## Zero-Copy Decoding
//!
//! For raw PGM/PPM files with maxval=255 (the common case), decoding returns
//! a borrowed slice into the input buffer — no allocation or copy needed.
//! Variants that require transformation (ASCII sample parsing, bit
//! unpacking, maxval rescaling) allocate as needed.
//!
//! ## Supported Formats
//!
//! - **P1** (plain PBM) — ASCII bilevel
//! - **P2** (plain PGM) — ASCII grayscale
//! - **P3** (plain PPM) — ASCII RGB
//! - **P4** (raw PBM) — packed binary bilevel
//! - **P5** (raw PGM) — binary grayscale
//! - **P6** (raw PPM) — binary RGB
//!
//! Headers are ASCII tokens in every variant, binary ones included, and
//! `#`-to-end-of-line comments may appear anywhere whitespace may.
//!
//! ## Non-Goals
//!
//! - PAM (P7) and PFM — arbitrary-channel and floating-point extensions
//! - Maxval above 255 (16-bit samples)
//! - Color management (use zencodecs for that)
//!
//! ## Credits
//!
//! The crate grew out of the PNM support in
//! [zenbitmaps](https://github.com/imazen/zenbitmaps), which in turn draws
//! from [zune-ppm](https://github.com/etemesi254/zune-image) by Caleb
//! Etemesi (MIT/Apache-2.0/Zlib licensed).
//!
//! ## Usage
//!
//! ```
//! use zenpnm::{decode, decode_dimensions, encode, PnmFormat};
//!
//! let data = b"P6\n2 1\n255\n\x10\x20\x30\x40\x50\x60";
//!
//! // Probe without decoding
//! assert_eq!(decode_dimensions(data)?, (2, 1));
//!
//! // Decode (zero-copy when possible)
//! let image = decode(data)?;
//! assert!(image.is_borrowed());
//!
//! // Re-encode as ASCII PPM
//! let plain = encode(&image, PnmFormat::PpmAscii)?;
//! assert_eq!(decode(&plain)?.pixels(), image.pixels());
//! # Ok::<(), zenpnm::PnmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitset;
mod decode;
mod encode;
mod error;
mod image;
mod info;
mod limits;
mod reader;

// Re-exports
pub use decode::{DecodeRequest, decode, decode_dimensions};
pub use encode::{EncodeRequest, encode};
pub use error::PnmError;
pub use image::{ColorModel, Image};
pub use info::{ImageInfo, PnmFormat};
pub use limits::Limits;
