/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Dimension limits are checked as
/// soon as the header is parsed, the allocation limit before pixel memory is
/// reserved.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes allocated for the decoded pixel buffer.
    pub max_alloc_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), crate::PnmError> {
        if let Some(max_w) = self.max_width
            && width > max_w
        {
            return Err(crate::PnmError::LimitExceeded(alloc::format!(
                "width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height
            && height > max_h
        {
            return Err(crate::PnmError::LimitExceeded(alloc::format!(
                "height {height} exceeds limit {max_h}"
            )));
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(crate::PnmError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn check_alloc(&self, bytes: usize) -> Result<(), crate::PnmError> {
        if let Some(max_alloc) = self.max_alloc_bytes
            && bytes as u64 > max_alloc
        {
            return Err(crate::PnmError::LimitExceeded(alloc::format!(
                "allocation of {bytes} bytes exceeds limit {max_alloc}"
            )));
        }
        Ok(())
    }
}
