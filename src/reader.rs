//! Tokenizer for the ASCII portions of a PNM stream.
//!
//! Headers are whitespace-delimited ASCII tokens in every variant, binary
//! payloads included, so all decoding starts here.

use crate::error::PnmError;

/// PNM whitespace: space, TAB, LF, VT, FF, CR.
///
/// Note VT (0x0B), which [`u8::is_ascii_whitespace`] does not include.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Comment terminator: LF or CR.
fn is_newline(b: u8) -> bool {
    matches!(b, b'\n' | b'\r')
}

/// Cursor over the input stream of one decode call.
pub(crate) struct TokenReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TokenReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if !is_space(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Next whitespace-delimited token.
    ///
    /// `#` starts a comment running to the end of the line; comment bytes
    /// never contribute to a token. The delimiting whitespace is left
    /// unconsumed so the caller decides how the payload boundary is handled.
    pub(crate) fn next_token(&mut self) -> Result<&'a [u8], PnmError> {
        loop {
            self.skip_whitespace();
            if self.pos >= self.data.len() {
                return Err(PnmError::MalformedToken(
                    "unexpected end of input while reading token".into(),
                ));
            }

            let start = self.pos;
            let mut end = self.pos;
            let mut comment = false;
            while let Some(&b) = self.data.get(self.pos) {
                if b == b'#' {
                    comment = true;
                } else if (comment && is_newline(b)) || (!comment && is_space(b)) {
                    break;
                } else if !comment {
                    end = self.pos + 1;
                }
                self.pos += 1;
            }

            // A comment-only stretch collects nothing; go look again.
            if end > start {
                return Ok(&self.data[start..end]);
            }
        }
    }

    /// Next token parsed as a base-10 unsigned integer.
    pub(crate) fn next_u32(&mut self) -> Result<u32, PnmError> {
        let token = self.next_token()?;
        let text = core::str::from_utf8(token).map_err(|_| {
            PnmError::MalformedToken("non-ASCII bytes where a number was expected".into())
        })?;
        text.parse::<u32>().map_err(|_| {
            PnmError::MalformedToken(alloc::format!("expected unsigned integer, got {text:?}"))
        })
    }

    /// Consume the single whitespace byte separating the header from a
    /// binary payload.
    pub(crate) fn skip_separator(&mut self) -> Result<(), PnmError> {
        match self.data.get(self.pos) {
            Some(&b) if is_space(b) => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(PnmError::InvalidHeader(
                "missing whitespace between header and pixel data".into(),
            )),
            None => Err(PnmError::UnexpectedEof),
        }
    }

    /// Exact-length binary read, no whitespace interpretation.
    pub(crate) fn read_raw(&mut self, n: usize) -> Result<&'a [u8], PnmError> {
        let end = self.pos.checked_add(n).ok_or(PnmError::UnexpectedEof)?;
        let bytes = self.data.get(self.pos..end).ok_or(PnmError::UnexpectedEof)?;
        self.pos = end;
        Ok(bytes)
    }
}
