//! Decoding of JSON string-escape sequences.
//!
//! [`unescape`] takes the raw bytes of one string literal's body (everything
//! between the quotes, exclusive) and produces the decoded byte string.
//! Decoded output is never longer than its escaped form, so the output
//! buffer is reserved once up front.
//!
//! `\uXXXX` escapes are transcoded to UTF-8 by code-point range: one byte up
//! to U+007F, two bytes up to U+07FF, three bytes otherwise. Each escape is
//! transcoded independently: surrogate halves are not paired, so escapes
//! for code points outside the Basic Multilingual Plane decode to byte
//! sequences that are not valid UTF-8. The output type is a byte string for
//! exactly that reason.

use alloc::vec::Vec;

use bstr::BString;

use crate::{
    error::{ErrorSource, SyntaxError},
    reserve,
};

/// Decodes the escaped body of a string literal into a fresh byte string.
///
/// # Errors
///
/// Fails on an unknown escape character, a `\u` escape with fewer than four
/// hex digits, a non-hex digit inside `\uXXXX`, a raw control byte in the
/// body, or allocation failure.
pub(crate) fn unescape(raw: &[u8]) -> Result<BString, ErrorSource> {
    let mut out = Vec::new();
    reserve::grow(&mut out, raw.len())?;

    let mut i = 0;
    while i < raw.len() {
        let b = raw[i];
        if b == b'\\' {
            let Some(&esc) = raw.get(i + 1) else {
                // A trailing backslash would have escaped the closing quote;
                // the scanner reports that as an unterminated string.
                return Err(SyntaxError::UnterminatedString.into());
            };
            match esc {
                b'"' | b'\\' | b'/' => out.push(esc),
                b'b' => out.push(0x08),
                b'f' => out.push(0x0C),
                b'n' => out.push(b'\n'),
                b'r' => out.push(b'\r'),
                b't' => out.push(b'\t'),
                b'u' => {
                    let Some(digits) = raw.get(i + 2..i + 6) else {
                        return Err(SyntaxError::IncompleteUnicodeEscape.into());
                    };
                    let mut code_point: u32 = 0;
                    for &d in digits {
                        let v = hex_val(d)
                            .ok_or(SyntaxError::InvalidUnicodeEscapeChar(d as char))?;
                        code_point = (code_point << 4) | v;
                    }
                    push_code_point(&mut out, code_point);
                    i += 6;
                    continue;
                }
                other => return Err(SyntaxError::InvalidEscape(other as char).into()),
            }
            i += 2;
        } else if b < 0x20 {
            return Err(SyntaxError::UnescapedControl(b).into());
        } else {
            out.push(b);
            i += 1;
        }
    }

    Ok(BString::from(out))
}

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
fn hex_val(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'a'..=b'f' => Some(u32::from(b - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(b - b'A') + 10),
        _ => None,
    }
}

/// Appends a code point's UTF-8 bytes. The code point comes from four hex
/// digits, so it never exceeds U+FFFF and never needs a fourth byte.
/// Surrogate halves pass through unpaired.
fn push_code_point(out: &mut Vec<u8>, cp: u32) {
    if cp <= 0x007F {
        out.push(cp as u8);
    } else if cp <= 0x07FF {
        out.push(0xC0 | (cp >> 6) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else {
        out.push(0xE0 | (cp >> 12) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    }
}
