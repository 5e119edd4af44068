//! Decoding of raw dictionary values into display text.
//!
//! Translation files written for legacy toolchains store non-ASCII characters
//! as backslash escapes (`\u4f60`). Turning every backslash into a percent sign
//! lets a single legacy URI-unescape pass handle both `\uXXXX` and `%XX` forms.

/// Decode a raw dictionary value into the text shown to the user.
///
/// Every `\` becomes `%`, then legacy unescape rules apply:
/// - `%uXXXX` produces the UTF-16 code unit `XXXX`
/// - `%XX` produces the code unit `0x00XX`
/// - any other `%` is kept as-is
///
/// Decoding never fails. Surrogate pairs are joined; a lone surrogate is
/// replaced with U+FFFD since a Rust string cannot hold it.
///
/// # Examples
///
/// ```
/// use fine_i18n::core::decode;
///
/// assert_eq!(decode("Hello"), "Hello");
/// assert_eq!(decode(r"\u4f60\u597d"), "你好");
/// assert_eq!(decode(r"a\b"), "a%b");
/// assert_eq!(decode("100%"), "100%");
/// ```
pub fn decode(raw: &str) -> String {
    if !raw.contains(['\\', '%']) {
        return raw.to_string();
    }

    let chars: Vec<char> = raw
        .chars()
        .map(|c| if c == '\\' { '%' } else { c })
        .collect();
    let mut units: Vec<u16> = Vec::with_capacity(chars.len());
    let mut buf = [0u16; 2];
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '%' {
            if chars.get(i + 1) == Some(&'u')
                && let Some(unit) = hex_unit(&chars, i + 2, 4)
            {
                units.push(unit);
                i += 6;
                continue;
            }
            if let Some(unit) = hex_unit(&chars, i + 1, 2) {
                units.push(unit);
                i += 3;
                continue;
            }
        }
        units.extend_from_slice(c.encode_utf16(&mut buf));
        i += 1;
    }

    String::from_utf16_lossy(&units)
}

/// Read `len` hex digits starting at `start` as one UTF-16 code unit.
fn hex_unit(chars: &[char], start: usize, len: usize) -> Option<u16> {
    let digits = chars.get(start..start + len)?;
    digits.iter().try_fold(0u16, |acc, c| {
        c.to_digit(16).map(|d| (acc << 4) | d as u16)
    })
}
