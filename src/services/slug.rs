use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Decode a slug taken from a URL path. Arabic slugs arrive percent-encoded.
///
/// Malformed input (escapes that do not decode to UTF-8) is returned as-is,
/// which then simply fails to match any row.
pub fn decode_slug(raw: &str) -> Cow<'_, str> {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => {
            tracing::debug!("slug is not valid percent-encoded UTF-8, matching raw: {raw}");
            Cow::Borrowed(raw)
        }
    }
}

/// WHERE clause matching either locale's slug against `$1`.
pub const SLUG_MATCH: &str = "(slug_ar = $1 OR slug_en = $1)";
