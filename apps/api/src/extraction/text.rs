/// Decodes a plain-text upload. A leading UTF-8 byte order mark is dropped.
pub fn decode_utf8(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    std::str::from_utf8(bytes).ok().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_utf8(b"\xEF\xBB\xBFpython").as_deref(), Some("python"));
    }

    #[test]
    fn test_decode_empty_is_empty() {
        assert_eq!(decode_utf8(b"").as_deref(), Some(""));
    }
}
