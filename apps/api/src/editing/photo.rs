use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Encodes an uploaded image as a self-describing `data:` URL for `photoUrl`.
pub fn encode_data_url(content_type: Option<&str>, data: &Bytes) -> String {
    let content_type = content_type
        .filter(|ct| !ct.is_empty())
        .unwrap_or(FALLBACK_CONTENT_TYPE);
    format!("data:{content_type};base64,{}", BASE64.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_png_bytes() {
        let data = Bytes::from_static(&[0x89, b'P', b'N', b'G']);
        assert_eq!(encode_data_url(Some("image/png"), &data), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_missing_content_type_falls_back() {
        let url = encode_data_url(None, &Bytes::from_static(b"hi"));
        assert_eq!(url, "data:application/octet-stream;base64,aGk=");
    }
}
