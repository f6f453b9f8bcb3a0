//! Camera frame payloads: the data-URI envelope sent by robot controllers.
//!
//! Controllers encode each camera frame as `data:image/png;base64,<payload>`
//! and deliver it as window text. The dispatcher only looks at the prefix;
//! parsing the envelope is for diagnostics and tooling, and the image bytes
//! are never decoded into pixels here.

use base64::Engine;

/// Prefix that marks a message as an image payload.
pub const DATA_IMAGE_PREFIX: &str = "data:image";

/// True when the message carries an image data URI.
pub fn is_image_message(message: &str) -> bool {
    message.starts_with(DATA_IMAGE_PREFIX)
}

/// Encode a PNG image as the data URI the window renders.
pub fn png_data_uri(png: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(png);
    format!("data:image/png;base64,{}", b64)
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("not a data uri")]
    NotDataUri,
    #[error("missing base64 marker")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Payload(#[from] base64::DecodeError),
}

/// A parsed image data URI: media type and decoded payload bytes.
#[derive(Debug, Clone)]
pub struct DataUri {
    pub media_type: String,
    pub payload: Vec<u8>,
}

impl DataUri {
    /// Parse `data:<media type>;base64,<payload>`.
    pub fn parse(s: &str) -> Result<Self, FrameError> {
        let rest = s.strip_prefix("data:").ok_or(FrameError::NotDataUri)?;
        let (header, payload) = rest.split_once(',').ok_or(FrameError::NotDataUri)?;
        let media_type = header.strip_suffix(";base64").ok_or(FrameError::NotBase64)?;
        let payload = base64::engine::general_purpose::STANDARD.decode(payload)?;
        Ok(Self {
            media_type: media_type.to_string(),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_check_matches_image_messages_only() {
        assert!(is_image_message("data:image/png;base64,AAA"));
        assert!(is_image_message("data:image"));
        assert!(!is_image_message("Hello data:image"));
        assert!(!is_image_message("data:text/plain;base64,AAA"));
        assert!(!is_image_message(""));
    }

    #[test]
    fn parse_agrees_with_the_encoder() {
        let uri = png_data_uri(&[0x89, 0x50, 0x4e, 0x47]);
        let parsed = DataUri::parse(&uri).expect("parse");
        assert_eq!(parsed.media_type, "image/png");
        assert_eq!(parsed.payload, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[test]
    fn parse_rejects_non_data_uris() {
        assert!(matches!(
            DataUri::parse("hello"),
            Err(FrameError::NotDataUri)
        ));
        assert!(matches!(
            DataUri::parse("data:image/png"),
            Err(FrameError::NotDataUri)
        ));
        assert!(matches!(
            DataUri::parse("data:image/png,AAA"),
            Err(FrameError::NotBase64)
        ));
        assert!(matches!(
            DataUri::parse("data:image/png;base64,***"),
            Err(FrameError::Payload(_))
        ));
    }
}
