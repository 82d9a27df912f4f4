use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

/// A document payload in the form the validation service accepts:
/// base64 content plus a file name, with the digest algorithm left to
/// the service unless explicitly pinned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EncodedDocument {
    /// Standard base64 of the raw file content.
    pub bytes: String,
    /// Unset by default; the service derives it from the signature.
    pub digest_algorithm: Option<DigestAlgorithm>,
    /// File base name, used by the service for format detection.
    pub name: String,
}

impl EncodedDocument {
    /// Encodes raw file content under the given name.
    pub fn from_bytes(content: &[u8], name: impl Into<String>) -> Self {
        Self {
            bytes: BASE64.encode(content),
            digest_algorithm: None,
            name: name.into(),
        }
    }

    /// Recovers the original raw content from the base64 payload.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.bytes)
    }
}

/// Digest identifiers the validation service recognises on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DigestAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}
