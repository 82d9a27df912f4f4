use crate::document::EncodedDocument;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One signature-validation request, as posted to the service.
///
/// Unset optional fields are serialized as explicit `null`s so the
/// service applies its own defaults; nothing is hard-coded client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub signed_document: EncodedDocument,
    /// Only non-empty for detached signatures, where the signed content
    /// travels separately from the signature.
    pub original_documents: Vec<EncodedDocument>,
    pub policy: Option<String>,
    /// Restricts validation to one signature; `None` validates all.
    pub signature_id: Option<String>,
    pub level: Option<ValidationLevel>,
}

impl ValidationRequest {
    /// A request that validates every signature under the service's
    /// default policy and level.
    pub fn new(signed_document: EncodedDocument) -> Self {
        Self {
            signed_document,
            original_documents: Vec::new(),
            policy: None,
            signature_id: None,
            level: None,
        }
    }

    pub fn with_original_documents(mut self, documents: Vec<EncodedDocument>) -> Self {
        self.original_documents = documents;
        self
    }

    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    pub fn with_signature_id(mut self, signature_id: impl Into<String>) -> Self {
        self.signature_id = Some(signature_id.into());
        self
    }

    pub fn with_level(mut self, level: ValidationLevel) -> Self {
        self.level = Some(level);
        self
    }
}

/// How deep the service should validate: signatures only, or also
/// timestamps, revocation freshness and archival material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationLevel {
    BasicSignatures,
    Timestamps,
    LongTermData,
    ArchivalData,
}

#[derive(Debug, Error)]
#[error("unknown validation level: {0} (expected basic-signatures, timestamps, long-term-data or archival-data)")]
pub struct ParseLevelError(String);

impl FromStr for ValidationLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "BASIC_SIGNATURES" => Ok(Self::BasicSignatures),
            "TIMESTAMPS" => Ok(Self::Timestamps),
            "LONG_TERM_DATA" => Ok(Self::LongTermData),
            "ARCHIVAL_DATA" => Ok(Self::ArchivalData),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
