use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The only indication value with defined client-side semantics: a fully
/// valid signature. Every other indication is an opaque failure label
/// owned by the service.
pub const TOTAL_PASSED: &str = "TOTAL_PASSED";

const SIMPLE_REPORT_KEY: &str = "simpleReport";
const SIGNATURES_KEY: &str = "signatureOrTimestamp";

/// Raw validation report as returned by the service. Kept opaque until
/// [`ValidationReport::interpret`] normalizes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport(pub Value);

/// One signature (or timestamp) entry from the simple report.
///
/// `indication` is the only field the service always provides; an entry
/// without it is a shape error, not a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignatureResult {
    #[serde(default)]
    pub signed_by: Option<String>,
    #[serde(default)]
    pub signing_time: Option<String>,
    pub indication: String,
    #[serde(default)]
    pub sub_indication: Option<String>,
}

/// Outcome of interpreting one report.
///
/// "No signatures at all" is a distinct state, never an empty verdict
/// list, so downstream code cannot confuse it with "signed but invalid".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    NoSignatures,
    Signatures(Vec<Verdict>),
}

/// Per-signature validity verdict, in service order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Verdict {
    /// 1-based position in the report's signature list.
    pub index: usize,
    pub signed_by: Option<String>,
    pub signing_time: Option<String>,
    pub is_valid: bool,
    /// The raw indication, retained whether or not the signature passed.
    pub indication: String,
    /// The subIndication, verbatim, when the signature did not pass.
    pub reason: Option<String>,
}

impl Verdict {
    fn classify(index: usize, sig: SignatureResult) -> Self {
        let is_valid = sig.indication == TOTAL_PASSED;
        let reason = if is_valid { None } else { sig.sub_indication };
        Self {
            index,
            signed_by: sig.signed_by,
            signing_time: sig.signing_time,
            is_valid,
            indication: sig.indication,
            reason,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("validation report is not a JSON object")]
    NotAnObject,
    #[error("simpleReport summary is not a JSON object")]
    SummaryShape,
    #[error("signatureOrTimestamp entries do not match the expected shape")]
    SignatureShape(#[source] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl ValidationReport {
    /// Normalizes the report's shape and classifies every signature.
    ///
    /// Tolerates both layouts the service produces: the summary nested
    /// under `simpleReport` or sitting at the root, and the signature
    /// collection as a single object or an array.
    pub fn interpret(&self) -> Result<Interpretation, ReportError> {
        let root = self.0.as_object().ok_or(ReportError::NotAnObject)?;
        let summary = match root.get(SIMPLE_REPORT_KEY) {
            None | Some(Value::Null) => root,
            Some(nested) => nested.as_object().ok_or(ReportError::SummaryShape)?,
        };

        let entries = match summary.get(SIGNATURES_KEY) {
            None | Some(Value::Null) => return Ok(Interpretation::NoSignatures),
            Some(entries) => entries,
        };
        let results = match serde_json::from_value::<OneOrMany<SignatureResult>>(entries.clone()) {
            Ok(OneOrMany::Many(list)) => list,
            Ok(OneOrMany::One(single)) => vec![single],
            Err(e) => return Err(ReportError::SignatureShape(e)),
        };
        if results.is_empty() {
            return Ok(Interpretation::NoSignatures);
        }

        Ok(Interpretation::Signatures(
            results
                .into_iter()
                .enumerate()
                .map(|(i, sig)| Verdict::classify(i + 1, sig))
                .collect(),
        ))
    }
}
