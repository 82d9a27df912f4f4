use anyhow::{Context, Result};
use clap::Parser;
use sigtrust_client::{ClientConfig, ClientError, ValidationClient};
use sigtrust_core::{EncodedDocument, Interpretation, ValidationLevel, ValidationRequest, Verdict};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_ENDPOINT: &str = "http://localhost:8080/services/rest/validation/validateSignature";

#[derive(Debug, Parser)]
#[command(
    name = "sigtrustctl",
    version,
    about = "Validates document signatures against a DSS web service"
)]
struct Cli {
    /// Path to the signed document to validate.
    document: PathBuf,

    /// Validation service endpoint URL.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Validation policy identifier. Service default when omitted.
    #[arg(long)]
    policy: Option<String>,

    /// Validate only the signature with this id instead of all of them.
    #[arg(long)]
    signature_id: Option<String>,

    /// Validation level: basic-signatures, timestamps, long-term-data or
    /// archival-data. Service default when omitted.
    #[arg(long)]
    level: Option<ValidationLevel>,

    /// Original document for a detached signature. Repeatable, in
    /// signature order.
    #[arg(long = "original", value_name = "FILE")]
    originals: Vec<PathBuf>,

    /// Whole-request timeout in seconds. No deadline when omitted, so
    /// large documents are never cut off mid-transfer.
    #[arg(long)]
    timeout_seconds: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<()> {
    let document = encode_document(&cli.document).await?;
    let mut originals = Vec::with_capacity(cli.originals.len());
    for path in &cli.originals {
        originals.push(encode_document(path).await?);
    }

    let mut request = ValidationRequest::new(document).with_original_documents(originals);
    if let Some(policy) = cli.policy {
        request = request.with_policy(policy);
    }
    if let Some(signature_id) = cli.signature_id {
        request = request.with_signature_id(signature_id);
    }
    if let Some(level) = cli.level {
        request = request.with_level(level);
    }

    let client = ValidationClient::new(ClientConfig {
        endpoint: cli.endpoint.clone(),
        timeout: cli.timeout_seconds.map(Duration::from_secs),
    })?;

    info!("submitting {} to {}", cli.document.display(), cli.endpoint);
    let report = match client.validate(&request).await {
        Ok(report) => report,
        Err(ClientError::Service { status, body }) => {
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .and_then(|v| serde_json::to_string_pretty(&v))
                .unwrap_or(body);
            anyhow::bail!("validation service returned HTTP {status}:\n{detail}");
        }
        Err(e) => return Err(e.into()),
    };

    match report
        .interpret()
        .context("interpreting the validation report")?
    {
        Interpretation::NoSignatures => {
            println!("No signatures found in the document.");
        }
        Interpretation::Signatures(verdicts) => {
            for verdict in &verdicts {
                print_verdict(verdict);
            }
        }
    }
    Ok(())
}

async fn encode_document(path: &Path) -> Result<EncodedDocument> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(EncodedDocument::from_bytes(&bytes, document_name(path)))
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string()
}

fn print_verdict(verdict: &Verdict) {
    println!("Signature #{}:", verdict.index);
    println!(
        "  Signed by:    {}",
        verdict.signed_by.as_deref().unwrap_or("(unknown)")
    );
    println!(
        "  Signing time: {}",
        verdict.signing_time.as_deref().unwrap_or("(unknown)")
    );
    if verdict.is_valid {
        println!("  Status:       VALID ({})", verdict.indication);
    } else {
        println!("  Status:       INVALID ({})", verdict.indication);
        if let Some(reason) = &verdict.reason {
            println!("  Reason:       {reason}");
        }
    }
}
