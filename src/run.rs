//! One-shot update sequencing.

use crate::error::{Result, UpdateError};
use crate::progress::{closing_banner, opening_banner, ProgressSink};
use crate::resolver::PublicIpResolver;
use crate::updater::{Credentials, OutcomeKind, UpdateClient, UpdateOutcome};

/// Options for a single update run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Narrate each phase through the progress sink.
    pub verbose: bool,
}

/// Resolve the public IP, submit the update, and report progress.
///
/// The two network calls run strictly in order; if discovery fails, the
/// update endpoint is never contacted. An unrecognized response body is
/// returned as [`UpdateError::UnrecognizedResponse`] so the CLI exits
/// nonzero; library callers wanting the raw outcome can use
/// [`UpdateClient::submit`] directly.
pub async fn run_update(
    resolver: &PublicIpResolver,
    updater: &UpdateClient,
    credentials: &Credentials,
    hostname: &str,
    options: &RunOptions,
    sink: &mut dyn ProgressSink,
) -> Result<UpdateOutcome> {
    sink.line(&opening_banner());

    if options.verbose {
        sink.line("Getting public ip address...");
    }

    let public_ip = resolver.resolve().await?;

    if options.verbose {
        sink.line(&format!("Public ip address: {}", public_ip));
        sink.line("Building request...");
        sink.line(&format!(
            "URL: {:?}",
            updater.update_url(hostname, &public_ip)
        ));
        sink.line("Request built");
        sink.line("Sending request to no-ip...");
    }

    let outcome = updater.submit(credentials, hostname, &public_ip).await?;

    if options.verbose {
        sink.line(&format!("Response body: {:?}", outcome.body));
    }

    match outcome.kind {
        OutcomeKind::Updated => sink.line("Request successful. IP updated!"),
        OutcomeKind::Unchanged => sink.line("Request successful. No change."),
        OutcomeKind::Unrecognized => {
            return Err(UpdateError::UnrecognizedResponse {
                status: outcome.status,
                body: outcome.body,
            });
        }
    }

    sink.line(&closing_banner());
    Ok(outcome)
}
