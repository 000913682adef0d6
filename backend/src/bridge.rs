use sqldaily::domain::{Resolution, ResolveError, TipDate, TipResolver};
use sqldaily::utils::error_chain_fmt;
use std::io::Write;

#[derive(thiserror::Error)]
pub enum BridgeError {
    #[error("Error reading tips file")]
    Resolve(#[from] ResolveError),
    #[error("Failed to write the tip to stdout")]
    Output(#[from] std::io::Error),
}

impl std::fmt::Debug for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Writes the admin tip for `date` to `out`, followed by a newline.
/// Writes nothing when the scraper should run instead.
///
/// A `date` that is not `YYYY-MM-DD` cannot match any stored tip, so it
/// resolves to no admin tip rather than an error.
#[tracing::instrument(name = "Looking up the admin tip", skip(resolver, out))]
pub async fn write_admin_tip(
    resolver: &TipResolver,
    date: &str,
    out: &mut impl Write,
) -> Result<Resolution, BridgeError> {
    let date = match TipDate::parse(date) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!(error.message = %e, "No admin tip can match this date");
            return Ok(Resolution::NoAdminTip);
        }
    };
    let resolution = resolver.resolve_for_date(date).await?;

    if let Resolution::AdminTip(content) = &resolution {
        writeln!(out, "{}", content.as_ref())?;
        out.flush()?;
    }

    Ok(resolution)
}
