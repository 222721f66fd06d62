//! TLS configuration for the backend HTTP client.
//!
//! Trusts the Mozilla root set shipped with `webpki-roots`, optionally
//! extended with certificates from a PEM bundle (self-hosted backends).

use std::path::Path;

use rustls::ClientConfig;

use crate::Result;

/// Builds a [`ClientConfig`] with the webpki roots plus any certificates
/// found in `ca_file`.
///
/// # Errors
///
/// Returns [`OrderDeskError::Tls`](crate::OrderDeskError::Tls) if the PEM
/// file cannot be read, cannot be parsed, or holds no certificates.
pub fn build_tls_config(ca_file: Option<&Path>) -> Result<ClientConfig> {
    let mut root_store = rustls::RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    if let Some(path) = ca_file {
        let pem = std::fs::read(path).map_err(|e| {
            crate::OrderDeskError::Tls(format!("failed to read CA file {}: {e}", path.display()))
        })?;

        let certs: Vec<_> = rustls_pemfile::certs(&mut &pem[..])
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| crate::OrderDeskError::Tls(format!("failed to parse CA PEM: {e}")))?;

        if certs.is_empty() {
            return Err(crate::OrderDeskError::Tls(format!(
                "no certificates found in {}",
                path.display()
            )));
        }

        let (added, ignored) = root_store.add_parsable_certificates(certs);
        tracing::info!(added, ignored, "loaded extra CA certificates");
    }

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(config)
}
