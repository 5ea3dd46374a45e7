//! Certificate inspector
//!
//! Opens a TLS connection to a domain, takes the leaf certificate the server
//! presents, and reads its not-after instant. Any DNS, TCP, or TLS failure is
//! reported as an absent certificate rather than an error.

use crate::config::CheckSettings;
use crate::models::{AbsentReason, CertificateStatus};
use crate::utils::InspectError;
use chrono::{DateTime, TimeZone, Utc};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, ClientConnection, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::io::ErrorKind;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use x509_parser::prelude::*;

/// Anything that can report the certificate status of a domain
pub trait CertificateSource {
    fn inspect(&self, domain: &str) -> CertificateStatus;
}

/// A certificate verifier that accepts any certificate.
/// Used when untrusted certificates should still be classified by expiry.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Connection parameters for the inspector
#[derive(Debug, Clone)]
pub struct InspectorSettings {
    pub port: u16,
    pub timeout: Duration,
    /// When false, certificates that fail trust verification are still read
    pub verify_certificates: bool,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            port: 443,
            timeout: Duration::from_secs(10),
            verify_certificates: true,
        }
    }
}

impl From<&CheckSettings> for InspectorSettings {
    fn from(check: &CheckSettings) -> Self {
        Self {
            port: check.port,
            timeout: check.timeout(),
            verify_certificates: check.verify_certificates,
        }
    }
}

/// Retrieves certificate expiry over a blocking TLS connection
pub struct CertificateInspector {
    settings: InspectorSettings,
    config: Arc<ClientConfig>,
}

impl CertificateInspector {
    /// Create a new inspector with the given settings
    pub fn new(settings: InspectorSettings) -> Self {
        // Needed when more than one rustls provider is compiled in
        let _ = rustls::crypto::ring::default_provider().install_default();

        let config = if settings.verify_certificates {
            let root_store =
                rustls::RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
            ClientConfig::builder()
                .with_root_certificates(root_store)
                .with_no_client_auth()
        } else {
            ClientConfig::builder()
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
                .with_no_client_auth()
        };

        Self {
            settings,
            config: Arc::new(config),
        }
    }

    /// Connect to `domain` and return the leaf certificate's not-after instant
    pub fn fetch_expiry(&self, domain: &str) -> Result<DateTime<Utc>, InspectError> {
        let address = format!("{}:{}", domain, self.settings.port);
        let timeout = self.settings.timeout;

        let socket_addrs: Vec<SocketAddr> = address
            .to_socket_addrs()
            .map_err(|e| InspectError::Resolve {
                domain: domain.to_string(),
                message: e.to_string(),
            })?
            .collect();
        if socket_addrs.is_empty() {
            return Err(InspectError::Resolve {
                domain: domain.to_string(),
                message: "no addresses found".to_string(),
            });
        }

        let mut sock = connect_any(&socket_addrs, timeout, &address)?;
        sock.set_read_timeout(Some(timeout))
            .and_then(|_| sock.set_write_timeout(Some(timeout)))
            .map_err(|e| connect_error(e, &address))?;

        let server_name: ServerName<'static> =
            domain
                .to_string()
                .try_into()
                .map_err(|_| InspectError::InvalidServerName {
                    domain: domain.to_string(),
                })?;

        let mut conn = ClientConnection::new(Arc::clone(&self.config), server_name).map_err(
            |e| InspectError::Handshake {
                domain: domain.to_string(),
                message: e.to_string(),
            },
        )?;

        while conn.is_handshaking() {
            conn.complete_io(&mut sock).map_err(|e| match e.kind() {
                ErrorKind::WouldBlock | ErrorKind::TimedOut => InspectError::Timeout {
                    address: address.clone(),
                },
                _ => InspectError::Handshake {
                    domain: domain.to_string(),
                    message: e.to_string(),
                },
            })?;
        }
        debug!("Handshake with {} complete", domain);

        let leaf = conn
            .peer_certificates()
            .and_then(|certs| certs.first())
            .ok_or_else(|| InspectError::NoPeerCertificate {
                domain: domain.to_string(),
            })?;

        expiry_from_der(leaf.as_ref())
    }
}

impl CertificateSource for CertificateInspector {
    fn inspect(&self, domain: &str) -> CertificateStatus {
        match self.fetch_expiry(domain) {
            Ok(expires_at) => CertificateStatus::Valid { expires_at },
            Err(e) => {
                warn!("Could not retrieve certificate for {}: {}", domain, e);
                CertificateStatus::Absent {
                    reason: AbsentReason::from(&e),
                }
            }
        }
    }
}

/// Try each resolved address in order; the error from the last attempt is
/// returned when none accepts.
fn connect_any(
    socket_addrs: &[SocketAddr],
    timeout: Duration,
    address: &str,
) -> Result<TcpStream, InspectError> {
    let mut last_error = None;
    for socket_addr in socket_addrs {
        debug!("Connecting to {} ({})", address, socket_addr);
        match TcpStream::connect_timeout(socket_addr, timeout) {
            Ok(sock) => return Ok(sock),
            Err(e) => {
                debug!("Connection to {} failed: {}", socket_addr, e);
                last_error = Some(connect_error(e, address));
            }
        }
    }

    Err(last_error.unwrap_or_else(|| InspectError::Resolve {
        domain: address.to_string(),
        message: "no addresses found".to_string(),
    }))
}

fn connect_error(err: std::io::Error, address: &str) -> InspectError {
    match err.kind() {
        ErrorKind::TimedOut | ErrorKind::WouldBlock => InspectError::Timeout {
            address: address.to_string(),
        },
        _ => InspectError::Connect {
            address: address.to_string(),
            message: err.to_string(),
        },
    }
}

/// Read the not-after instant of a DER-encoded certificate
pub fn expiry_from_der(der: &[u8]) -> Result<DateTime<Utc>, InspectError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| InspectError::Parse {
        message: format!("{:?}", e),
    })?;

    let timestamp = cert.validity().not_after.timestamp();
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| InspectError::Parse {
            message: "Invalid not-after timestamp in certificate".to_string(),
        })
}
