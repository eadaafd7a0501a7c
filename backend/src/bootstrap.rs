//! Server bootstrap: bind the process-wide listener on a usable port.
//!
//! The launcher walks forward from the configured starting port: a bind
//! failure caused by another process holding the port moves the attempt to
//! the next port, any other failure is terminal. The walk is a bounded loop
//! with two ceilings (a configurable attempt budget and the end of the u16
//! port space) and fails fast past either.
//!
//! States: Attempting(port) -> Bound(port) on success,
//! Attempting(port) -> Attempting(port + 1) on an occupancy error under the
//! ceilings, Attempting(port) -> Failed(error) otherwise. Bound and Failed
//! are terminal; attempts are strictly sequential, never concurrent.

use std::io;

use thiserror::Error;
use tokio::net::TcpListener;

/// Errors that terminate the bind walk
#[derive(Debug, Error)]
pub enum BindError {
    /// Every port tried was occupied and a ceiling was hit
    #[error("no free port found after {attempts} attempts starting at port {start_port}")]
    Exhausted { start_port: u16, attempts: u32 },

    /// A bind failed for a reason other than port occupancy
    #[error("failed to bind port {port}: {source}")]
    Fatal {
        port: u16,
        attempts: u32,
        #[source]
        source: io::Error,
    },
}

impl BindError {
    /// Number of bind attempts made before the walk terminated
    pub fn attempts(&self) -> u32 {
        match self {
            BindError::Exhausted { attempts, .. } => *attempts,
            BindError::Fatal { attempts, .. } => *attempts,
        }
    }
}

/// A successfully bound listener, owned by the caller
///
/// Dropping the value releases the port; handing `listener` to the accept
/// loop transfers ownership for the lifetime of the server.
#[derive(Debug)]
pub struct BoundListener {
    pub listener: TcpListener,
    pub port: u16,
    pub attempts: u32,
}

/// A bind failure caused by another process already holding the port
fn is_port_occupied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::AddrInUse
}

/// Bind a listener on `start_port`, walking to the next port while the
/// current one is occupied
///
/// Makes at most `max_attempts` attempts (clamped to at least one) and never
/// walks past the end of the u16 port space. Emits a readiness log carrying
/// the bound port on success.
pub async fn start(host: &str, start_port: u16, max_attempts: u32) -> Result<BoundListener, BindError> {
    let max_attempts = max_attempts.max(1);
    let mut port = start_port;
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match TcpListener::bind((host, port)).await {
            Ok(listener) => {
                // Port 0 asks the OS to pick; report what was actually bound
                let port = listener.local_addr().map(|addr| addr.port()).unwrap_or(port);
                tracing::info!(port, attempts, "server listening");
                return Ok(BoundListener {
                    listener,
                    port,
                    attempts,
                });
            }
            Err(err) if is_port_occupied(&err) => {
                if attempts >= max_attempts {
                    tracing::error!(
                        start_port,
                        attempts,
                        "bind attempt budget exhausted, giving up"
                    );
                    return Err(BindError::Exhausted {
                        start_port,
                        attempts,
                    });
                }
                let Some(next) = port.checked_add(1) else {
                    tracing::error!(start_port, attempts, "ran out of ports, giving up");
                    return Err(BindError::Exhausted {
                        start_port,
                        attempts,
                    });
                };
                tracing::warn!(port, next, "port in use, trying next");
                port = next;
            }
            Err(source) => {
                tracing::error!(port, error = %source, "bind failed, not retrying");
                return Err(BindError::Fatal {
                    port,
                    attempts,
                    source,
                });
            }
        }
    }
}
