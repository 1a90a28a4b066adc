use crate::details::icmp::{ChecksumVariant, RawSocketOpener, SequenceNumber};
use crate::details::{EchoResponse, PingResult};
use std::net::IpAddr;
use std::time::Duration;

/// Receive buffer size used unless configured otherwise.
pub const DEFAULT_RECEIVE_BUFFER_SIZE: usize = 100;

#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EchoSessionConfig {
    /// Deadline for the reply. `None` blocks until some datagram arrives.
    /// Deadlines shorter than one microsecond are raised to one microsecond.
    pub timeout: Option<Duration>,
    pub receive_buffer_size: usize,
    pub checksum_variant: ChecksumVariant,
}

impl Default for EchoSessionConfig {
    fn default() -> Self {
        EchoSessionConfig {
            timeout: None,
            receive_buffer_size: DEFAULT_RECEIVE_BUFFER_SIZE,
            checksum_variant: ChecksumVariant::Rfc792,
        }
    }
}

/// Sends echo requests over raw ICMP sockets, one round trip per call.
///
/// Each session numbers its requests starting at 1. Raw sockets need
/// elevated privileges on most systems; without them every ping fails with
/// [`PingErrorKind::SocketCreation`](crate::PingErrorKind::SocketCreation).
///
/// ```no_run
/// let session = ping_rtt::EchoSession::new(ping_rtt::EchoSessionConfig::default());
/// let ip = ping_rtt::resolve("localhost")?;
/// let response = session.ping(ip, 56)?;
/// println!("{:?} bytes in {:?}", response.packet_len, response.time);
/// # Ok::<(), ping_rtt::PingError>(())
/// ```
pub struct EchoSession(crate::details::EchoSession<RawSocketOpener>);

impl EchoSession {
    #[must_use]
    pub fn new(config: EchoSessionConfig) -> Self {
        EchoSession(crate::details::EchoSession::new(config, RawSocketOpener))
    }

    /// One echo round trip to `ip` with `payload_size` zero bytes of payload.
    pub fn ping(&self, ip: IpAddr, payload_size: usize) -> PingResult<EchoResponse> {
        self.0.ping(ip, payload_size)
    }

    /// Sequence number of the most recent request, 0 before the first one.
    #[must_use]
    pub fn last_sequence_number(&self) -> SequenceNumber {
        self.0.last_sequence_number()
    }
}

impl Default for EchoSession {
    fn default() -> Self {
        Self::new(EchoSessionConfig::default())
    }
}
