use crate::details::icmp::{build_request, OpenSocket, SequenceCounter, SequenceNumber, TSocket};
use crate::details::{EchoResponse, PingError, PingErrorKind, PingResult, ReceiveIncomplete};
use crate::EchoSessionConfig;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};

// The kernel reads a zero SO_RCVTIMEO as "no timeout".
const MIN_READ_TIMEOUT: Duration = Duration::from_micros(1);

pub(crate) struct EchoSession<O> {
    config: EchoSessionConfig,
    opener: O,
    sequence_counter: SequenceCounter,
}

impl<O> EchoSession<O>
where
    O: OpenSocket,
{
    pub(crate) fn new(config: EchoSessionConfig, opener: O) -> Self {
        EchoSession { config, opener, sequence_counter: SequenceCounter::new() }
    }

    pub(crate) fn last_sequence_number(&self) -> SequenceNumber {
        self.sequence_counter.current()
    }

    pub(crate) fn ping(&self, ip: IpAddr, payload_size: usize) -> PingResult<EchoResponse> {
        // (1) Next sequence number and request.
        let sequence_number = self.sequence_counter.increment();
        let request = build_request(payload_size, sequence_number, self.config.checksum_variant);

        // (2) Socket for this round trip only.
        let socket = self
            .opener
            .open(ip, read_timeout(self.config.timeout))
            .map_err(|e| PingError::from_io(PingErrorKind::SocketCreation, &e))?;

        // (3) Send.
        let addr: socket2::SockAddr = SocketAddr::new(ip, 0).into();
        let start_time = Instant::now();
        socket
            .send_to(request.as_bytes(), &addr)
            .map_err(|e| PingError::from_io(PingErrorKind::Transmit, &e))?;
        tracing::trace!(%ip, %sequence_number, len = request.len(), "echo request sent");
        drop(request);

        // (4) Receive whatever arrives first.
        let mut packet = vec![0u8; self.config.receive_buffer_size];
        let recv_result = socket.recv(&mut packet);
        let time = start_time.elapsed();
        drop(socket);

        let (packet_len, truncated) = match recv_result {
            Ok((n, truncated)) => {
                packet.truncate(n);
                tracing::trace!(%ip, n, truncated, ?time, "datagram received");
                (Ok(n), truncated)
            }
            Err(e) if self.config.timeout.is_some() && is_timeout(&e) => {
                tracing::debug!(%ip, %sequence_number, "no datagram before deadline");
                return Err(PingError::from_io(PingErrorKind::Timeout, &e));
            }
            Err(e) => {
                tracing::debug!(%ip, error = %e, "receive failed");
                packet.clear();
                (Err(ReceiveIncomplete::from(e)), false)
            }
        };

        Ok(EchoResponse { target: ip, packet, packet_len, truncated, time })
    }
}

fn read_timeout(timeout: Option<Duration>) -> Option<Duration> {
    timeout.map(|timeout| timeout.max(MIN_READ_TIMEOUT))
}

fn is_timeout(error: &io::Error) -> bool {
    matches!(error.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut)
}
