#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Sends one ICMP echo request over a raw socket and measures the time until
//! the next datagram arrives on that socket.

pub use details::icmp::{
    build_request, checksum, checksum_legacy, ChecksumVariant, EchoRequest, IcmpHeader, SequenceNumber, ECHO_REPLY,
    ECHO_REQUEST, HEADER_SIZE,
};
pub use details::{resolve, EchoResponse, GenericError, PingError, PingErrorKind, PingResult, ReceiveIncomplete};
pub use echo_session::{EchoSession, EchoSessionConfig, DEFAULT_RECEIVE_BUFFER_SIZE};

mod details;
mod echo_session;
