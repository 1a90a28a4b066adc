use std::{error::Error, fmt, io};

pub type GenericError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PingErrorKind {
    /// The host name did not resolve to any address.
    Resolution,
    /// The raw socket could not be opened, usually for lack of privileges.
    SocketCreation,
    /// The echo request could not be sent.
    Transmit,
    /// No datagram arrived before the configured deadline.
    Timeout,
}

impl fmt::Display for PingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PingErrorKind::Resolution => "resolution",
            PingErrorKind::SocketCreation => "socket creation",
            PingErrorKind::Transmit => "transmit",
            PingErrorKind::Timeout => "timeout",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct PingError {
    pub kind: PingErrorKind,
    pub message: String,
    pub io_kind: Option<io::ErrorKind>,
}

impl PingError {
    pub(crate) fn new(kind: PingErrorKind, message: impl Into<String>) -> Self {
        PingError { kind, message: message.into(), io_kind: None }
    }

    pub(crate) fn from_io(kind: PingErrorKind, error: &io::Error) -> Self {
        PingError { kind, message: error.to_string(), io_kind: Some(error.kind()) }
    }

    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.kind == PingErrorKind::SocketCreation && self.io_kind == Some(io::ErrorKind::PermissionDenied)
    }
}

impl fmt::Display for PingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "PingError({})", self.kind)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl Error for PingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

/// Failure of the single receive call of a ping. Reported inside the
/// response instead of aborting the ping.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReceiveIncomplete {
    pub kind: io::ErrorKind,
    pub message: String,
}

impl From<io::Error> for ReceiveIncomplete {
    fn from(error: io::Error) -> Self {
        ReceiveIncomplete { kind: error.kind(), message: error.to_string() }
    }
}

impl fmt::Display for ReceiveIncomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "receive incomplete: {}", self.message)
    }
}

impl Error for ReceiveIncomplete {}
