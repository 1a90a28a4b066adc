mod checksum;
pub use checksum::{checksum, checksum_legacy, ChecksumVariant};

mod echo_request;
pub use echo_request::{build_request, EchoRequest};

mod header;
pub use header::{IcmpHeader, ECHO_REPLY, ECHO_REQUEST, HEADER_SIZE};

mod sequence_number;
pub(crate) use sequence_number::SequenceCounter;
pub use sequence_number::SequenceNumber;

mod socket;
pub(crate) use socket::raw_socket::RawSocketOpener;
pub(crate) use socket::{OpenSocket, TSocket};
