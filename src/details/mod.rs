pub use echo_response::EchoResponse;
pub(crate) use echo_session::EchoSession;
pub use ping_error::{GenericError, PingError, PingErrorKind, ReceiveIncomplete};
pub use ping_result::PingResult;
pub use resolve::resolve;

mod echo_response;
mod echo_session;
pub(crate) mod icmp;
mod ping_error;
mod ping_result;
mod resolve;
