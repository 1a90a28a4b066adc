use crate::details::{PingError, PingErrorKind, PingResult};
use std::io;
use std::net::IpAddr;

/// Turns a literal address or a host name into an address.
///
/// Literals are parsed without a lookup. For names the first address the
/// resolver returns wins, whatever its family.
pub fn resolve(host: &str) -> PingResult<IpAddr> {
    resolve_with(host, dns_lookup::lookup_host)
}

pub(crate) fn resolve_with<F>(host: &str, lookup: F) -> PingResult<IpAddr>
where
    F: FnOnce(&str) -> io::Result<Vec<IpAddr>>,
{
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }
    let ips = lookup(host).map_err(|e| PingError::from_io(PingErrorKind::Resolution, &e))?;
    tracing::trace!(host, candidates = ips.len(), "host name resolved");
    ips.into_iter()
        .next()
        .ok_or_else(|| PingError::new(PingErrorKind::Resolution, format!("could not resolve hostname {host}")))
}
