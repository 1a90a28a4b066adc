use std::{io, net::IpAddr, time::Duration};

pub(crate) mod raw_socket;

pub(crate) trait TSocket {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize>;
    /// Receives one datagram into `buf`. Returns the number of bytes stored
    /// and whether the datagram was longer than `buf`.
    fn recv(&self, buf: &mut [u8]) -> io::Result<(usize, bool)>;
}

pub(crate) trait OpenSocket: Send + Sync {
    type Socket: TSocket;

    /// Opens a socket for the address family of `ip`. A `read_timeout` of
    /// `None` makes receives block until data arrives.
    fn open(&self, ip: IpAddr, read_timeout: Option<Duration>) -> io::Result<Self::Socket>;
}
