use super::{OpenSocket, TSocket};
use socket2::{Domain, MaybeUninitSlice, Protocol, Type};
use std::{io, mem::MaybeUninit, net::IpAddr, time::Duration};

/// Opens `SOCK_RAW` ICMP sockets. Needs `CAP_NET_RAW` (or root) on Linux.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RawSocketOpener;

impl OpenSocket for RawSocketOpener {
    type Socket = RawSocket;

    fn open(&self, ip: IpAddr, read_timeout: Option<Duration>) -> io::Result<RawSocket> {
        RawSocket::new(ip, read_timeout)
    }
}

pub(crate) struct RawSocket {
    socket: socket2::Socket,
}

impl RawSocket {
    pub(crate) fn new(ip: IpAddr, read_timeout: Option<Duration>) -> io::Result<Self> {
        let (domain, protocol) = match ip {
            IpAddr::V4(_) => (Domain::IPV4, Protocol::ICMPV4),
            IpAddr::V6(_) => (Domain::IPV6, Protocol::ICMPV6),
        };
        tracing::trace!(?domain, "creating RawSocket");
        let socket = socket2::Socket::new(domain, Type::RAW, Some(protocol))?;
        socket.set_read_timeout(read_timeout)?;
        Ok(RawSocket { socket })
    }
}

impl TSocket for RawSocket {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize> {
        self.socket.send_to(buf, addr)
    }

    fn recv(&self, buf: &mut [u8]) -> io::Result<(usize, bool)> {
        // Socket2 guarantees it never writes uninitialized bytes into the buffer, which makes
        // the cast from `&mut [u8]` to `&mut [MaybeUninit<u8>]` sound.
        // https://docs.rs/socket2/0.4.7/socket2/struct.Socket.html#method.recv
        //
        // On an IPv4 raw socket the datagram starts with the IP header.
        let uninit = unsafe { &mut *(std::ptr::addr_of_mut!(*buf) as *mut [MaybeUninit<u8>]) };
        let (n, flags) = self.socket.recv_vectored(&mut [MaybeUninitSlice::new(uninit)])?;
        Ok((n, flags.is_truncated()))
    }
}
