use crate::details::icmp::IcmpHeader;
use crate::details::ReceiveIncomplete;
use pnet_packet::ipv4::Ipv4Packet;
use std::net::IpAddr;
use std::time::Duration;

/// Outcome of one echo round trip.
///
/// The received datagram is reported as is. Any ICMP datagram that reaches the
/// socket first counts as the reply, including replies to other processes'
/// requests and the request itself on loopback.
#[derive(Debug)]
pub struct EchoResponse {
    pub target: IpAddr,
    /// Received bytes, at most the configured receive buffer size.
    pub packet: Vec<u8>,
    pub packet_len: Result<usize, ReceiveIncomplete>,
    /// The datagram did not fit the receive buffer.
    pub truncated: bool,
    pub time: Duration,
}

impl EchoResponse {
    /// Decodes the ICMP header of the received datagram. On IPv4 raw sockets
    /// the kernel delivers the IP header as well; it is skipped here.
    #[must_use]
    pub fn icmp_header(&self) -> Option<IcmpHeader> {
        let packet = self.packet.as_slice();
        match self.target {
            IpAddr::V4(_) => match Ipv4Packet::new(packet) {
                Some(ipv4_packet) if ipv4_packet.get_version() == 4 => {
                    let ip_header_len = usize::from(ipv4_packet.get_header_length()) * 4;
                    IcmpHeader::read_from(packet.get(ip_header_len..)?)
                }
                _ => IcmpHeader::read_from(packet),
            },
            IpAddr::V6(_) => IcmpHeader::read_from(packet),
        }
    }
}
