use super::SequenceNumber;

pub const ECHO_REQUEST: u8 = 8;
pub const ECHO_REPLY: u8 = 0;

/// Size of the serialized header. Payload bytes follow directly.
pub const HEADER_SIZE: usize = 12;

const TYPE_OFFSET: usize = 0;
const CODE_OFFSET: usize = 1;
const CHECKSUM_OFFSET: usize = 2;
const SEQUENCE_OFFSET: usize = 4;
const GATEWAY_OFFSET: usize = 6;
const MTU_OFFSET: usize = 10;

/// ICMP echo header as this crate puts it on the wire:
///
/// ```text
/// [type:1][code:1][checksum:2][sequence:2][gateway:4][mtu:2]
/// ```
///
/// Multi-byte fields are big-endian. `gateway` and `mtu` are zero for echo
/// requests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IcmpHeader {
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub sequence: SequenceNumber,
    pub gateway: u32,
    pub mtu: u16,
}

impl IcmpHeader {
    #[must_use]
    pub fn echo_request(sequence: SequenceNumber) -> Self {
        IcmpHeader { icmp_type: ECHO_REQUEST, code: 0, checksum: 0, sequence, gateway: 0, mtu: 0 }
    }

    /// Writes the header into the first [`HEADER_SIZE`] bytes of `buf`.
    ///
    /// # Panics
    ///
    /// If `buf` is shorter than [`HEADER_SIZE`].
    pub fn write_to(&self, buf: &mut [u8]) {
        buf[TYPE_OFFSET] = self.icmp_type;
        buf[CODE_OFFSET] = self.code;
        buf[CHECKSUM_OFFSET..SEQUENCE_OFFSET].copy_from_slice(&self.checksum.to_be_bytes());
        buf[SEQUENCE_OFFSET..GATEWAY_OFFSET].copy_from_slice(&u16::from(self.sequence).to_be_bytes());
        buf[GATEWAY_OFFSET..MTU_OFFSET].copy_from_slice(&self.gateway.to_be_bytes());
        buf[MTU_OFFSET..HEADER_SIZE].copy_from_slice(&self.mtu.to_be_bytes());
    }

    /// Reads a header from the start of `buf`, `None` if `buf` is too short.
    #[must_use]
    pub fn read_from(buf: &[u8]) -> Option<Self> {
        let buf = buf.get(..HEADER_SIZE)?;
        Some(IcmpHeader {
            icmp_type: buf[TYPE_OFFSET],
            code: buf[CODE_OFFSET],
            checksum: u16::from_be_bytes([buf[CHECKSUM_OFFSET], buf[CHECKSUM_OFFSET + 1]]),
            sequence: u16::from_be_bytes([buf[SEQUENCE_OFFSET], buf[SEQUENCE_OFFSET + 1]]).into(),
            gateway: u32::from_be_bytes([
                buf[GATEWAY_OFFSET],
                buf[GATEWAY_OFFSET + 1],
                buf[GATEWAY_OFFSET + 2],
                buf[GATEWAY_OFFSET + 3],
            ]),
            mtu: u16::from_be_bytes([buf[MTU_OFFSET], buf[MTU_OFFSET + 1]]),
        })
    }

    pub(crate) fn write_checksum(buf: &mut [u8], checksum: u16) {
        buf[CHECKSUM_OFFSET..SEQUENCE_OFFSET].copy_from_slice(&checksum.to_be_bytes());
    }
}
