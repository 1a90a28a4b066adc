use super::{ChecksumVariant, IcmpHeader, SequenceNumber, HEADER_SIZE};

/// Serialized echo request: header followed by `payload_size` zero bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EchoRequest {
    header: IcmpHeader,
    bytes: Vec<u8>,
}

impl EchoRequest {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn header(&self) -> IcmpHeader {
        self.header
    }
}

/// Builds an echo request. The checksum covers header and payload and is
/// computed with the checksum field zeroed.
///
/// No upper bound is placed on `payload_size`; keeping the datagram under the
/// path MTU is up to the caller.
#[must_use]
pub fn build_request(payload_size: usize, sequence: SequenceNumber, variant: ChecksumVariant) -> EchoRequest {
    let mut bytes = vec![0u8; HEADER_SIZE + payload_size];
    let mut header = IcmpHeader::echo_request(sequence);
    header.write_to(&mut bytes);
    header.checksum = variant.compute(&bytes);
    IcmpHeader::write_checksum(&mut bytes, header.checksum);
    EchoRequest { header, bytes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::icmp::{checksum, checksum_legacy, ECHO_REQUEST};

    #[test]
    fn length_is_header_plus_payload() {
        for n in [0usize, 1, 7, 56, 100, 1472] {
            let request = build_request(n, SequenceNumber::from(1), ChecksumVariant::Rfc792);
            assert_eq!(n + HEADER_SIZE, request.len());
        }
    }

    #[test]
    fn header_fields_are_populated() {
        let request = build_request(4, SequenceNumber::from(0x0203), ChecksumVariant::Rfc792);
        let header = request.header();
        assert_eq!(ECHO_REQUEST, header.icmp_type);
        assert_eq!(0, header.code);
        assert_eq!(SequenceNumber::from(0x0203), header.sequence);
        assert_eq!(0, header.gateway);
        assert_eq!(0, header.mtu);
        assert_eq!([0x02, 0x03], request.as_bytes()[4..6]);
    }

    #[test]
    fn header_matches_serialized_bytes() {
        for n in [0usize, 3, 56] {
            let request = build_request(n, SequenceNumber::from(0xFFFF), ChecksumVariant::Rfc792);
            assert_eq!(IcmpHeader::read_from(request.as_bytes()), Some(request.header()));
        }
    }

    #[test]
    fn payload_is_zero_filled() {
        let request = build_request(32, SequenceNumber::from(9), ChecksumVariant::Rfc792);
        assert!(request.as_bytes()[HEADER_SIZE..].iter().all(|&b| b == 0));
    }

    #[test]
    fn header_only_request_checksum() {
        // 0x0800 + 0x0001 = 0x0801
        let request = build_request(0, SequenceNumber::from(1), ChecksumVariant::Rfc792);
        assert_eq!(!0x0801, request.header().checksum);
        assert_eq!(
            [0x08, 0x00, 0xF7, 0xFE, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            request.as_bytes()
        );
    }

    #[test]
    fn checksum_verifies_to_zero() {
        for n in 0..40 {
            let request = build_request(n, SequenceNumber::from(0xABCD), ChecksumVariant::Rfc792);
            assert_eq!(0, checksum(request.as_bytes()), "payload size {n}");
        }
    }

    #[test]
    fn legacy_checksum_verifies_to_zero_with_legacy_routine() {
        for n in 0..40 {
            let request = build_request(n, SequenceNumber::from(0xABCD), ChecksumVariant::Legacy);
            assert_eq!(0, checksum_legacy(request.as_bytes()), "payload size {n}");
        }
    }

    #[test]
    fn zero_payload_odd_bytes_do_not_change_checksum() {
        // The trailing payload byte is zero, so padding it or dropping it sums the same.
        let strict = build_request(5, SequenceNumber::from(3), ChecksumVariant::Rfc792);
        let legacy = build_request(5, SequenceNumber::from(3), ChecksumVariant::Legacy);
        assert_eq!(strict, legacy);
    }
}
