//! RFC 792 Internet checksum.

/// Which treatment a trailing odd byte gets when summing 16-bit words.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ChecksumVariant {
    /// The trailing byte is the high byte of a zero-padded word.
    #[default]
    Rfc792,
    /// The trailing byte is not summed. Only differs from `Rfc792` for
    /// odd-length buffers, i.e. odd payload sizes.
    Legacy,
}

impl ChecksumVariant {
    pub(crate) fn compute(self, bytes: &[u8]) -> u16 {
        match self {
            ChecksumVariant::Rfc792 => checksum(bytes),
            ChecksumVariant::Legacy => checksum_legacy(bytes),
        }
    }
}

/// One's complement of the one's complement sum of the big-endian 16-bit
/// words in `bytes`. An empty buffer yields `0xFFFF`.
#[must_use]
pub fn checksum(bytes: &[u8]) -> u16 {
    let mut sum = sum_words(bytes);
    if let Some(&last) = bytes.chunks_exact(2).remainder().first() {
        sum += u32::from(last) << 8;
    }
    !fold(sum)
}

/// Same as [`checksum`] except that a trailing odd byte is dropped.
#[must_use]
pub fn checksum_legacy(bytes: &[u8]) -> u16 {
    !fold(sum_words(bytes))
}

fn sum_words(bytes: &[u8]) -> u32 {
    bytes
        .chunks_exact(2)
        .map(|word| u32::from(u16::from_be_bytes([word[0], word[1]])))
        .fold(0u32, u32::wrapping_add)
}

#[allow(clippy::cast_possible_truncation)]
fn fold(sum: u32) -> u16 {
    // Two rounds settle every carry of a u32 accumulator.
    let sum = (sum >> 16) + (sum & 0xFFFF);
    let sum = (sum >> 16) + (sum & 0xFFFF);
    sum as u16
}
