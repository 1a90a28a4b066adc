use std::sync::atomic::{AtomicU16, Ordering};

type SequenceNumberInnerType = u16;

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct SequenceNumber(SequenceNumberInnerType);

impl SequenceNumber {
    #[must_use]
    pub fn next(self) -> Self {
        SequenceNumber(self.0.wrapping_add(1))
    }
}

impl From<SequenceNumber> for SequenceNumberInnerType {
    fn from(value: SequenceNumber) -> Self {
        value.0
    }
}

impl From<SequenceNumberInnerType> for SequenceNumber {
    fn from(value: SequenceNumberInnerType) -> Self {
        SequenceNumber(value)
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-session request counter. Starts at zero and is incremented before
/// each request is built, so the first request carries 1.
#[derive(Debug, Default)]
pub(crate) struct SequenceCounter(AtomicU16);

impl SequenceCounter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn starting_at(value: SequenceNumber) -> Self {
        SequenceCounter(AtomicU16::new(value.into()))
    }

    pub(crate) fn increment(&self) -> SequenceNumber {
        // fetch_add wraps at u16::MAX.
        SequenceNumber(self.0.fetch_add(1, Ordering::Relaxed)).next()
    }

    pub(crate) fn current(&self) -> SequenceNumber {
        SequenceNumber(self.0.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_increment_yields_one() {
        let counter = SequenceCounter::new();
        assert_eq!(SequenceNumber::from(0), counter.current());
        assert_eq!(SequenceNumber::from(1), counter.increment());
        assert_eq!(SequenceNumber::from(1), counter.current());
    }

    #[test]
    fn increments_are_strictly_consecutive() {
        let counter = SequenceCounter::new();
        let mut previous = counter.increment();
        for _ in 0..1000 {
            let current = counter.increment();
            assert_eq!(previous.next(), current);
            previous = current;
        }
    }

    #[test]
    fn wraps_to_zero() {
        let counter = SequenceCounter::starting_at(SequenceNumber::from(u16::MAX - 1));
        assert_eq!(SequenceNumber::from(u16::MAX), counter.increment());
        assert_eq!(SequenceNumber::from(0), counter.increment());
        assert_eq!(SequenceNumber::from(1), counter.increment());
    }

    #[test]
    fn fmt() {
        assert_eq!("42", format!("{}", SequenceNumber::from(42)));
    }
}
