use thiserror::Error;

/// Contract violations reported by [`FenwickTree`](crate::FenwickTree) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FenwickError {
    /// An index (or prefix length) fell outside the bounds of the tree
    #[error("index {index} is out of range for a tree of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A range was given with its start after its end
    #[error("invalid range: start {from} is greater than end {to}")]
    InvalidRange { from: usize, to: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            FenwickError::IndexOutOfRange { index: 5, len: 5 }.to_string(),
            "index 5 is out of range for a tree of length 5"
        );
        assert_eq!(
            FenwickError::InvalidRange { from: 3, to: 1 }.to_string(),
            "invalid range: start 3 is greater than end 1"
        );
    }
}
