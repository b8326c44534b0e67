/// Isolates the least significant set bit of `x`, e.g. `12 (0b1100) -> 4 (0b0100)`
///
/// Returns `0` for `x == 0`
#[inline]
pub(crate) fn lowest_set_bit(x: usize) -> usize {
    x & x.wrapping_neg()
}

/// Returns early with [`IndexOutOfRange`](crate::FenwickError::IndexOutOfRange) unless `index < len`
///
/// ### Example
/// ```ignore
/// ensure_index!(index, self.len());
/// ```
macro_rules! ensure_index {
    ($index:expr, $len:expr) => {{
        let (index, len): (usize, usize) = ($index, $len);
        if index >= len {
            log::debug!("rejected index {} for length {}", index, len);
            return Err($crate::error::FenwickError::IndexOutOfRange { index, len });
        }
    }};
}

pub(crate) use ensure_index;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FenwickError;

    #[test]
    fn lowest_set_bit_functional() {
        assert_eq!(lowest_set_bit(0), 0, "zero has no set bits");
        assert_eq!(lowest_set_bit(1), 1);
        assert_eq!(lowest_set_bit(6), 2);
        assert_eq!(lowest_set_bit(12), 4, "1100 -> 0100");
        assert_eq!(lowest_set_bit(16), 16, "powers of two map to themselves");
        assert_eq!(lowest_set_bit(usize::MAX), 1);
        assert_eq!(lowest_set_bit(1 << (usize::BITS - 1)), 1 << (usize::BITS - 1));
    }

    fn checked(index: usize, len: usize) -> Result<usize, FenwickError> {
        ensure_index!(index, len);
        Ok(index)
    }

    #[test]
    fn ensure_index_functional() {
        assert_eq!(checked(0, 1), Ok(0));
        assert_eq!(checked(4, 5), Ok(4));
        assert_eq!(
            checked(5, 5),
            Err(FenwickError::IndexOutOfRange { index: 5, len: 5 }),
            "index equal to length is rejected"
        );
        assert_eq!(
            checked(0, 0),
            Err(FenwickError::IndexOutOfRange { index: 0, len: 0 }),
            "every index is rejected when empty"
        );
    }
}
