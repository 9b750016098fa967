/// Exact base-2 logarithm of `len`.
///
/// Returns `None` unless `len` is a power of two.
pub fn exact_log2(len: usize) -> Option<usize> {
    if len.is_power_of_two() {
        Some(len.trailing_zeros() as usize)
    } else {
        None
    }
}

/// Smallest `g` such that `2^g >= n`.
///
/// ```text
/// 1 -> 0, 2 -> 1, 3 -> 2, 4 -> 2, 5 -> 3
/// ```
pub fn ceil_log2(n: usize) -> usize {
    assert!(n > 0, "ceil_log2 is undefined for zero");
    n.next_power_of_two().trailing_zeros() as usize
}

/// Fixed-width binary rendering of `value`, most significant bit first.
pub fn to_bit_string(value: u64, width: usize) -> String {
    (0..width).rev().map(|i| if (value >> i) & 1 == 1 { '1' } else { '0' }).collect()
}

/// Bit `i` counted from the most significant end of a `width`-bit value.
pub fn msb_bit(value: u64, width: usize, i: usize) -> bool {
    debug_assert!(i < width);
    (value >> (width - 1 - i)) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_log2() {
        assert_eq!(exact_log2(1), Some(0));
        assert_eq!(exact_log2(2), Some(1));
        assert_eq!(exact_log2(16), Some(4));
        assert_eq!(exact_log2(0), None);
        assert_eq!(exact_log2(6), None);
        assert_eq!(exact_log2(12), None);
    }

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(8), 3);
        assert_eq!(ceil_log2(9), 4);
    }

    #[test]
    fn test_bit_string() {
        assert_eq!(to_bit_string(0b10, 2), "10");
        assert_eq!(to_bit_string(0b1, 3), "001");
        assert_eq!(to_bit_string(0, 0), "");
        assert_eq!(to_bit_string(0b1011, 4), "1011");
    }

    #[test]
    fn test_msb_bit() {
        assert!(msb_bit(0b100, 3, 0));
        assert!(!msb_bit(0b100, 3, 1));
        assert!(!msb_bit(0b100, 3, 2));
    }
}
