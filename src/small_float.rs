//! The pseudo-float size codec behind the bin index.
//!
//! Sizes are bucketed by an 8-bit float-like code: a 3-bit mantissa under a
//! 5-bit exponent, read `(exp << 3) | mantissa`. Sizes below 8 are denormal
//! (exp = 0, code = size), so the smallest codes are exact. From there each
//! power-of-two magnitude is subdivided into 8 linear steps, giving bin
//! spacing that never exceeds 12.5% of the size it represents.
//!
//! Two encodings exist because the two users need opposite rounding: an
//! allocation request must round *up* (the bin's representative size has to
//! satisfy the request), while a free span must round *down* (any request
//! served from its bin has to fit inside it).

pub(crate) const MANTISSA_BITS: u32 = 3;
pub(crate) const MANTISSA_VALUE: u32 = 1 << MANTISSA_BITS;
pub(crate) const MANTISSA_MASK: u32 = MANTISSA_VALUE - 1;

/// Encode `size`, rounding up to the nearest bin.
///
/// The decoded result is the smallest representable size >= `size`.
#[inline]
pub fn uint_to_float_round_up(size: u32) -> u32 {
    if size < MANTISSA_VALUE {
        return size;
    }

    let highest_set_bit = 31 - size.leading_zeros();
    let mantissa_start_bit = highest_set_bit - MANTISSA_BITS;
    let exp = mantissa_start_bit + 1;
    let mut mantissa = (size >> mantissa_start_bit) & MANTISSA_MASK;

    let low_bits_mask = (1 << mantissa_start_bit) - 1;

    // round up: any truncated low bit bumps the mantissa, carrying into
    // the exponent via the addition below
    if size & low_bits_mask != 0 {
        mantissa += 1;
    }

    (exp << MANTISSA_BITS) + mantissa
}

/// Encode `size`, rounding down to the nearest bin.
///
/// The decoded result is the largest representable size <= `size`.
#[inline]
pub fn uint_to_float_round_down(size: u32) -> u32 {
    if size < MANTISSA_VALUE {
        return size;
    }

    let highest_set_bit = 31 - size.leading_zeros();
    let mantissa_start_bit = highest_set_bit - MANTISSA_BITS;
    let exp = mantissa_start_bit + 1;
    let mantissa = (size >> mantissa_start_bit) & MANTISSA_MASK;

    (exp << MANTISSA_BITS) | mantissa
}

/// Decode a bin code back to its representative size.
///
/// Codes of 240 and above decode to values past `u32::MAX` and wrap; no
/// free span can ever land in those bins, so only their (meaningless)
/// representative sizes are affected.
#[inline]
pub fn float_to_uint(float_value: u32) -> u32 {
    let exponent = float_value >> MANTISSA_BITS;
    let mantissa = float_value & MANTISSA_MASK;
    if exponent == 0 {
        mantissa
    } else {
        (mantissa | MANTISSA_VALUE) << (exponent - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denormals_are_exact() {
        // denorms, exp=1, and exp=2 + mantissa=0 are all precise
        for i in 0..17 {
            assert!(uint_to_float_round_up(i) == i);
            assert!(uint_to_float_round_down(i) == i);
            assert!(float_to_uint(i) == i);
        }
    }

    #[test]
    fn selected_sizes() {
        // (size, round up, round down)
        let test_data = [
            (17, 17, 16),
            (118, 39, 38),
            (1024, 64, 64),
            (65536, 112, 112),
            (529445, 137, 136),
            (1048575, 144, 143),
        ];

        for (number, up, down) in test_data {
            assert!(uint_to_float_round_up(number) == up);
            assert!(uint_to_float_round_down(number) == down);
        }
    }

    #[test]
    fn decode_encode_round_trip() {
        // codes >= 240 decode past u32::MAX, so stop there
        for code in 0..240 {
            let value = float_to_uint(code);
            assert!(uint_to_float_round_up(value) == code);
            assert!(uint_to_float_round_down(value) == code);
        }
    }

    #[test]
    fn rounding_brackets_the_size() {
        fastrand::seed(0x5eed);

        for _ in 0..100_000 {
            let size = fastrand::u32(1..);

            let down = uint_to_float_round_down(size);
            let up = uint_to_float_round_up(size);

            assert!(down <= up);
            assert!(up - down <= 1);
            assert!(float_to_uint(down) <= size);
            if up < 240 {
                assert!(float_to_uint(up) >= size);
            }
        }
    }
}
