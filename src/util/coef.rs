/* Treat byte_string as w-bit integers, most significant bits first, and return the i-th one. */
pub fn coef(byte_string: &[u8], i: u16, w: u8) -> u8 {
    if w == 8 {
        return byte_string[i as usize];
    }

    let index = (i as usize * w as usize) / 8;

    let digits_per_byte = 8 / w as u16;
    let offset = (i % digits_per_byte) as u8;
    let shift = 8 - w * (offset + 1);
    let mask = (1u8 << w) - 1;

    (byte_string[index] >> shift) & mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coef_test1() {
        let value = coef(&[0x12, 0x34], 7, 1);
        assert_eq!(value, 0);
    }

    #[test]
    fn coef_test2() {
        let value = coef(&[0x12, 0x34], 0, 4);
        assert_eq!(value, 1);
    }

    #[test]
    fn coef_w4_nibbles() {
        let digits: [u8; 4] = [0, 1, 2, 3].map(|i| coef(&[0xab, 0xcd], i, 4));
        assert_eq!(digits, [0x0a, 0x0b, 0x0c, 0x0d]);
    }

    #[test]
    fn coef_w8_bytes() {
        assert_eq!(coef(&[0xcd, 0xef], 0, 8), 0xcd);
        assert_eq!(coef(&[0xcd, 0xef], 1, 8), 0xef);
    }

    #[test]
    fn coef_w2_and_w1() {
        let w2: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7].map(|i| coef(&[0x12, 0x34], i, 2));
        assert_eq!(w2, [0, 1, 0, 2, 0, 3, 1, 0]);

        let w1: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7].map(|i| coef(&[0x12], i, 1));
        assert_eq!(w1, [0, 0, 0, 1, 0, 0, 1, 0]);
    }

    #[test]
    #[should_panic]
    fn coef_test_panic() {
        coef(&[0x12, 0x34], 2, 8);
    }
}
