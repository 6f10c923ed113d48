use core::{convert::TryFrom, fmt, marker::PhantomData};

use tinyvec::ArrayVec;

use crate::{
    constants::{
        num_checksum_chains, num_message_chains, ENCODED_MESSAGE_HASH_MAX_LEN,
        WINTERNITZ_PARAMETERS,
    },
    error::Error,
    hasher::{sha256::Sha256_256, HashChain},
    util::coef::coef,
};

/// Specifies the used Winternitz parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LmotsAlgorithm {
    LmotsW1 = 1,
    LmotsW2 = 2,
    LmotsW4 = 4,
    LmotsW8 = 8,
}

impl TryFrom<u8> for LmotsAlgorithm {
    type Error = Error;

    fn try_from(winternitz: u8) -> Result<Self, Self::Error> {
        match winternitz {
            1 => Ok(LmotsAlgorithm::LmotsW1),
            2 => Ok(LmotsAlgorithm::LmotsW2),
            4 => Ok(LmotsAlgorithm::LmotsW4),
            8 => Ok(LmotsAlgorithm::LmotsW8),
            _ => Err(Error::UnsupportedParameter(winternitz)),
        }
    }
}

impl LmotsAlgorithm {
    pub fn get_winternitz(&self) -> u8 {
        *self as u8
    }

    pub fn construct_parameter<H: HashChain>(&self) -> Result<LmotsParameter<H>, Error> {
        LmotsParameter::new(self.get_winternitz())
    }
}

/// An LM-OTS instantiation: the Winternitz parameter together with the constants
/// RFC 8554 derives from it and from the output length of `H`.
///
/// The value is immutable and cheap to copy; every key pair and signature handled by one
/// instance uses the same constants.
pub struct LmotsParameter<H: HashChain = Sha256_256> {
    winternitz: u8,
    hash_function_output_size: u16,
    message_chain_count: u16,
    checksum_chain_count: u16,
    checksum_left_shift: u8,
    phantom_data: PhantomData<H>,
}

// Manually implement Copy, Clone and PartialEq because HashChain does not require them.
// However, it does not make a difference, because we don't hold a instance for HashChain.
impl<H: HashChain> Copy for LmotsParameter<H> {}

impl<H: HashChain> Clone for LmotsParameter<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: HashChain> PartialEq for LmotsParameter<H> {
    fn eq(&self, other: &Self) -> bool {
        self.winternitz == other.winternitz
            && self.hash_function_output_size == other.hash_function_output_size
    }
}

impl<H: HashChain> Eq for LmotsParameter<H> {}

impl<H: HashChain> fmt::Debug for LmotsParameter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LmotsParameter")
            .field("w", &self.winternitz)
            .field("n", &self.hash_function_output_size)
            .field("u", &self.message_chain_count)
            .field("v", &self.checksum_chain_count)
            .field("ls", &self.checksum_left_shift)
            .field("p", &self.get_hash_chain_count())
            .finish()
    }
}

impl<H: HashChain> LmotsParameter<H> {
    /// Derives `u`, `v`, `ls` and `p` (RFC 8554 Appendix B) for the Winternitz parameter `w`
    /// and the output length of `H`, which is measured by hashing the empty input.
    pub fn new(winternitz: u8) -> Result<Self, Error> {
        if !WINTERNITZ_PARAMETERS.contains(&winternitz) {
            return Err(Error::UnsupportedParameter(winternitz));
        }

        let n = H::default().finalize().len();
        if n == 0 {
            return Err(Error::UnsupportedHashOutputSize(n));
        }

        let u = num_message_chains(winternitz, n);
        let v = num_checksum_chains(winternitz, n);

        // The checksum is packed into 16 bits
        let checksum_bits = v * winternitz as usize;
        if checksum_bits > 16 {
            return Err(Error::UnsupportedHashOutputSize(n));
        }
        let ls = 16 - checksum_bits;

        tracing::debug!(w = winternitz, n, u, v, ls, p = u + v, "derived LM-OTS parameters");

        Ok(Self {
            winternitz,
            hash_function_output_size: n as u16,
            message_chain_count: u as u16,
            checksum_chain_count: v as u16,
            checksum_left_shift: ls as u8,
            phantom_data: PhantomData,
        })
    }

    pub fn get_winternitz(&self) -> u8 {
        self.winternitz
    }

    // RFC 8554: "n"
    pub fn get_hash_function_output_size(&self) -> usize {
        self.hash_function_output_size as usize
    }

    // RFC 8554: "u"
    pub fn get_message_chain_count(&self) -> u16 {
        self.message_chain_count
    }

    // RFC 8554: "v"
    pub fn get_checksum_chain_count(&self) -> u16 {
        self.checksum_chain_count
    }

    // RFC 8554: "ls"
    pub fn get_checksum_left_shift(&self) -> u8 {
        self.checksum_left_shift
    }

    // RFC 8554: "p"
    pub fn get_hash_chain_count(&self) -> u16 {
        self.message_chain_count + self.checksum_chain_count
    }

    /// Length of a full hash chain, `2^w - 1`.
    pub fn get_max_word_size(&self) -> usize {
        (1 << self.winternitz) - 1
    }

    pub fn get_hasher(&self) -> H {
        H::default()
    }

    /// Extracts the `i`-th base-`2^w` digit of `byte_string`.
    pub fn coef(&self, byte_string: &[u8], i: u16) -> u8 {
        coef(byte_string, i, self.winternitz)
    }

    /// RFC 8554 Cksm: sums `2^w - 1 - coef(Q, i)` over the `u` message digits and packs the
    /// result into the upper bits of 16.
    pub fn checksum(&self, byte_string: &[u8]) -> u16 {
        let max_word_size = self.get_max_word_size() as u32;

        let sum: u32 = (0..self.message_chain_count)
            .map(|i| max_word_size - self.coef(byte_string, i) as u32)
            .sum();

        ((sum << self.checksum_left_shift) & 0xffff) as u16
    }

    /// Returns `Q || u16str(Cksm(Q))`, the value whose digits select the chain positions.
    pub fn append_checksum_to(
        &self,
        byte_string: &[u8],
    ) -> ArrayVec<[u8; ENCODED_MESSAGE_HASH_MAX_LEN]> {
        let mut result = ArrayVec::new();

        let checksum = self.checksum(byte_string);

        result.extend_from_slice(byte_string);
        result.extend_from_slice(&checksum.to_be_bytes());

        result
    }
}

#[cfg(test)]
mod tests {
    use core::convert::TryFrom;

    use super::{LmotsAlgorithm, LmotsParameter};
    use crate::{
        error::Error,
        hasher::{sha256::Sha256_192, sha256::Sha256_256, shake256::Shake256_256},
    };

    fn decode(data: &str) -> Vec<u8> {
        hex::decode(data).unwrap()
    }

    macro_rules! generate_parameter_test {
        ($name:ident, $hasher:ty, $w:literal, $u:literal, $v:literal, $ls:literal, $p:literal) => {
            #[test]
            fn $name() {
                let parameter = LmotsParameter::<$hasher>::new($w).unwrap();

                assert_eq!(parameter.get_winternitz(), $w);
                assert_eq!(parameter.get_message_chain_count(), $u);
                assert_eq!(parameter.get_checksum_chain_count(), $v);
                assert_eq!(parameter.get_checksum_left_shift(), $ls);
                assert_eq!(parameter.get_hash_chain_count(), $p);
            }
        };
    }

    generate_parameter_test!(lmots_sha256_n32_w1_parameter, Sha256_256, 1, 256, 9, 7, 265);
    generate_parameter_test!(lmots_sha256_n32_w2_parameter, Sha256_256, 2, 128, 5, 6, 133);
    generate_parameter_test!(lmots_sha256_n32_w4_parameter, Sha256_256, 4, 64, 3, 4, 67);
    generate_parameter_test!(lmots_sha256_n32_w8_parameter, Sha256_256, 8, 32, 2, 0, 34);
    generate_parameter_test!(lmots_sha256_n24_w1_parameter, Sha256_192, 1, 192, 8, 8, 200);
    generate_parameter_test!(lmots_sha256_n24_w4_parameter, Sha256_192, 4, 48, 3, 4, 51);
    generate_parameter_test!(lmots_sha256_n24_w8_parameter, Sha256_192, 8, 24, 2, 0, 26);
    generate_parameter_test!(lmots_shake_n32_w4_parameter, Shake256_256, 4, 64, 3, 4, 67);

    #[test]
    fn test_output_size_is_measured() {
        let parameter = LmotsParameter::<Sha256_192>::new(2).unwrap();
        assert_eq!(parameter.get_hash_function_output_size(), 24);
        assert_eq!(parameter.get_hash_chain_count(), 101);
    }

    #[test]
    fn test_unsupported_winternitz_parameter() {
        for w in [0u8, 3, 5, 16, 255] {
            assert_eq!(
                LmotsParameter::<Sha256_256>::new(w),
                Err(Error::UnsupportedParameter(w))
            );
            assert_eq!(LmotsAlgorithm::try_from(w), Err(Error::UnsupportedParameter(w)));
        }
    }

    #[test]
    fn test_algorithm_construct_parameter() {
        let parameter = LmotsAlgorithm::try_from(4)
            .unwrap()
            .construct_parameter::<Sha256_256>()
            .unwrap();

        assert_eq!(parameter, LmotsParameter::new(4).unwrap());
        assert_eq!(LmotsAlgorithm::LmotsW8.get_winternitz(), 8);
        assert_ne!(parameter, LmotsParameter::new(8).unwrap());
    }

    #[test]
    fn test_checksum_w4_vector() {
        let parameter = LmotsParameter::<Sha256_256>::new(4).unwrap();
        let q = decode("326d34253ec0b3e9fa4cf2f708edf471d5d2caeeb1d1b388a4c4476a19d4a236");

        assert_eq!(parameter.checksum(&q), 7520);
        assert_eq!(
            parameter.append_checksum_to(&q).as_slice(),
            decode("326d34253ec0b3e9fa4cf2f708edf471d5d2caeeb1d1b388a4c4476a19d4a2361d60")
                .as_slice()
        );
    }

    #[test]
    fn test_checksum_w8_vector() {
        let parameter = LmotsParameter::<Sha256_256>::new(8).unwrap();
        let q = decode("ea1d9f55ef8b75d1b5e119f4626ed5a6b6d6204f213b2cdc2a9aed4659117e6e");

        assert_eq!(parameter.checksum(&q), 3979);
        assert_eq!(
            parameter.append_checksum_to(&q).as_slice(),
            decode("ea1d9f55ef8b75d1b5e119f4626ed5a6b6d6204f213b2cdc2a9aed4659117e6e0f8b")
                .as_slice()
        );
    }

    #[test]
    fn test_checksum_descending_bytes() {
        let parameter = LmotsParameter::<Sha256_256>::new(4).unwrap();
        let q = decode("fffefdfcfbfaf9f8f7f6f5f4f3f2f1f0efeeedecebeae9e8e7e6e5e4e3e2e1e0");

        assert_eq!(parameter.checksum(&q), 4096);
    }

    #[test]
    fn test_checksum_extremes() {
        let parameter = LmotsParameter::<Sha256_256>::new(4).unwrap();

        assert_eq!(parameter.checksum(&[0xff; 32]), 0);
        assert_eq!(parameter.checksum(&[0x00; 32]), (64 * 15) << 4);

        let parameter = LmotsParameter::<Sha256_256>::new(1).unwrap();
        assert_eq!(parameter.checksum(&[0x00; 32]), 256 << 7);
    }

    #[test]
    fn test_encoded_hash_covers_all_chains() {
        for w in [1u8, 2, 4, 8] {
            let parameter = LmotsParameter::<Sha256_256>::new(w).unwrap();
            let encoded = parameter.append_checksum_to(&[0u8; 32]);

            assert_eq!(encoded.len(), 34);
            let last_digit_bit = parameter.get_hash_chain_count() as usize * w as usize;
            assert!(last_digit_bit <= encoded.len() * 8);
        }
    }
}
