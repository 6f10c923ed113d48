use sha3::{
    digest::{ExtendableOutput, ExtendableOutputReset, Update, XofReader},
    Shake256,
};
use tinyvec::ArrayVec;

use crate::constants::{Node, MAX_HASH_SIZE};

use super::HashChain;

macro_rules! define_shake256 {
    ($name:ident, $output_size:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Default, Clone)]
        pub struct $name {
            hasher: Shake256,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl HashChain for $name {
            fn update(&mut self, data: &[u8]) {
                Update::update(&mut self.hasher, data);
            }

            fn chain(self, data: &[u8]) -> Self {
                $name {
                    hasher: Update::chain(self.hasher, data),
                }
            }

            fn finalize(self) -> Node {
                let mut digest = [0u8; MAX_HASH_SIZE];
                self.hasher
                    .finalize_xof()
                    .read(&mut digest[..$output_size]);
                ArrayVec::from_array_len(digest, $output_size)
            }

            fn finalize_reset(&mut self) -> Node {
                let mut digest = [0u8; MAX_HASH_SIZE];
                self.hasher
                    .finalize_xof_reset()
                    .read(&mut digest[..$output_size]);
                ArrayVec::from_array_len(digest, $output_size)
            }
        }
    };
}

define_shake256!(
    Shake256_256,
    32,
    "Extension of [`sha3::Shake256`] with 32 bytes of output (`LMOTS_SHAKE_N32_*`)."
);
define_shake256!(
    Shake256_192,
    24,
    "Extension of [`sha3::Shake256`] with 24 bytes of output (`LMOTS_SHAKE_N24_*`)."
);
