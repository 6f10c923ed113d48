use digest::{Digest, FixedOutputReset, Update};
use tinyvec::ArrayVec;

use crate::constants::Node;

use super::HashChain;

macro_rules! define_sha256 {
    ($name:ident, $output_size:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Default, Clone)]
        pub struct $name {
            hasher: sha2::Sha256,
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
                    hasher: Digest::chain_update(self.hasher, data),
                }
            }

            fn finalize(self) -> Node {
                ArrayVec::from_array_len(self.hasher.finalize().into(), $output_size)
            }

            fn finalize_reset(&mut self) -> Node {
                ArrayVec::from_array_len(
                    FixedOutputReset::finalize_fixed_reset(&mut self.hasher).into(),
                    $output_size,
                )
            }
        }
    };
}

define_sha256!(
    Sha256_256,
    32,
    "Extension of [`sha2::Sha256`] with the full 32 byte output (`LMOTS_SHA256_N32_*`)."
);
define_sha256!(
    Sha256_192,
    24,
    "Extension of [`sha2::Sha256`] truncated to 24 bytes (`LMOTS_SHA256_N24_*`)."
);
