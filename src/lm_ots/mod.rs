use crate::{error::Error, hasher::HashChain};

use self::{
    definitions::{LmotsPrivateKey, LmotsPublicKey, LmotsSignature},
    parameters::LmotsParameter,
    signing::SigningResult,
};

mod chains;
pub mod definitions;
mod keygen;
pub mod parameters;
pub mod signing;
pub mod verify;

/// The four LM-OTS operations, bound to one parameter set.
///
/// `identifier` is the key pair identifier `I` and `leaf_index` the index `q`; both are
/// bound into every hash so a key pair, signature or public key is only valid in its
/// own context.
impl<H: HashChain> LmotsParameter<H> {
    pub fn generate_private_key(
        &self,
        seed: &[u8],
        identifier: &[u8],
        leaf_index: u32,
    ) -> LmotsPrivateKey<H> {
        keygen::generate_private_key(self, seed, identifier, leaf_index)
    }

    pub fn derive_public_key(
        &self,
        private_key: &LmotsPrivateKey<H>,
        identifier: &[u8],
        leaf_index: u32,
    ) -> Result<LmotsPublicKey<H>, Error> {
        keygen::generate_public_key(self, private_key, identifier, leaf_index)
    }

    pub fn sign(
        &self,
        message: &[u8],
        private_key: &LmotsPrivateKey<H>,
        identifier: &[u8],
        leaf_index: u32,
        signature_randomizer: &[u8],
    ) -> Result<SigningResult<H>, Error> {
        signing::sign(
            self,
            message,
            private_key,
            identifier,
            leaf_index,
            signature_randomizer,
        )
    }

    #[cfg(feature = "rand")]
    pub fn sign_random(
        &self,
        message: &[u8],
        private_key: &LmotsPrivateKey<H>,
        identifier: &[u8],
        leaf_index: u32,
    ) -> Result<SigningResult<H>, Error> {
        signing::sign_random(self, message, private_key, identifier, leaf_index)
    }

    pub fn verify(
        &self,
        message: &[u8],
        signature: &LmotsSignature<H>,
        identifier: &[u8],
        leaf_index: u32,
        public_key: &LmotsPublicKey<H>,
    ) -> bool {
        verify::verify(
            self,
            message,
            signature,
            identifier,
            leaf_index,
            public_key,
        )
    }

    pub fn derive_key_candidate(
        &self,
        message: &[u8],
        signature: &LmotsSignature<H>,
        identifier: &[u8],
        leaf_index: u32,
    ) -> Option<LmotsPublicKey<H>> {
        verify::derive_key_candidate(self, message, signature, identifier, leaf_index)
    }
}

#[cfg(test)]
mod tests {
    use crate::hasher::{
        sha256::{Sha256_192, Sha256_256},
        shake256::{Shake256_192, Shake256_256},
        HashChain,
    };

    use super::parameters::LmotsParameter;

    fn round_trip<H: HashChain>(w: u8) {
        let parameter = LmotsParameter::<H>::new(w).unwrap();
        let n = parameter.get_hash_function_output_size();
        let identifier = [0x17u8; 16];
        let randomizer = vec![0x99u8; n];

        let private_key = parameter.generate_private_key(&[1u8; 32], &identifier, 12);
        let public_key = parameter
            .derive_public_key(&private_key, &identifier, 12)
            .unwrap();
        assert_eq!(public_key.as_slice().len(), n);

        let result = parameter
            .sign(b"message", &private_key, &identifier, 12, &randomizer)
            .unwrap();
        assert_eq!(
            result.signature.to_binary_representation().len(),
            n * (parameter.get_hash_chain_count() as usize + 1)
        );

        assert!(parameter.verify(b"message", &result.signature, &identifier, 12, &public_key));
        assert!(!parameter.verify(b"massage", &result.signature, &identifier, 12, &public_key));
        assert_eq!(
            parameter.derive_key_candidate(b"message", &result.signature, &identifier, 12),
            Some(public_key)
        );
    }

    #[test]
    fn test_round_trip_sha256_256() {
        round_trip::<Sha256_256>(2);
    }

    #[test]
    fn test_round_trip_sha256_192() {
        round_trip::<Sha256_192>(4);
    }

    #[test]
    fn test_round_trip_shake256_256() {
        round_trip::<Shake256_256>(4);
    }

    #[test]
    fn test_round_trip_shake256_192() {
        round_trip::<Shake256_192>(8);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_sign_random_round_trip() {
        let parameter = LmotsParameter::<Sha256_256>::new(4).unwrap();
        let identifier = [0x01u8; 16];

        let private_key = parameter.generate_private_key(&[2u8; 32], &identifier, 0);
        let public_key = parameter
            .derive_public_key(&private_key, &identifier, 0)
            .unwrap();
        let result = parameter
            .sign_random(b"message", &private_key, &identifier, 0)
            .unwrap();

        assert!(parameter.verify(b"message", &result.signature, &identifier, 0, &public_key));
    }
}
