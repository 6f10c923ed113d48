#![cfg_attr(not(any(feature = "std", test)), no_std)]
//! Leighton-Micali one-time signatures (LM-OTS, RFC 8554 section 4).
//!
//! An [`LmotsParameter`] fixes the Winternitz parameter and the hash function; it
//! derives the private key, public key, signature and verification results:
//!
//! ```
//! use hbs_lmots::{LmotsAlgorithm, Sha256_256};
//!
//! let parameter = LmotsAlgorithm::LmotsW4
//!     .construct_parameter::<Sha256_256>()
//!     .unwrap();
//!
//! let identifier = [0x42u8; 16];
//! let private_key = parameter.generate_private_key(&[7u8; 32], &identifier, 0);
//! let public_key = parameter
//!     .derive_public_key(&private_key, &identifier, 0)
//!     .unwrap();
//!
//! let result = parameter
//!     .sign(b"message", &private_key, &identifier, 0, &[0x11u8; 32])
//!     .unwrap();
//!
//! assert!(parameter.verify(b"message", &result.signature, &identifier, 0, &public_key));
//! ```

mod constants;
mod error;
pub mod hasher;
mod lm_ots;
mod util;

pub use crate::constants::{
    num_winternitz_chains, HashChains, Node, MAX_HASH_SIZE, MAX_LMOTS_PRIVATE_KEY_LENGTH,
    MAX_LMOTS_SIGNATURE_LENGTH, MAX_NUM_WINTERNITZ_CHAINS,
};
pub use crate::error::Error;

pub use crate::hasher::sha256::{Sha256_192, Sha256_256};
pub use crate::hasher::shake256::{Shake256_192, Shake256_256};
pub use crate::hasher::HashChain;

pub use crate::lm_ots::definitions::{LmotsPrivateKey, LmotsPublicKey, LmotsSignature};
pub use crate::lm_ots::parameters::{LmotsAlgorithm, LmotsParameter};
pub use crate::lm_ots::signing::SigningResult;

pub use crate::util::hex::HexFmt;
pub use crate::util::SecretBytes;
