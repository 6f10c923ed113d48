//! Error types

/// Errors returned while deriving parameters or signing.
///
/// Verification never fails with an error; malformed or forged signatures
/// are reported as `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The Winternitz parameter is not one of 1, 2, 4 or 8.
    #[error("Invalid Winternitz parameter {0}. Allowed is: 1, 2, 4 or 8")]
    UnsupportedParameter(u8),
    /// The hash function produces digests the checksum encoding cannot cover.
    #[error("Unsupported hash output size of {0} bytes")]
    UnsupportedHashOutputSize(usize),
    /// The signature randomizer `C` does not have the hash output length.
    #[error("Signature randomizer must be {expected} bytes, got {got}")]
    InvalidRandomizerLength {
        /// Hash output length `n`.
        expected: usize,
        /// Length of the supplied randomizer.
        got: usize,
    },
    /// The private key does not hold `p` chain values of `n` bytes.
    #[error("Private key does not match the LM-OTS parameter set")]
    InvalidPrivateKey,
}
