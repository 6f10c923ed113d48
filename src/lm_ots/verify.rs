use subtle::ConstantTimeEq;

use crate::{hasher::HashChain, util::hex::HexFmt};

use super::{
    chains::{hash_chain_tops, walk_chains},
    definitions::{LmotsPublicKey, LmotsSignature},
    parameters::LmotsParameter,
    signing::calculate_message_hash,
};

/// Recomputes the public key candidate `K'` from a signature.
///
/// Returns `None` if the signature does not have the shape of `lmots_parameter`
/// (`len(C) != n`, `p` chain values of `n` bytes each).
pub fn derive_key_candidate<H: HashChain>(
    lmots_parameter: &LmotsParameter<H>,
    message: &[u8],
    signature: &LmotsSignature<H>,
    identifier: &[u8],
    leaf_index: u32,
) -> Option<LmotsPublicKey<H>> {
    if !signature.has_shape(lmots_parameter) {
        tracing::trace!(
            leaf_index,
            randomizer_length = signature.signature_randomizer.len(),
            chains = signature.signature_data.len(),
            "rejected LM-OTS signature of wrong shape"
        );
        return None;
    }

    let message_hash = calculate_message_hash::<H>(
        identifier,
        leaf_index,
        signature.signature_randomizer.as_slice(),
        message,
    );
    let encoded_message_hash = lmots_parameter.append_checksum_to(message_hash.as_slice());
    let max_word_size = lmots_parameter.get_max_word_size();

    let tops = walk_chains::<H, _>(identifier, leaf_index, &signature.signature_data, |i| {
        (
            lmots_parameter.coef(&encoded_message_hash, i) as usize,
            max_word_size,
        )
    });

    Some(LmotsPublicKey::new(hash_chain_tops::<H>(
        identifier, leaf_index, &tops,
    )))
}

/// Checks `signature` over `message` against `public_key`.
///
/// Never fails: malformed signatures and keys of the wrong length verify as `false`.
/// The final comparison of `K'` and `K` runs in constant time.
pub fn verify<H: HashChain>(
    lmots_parameter: &LmotsParameter<H>,
    message: &[u8],
    signature: &LmotsSignature<H>,
    identifier: &[u8],
    leaf_index: u32,
    public_key: &LmotsPublicKey<H>,
) -> bool {
    let key_candidate = match derive_key_candidate(
        lmots_parameter,
        message,
        signature,
        identifier,
        leaf_index,
    ) {
        Some(key_candidate) => key_candidate,
        None => return false,
    };

    let valid: bool = key_candidate.ct_eq(public_key).into();

    tracing::trace!(
        leaf_index,
        key_candidate = %HexFmt(key_candidate.as_slice()),
        valid,
        "verified LM-OTS signature"
    );

    valid
}
