use crate::{
    constants::{HashChains, D_PRIV},
    error::Error,
    hasher::HashChain,
    util::{
        hex::HexFmt,
        ustr::{u16str, u32str, u8str},
    },
};

use super::{
    chains::{hash_chain_tops, walk_chains},
    definitions::{LmotsPrivateKey, LmotsPublicKey},
    parameters::LmotsParameter,
};

/// `x_i = H(I || u32str(q) || u16str(i) || 0xff || seed)` for every chain `i`.
pub fn generate_private_key<H: HashChain>(
    lmots_parameter: &LmotsParameter<H>,
    seed: &[u8],
    identifier: &[u8],
    leaf_index: u32,
) -> LmotsPrivateKey<H> {
    let mut hasher = lmots_parameter.get_hasher();
    let mut key = HashChains::new();

    for index in 0..lmots_parameter.get_hash_chain_count() {
        hasher.update(identifier);
        hasher.update(&u32str(leaf_index));
        hasher.update(&u16str(index));
        hasher.update(&u8str(D_PRIV));
        hasher.update(seed);

        key.push(hasher.finalize_reset());
    }

    tracing::trace!(
        leaf_index,
        chains = key.len(),
        "generated LM-OTS private key"
    );

    LmotsPrivateKey::new(key)
}

pub fn generate_public_key<H: HashChain>(
    lmots_parameter: &LmotsParameter<H>,
    private_key: &LmotsPrivateKey<H>,
    identifier: &[u8],
    leaf_index: u32,
) -> Result<LmotsPublicKey<H>, Error> {
    if !private_key.has_shape(lmots_parameter) {
        return Err(Error::InvalidPrivateKey);
    }

    let max_word_size = lmots_parameter.get_max_word_size();

    let tops = walk_chains::<H, _>(identifier, leaf_index, private_key.chains(), |_| {
        (0, max_word_size)
    });

    let public_key = hash_chain_tops::<H>(identifier, leaf_index, &tops);

    tracing::trace!(
        leaf_index,
        public_key = %HexFmt(public_key.as_slice()),
        "derived LM-OTS public key"
    );

    Ok(LmotsPublicKey::new(public_key))
}
