use core::{fmt, marker::PhantomData};

use subtle::{Choice, ConstantTimeEq};
use tinyvec::ArrayVec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    constants::{
        HashChains, Node, MAX_HASH_SIZE, MAX_LMOTS_CHAIN_DATA_LENGTH,
        MAX_LMOTS_PRIVATE_KEY_LENGTH, MAX_LMOTS_SIGNATURE_LENGTH, MAX_NUM_WINTERNITZ_CHAINS,
    },
    hasher::HashChain,
    util::{hex::HexFmt, SecretBytes},
};

use super::parameters::LmotsParameter;

/// Splits `data` into `n`-byte chain values.
fn parse_chains(data: &[u8], hash_function_output_size: usize) -> HashChains {
    data.chunks(hash_function_output_size)
        .map(|chunk| {
            let mut node = Node::new();
            node.extend_from_slice(chunk);
            node
        })
        .collect()
}

fn chains_have_shape(chains: &[Node], parameter_chain_count: u16, output_size: usize) -> bool {
    chains.len() == parameter_chain_count as usize
        && chains.iter().all(|chain| chain.len() == output_size)
}

/// The `p` secret chain starting values `x_0 .. x_{p-1}`.
///
/// One-time key: sign at most one message with it. The chain values are overwritten
/// when the key is dropped, and neither `Debug` nor the `tracing` events of this crate
/// reveal them.
pub struct LmotsPrivateKey<H: HashChain> {
    key: HashChains,
    phantom_data: PhantomData<H>,
}

impl<H: HashChain> LmotsPrivateKey<H> {
    pub(crate) fn new(key: HashChains) -> Self {
        LmotsPrivateKey {
            key,
            phantom_data: PhantomData,
        }
    }

    pub fn chain_count(&self) -> usize {
        self.key.len()
    }

    pub fn get_chain(&self, index: usize) -> Option<&[u8]> {
        self.key.get(index).map(|chain| chain.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.key.iter().map(|chain| chain.as_slice())
    }

    pub(crate) fn chains(&self) -> &[Node] {
        self.key.as_slice()
    }

    pub(crate) fn has_shape(&self, lmots_parameter: &LmotsParameter<H>) -> bool {
        chains_have_shape(
            &self.key,
            lmots_parameter.get_hash_chain_count(),
            lmots_parameter.get_hash_function_output_size(),
        )
    }

    /// `x_0 || x_1 || ... || x_{p-1}`, in a buffer that is wiped on drop.
    pub fn to_binary_representation(&self) -> SecretBytes<MAX_LMOTS_PRIVATE_KEY_LENGTH> {
        let mut result = SecretBytes::new();

        for chain in self.key.iter() {
            result.extend_from_slice(chain.as_slice());
        }

        result
    }

    pub fn from_binary_representation(
        data: &[u8],
        lmots_parameter: &LmotsParameter<H>,
    ) -> Option<Self> {
        let n = lmots_parameter.get_hash_function_output_size();
        let p = lmots_parameter.get_hash_chain_count() as usize;

        if data.len() != n * p {
            return None;
        }

        Some(Self::new(parse_chains(data, n)))
    }
}

impl<H: HashChain> Zeroize for LmotsPrivateKey<H> {
    fn zeroize(&mut self) {
        // Wipe the whole backing storage, including slots beyond the current length.
        self.key.set_len(MAX_NUM_WINTERNITZ_CHAINS);
        for chain in self.key.iter_mut() {
            chain.set_len(MAX_HASH_SIZE);
            chain.as_mut_slice().zeroize();
            chain.clear();
        }
        self.key.clear();
    }
}

impl<H: HashChain> Drop for LmotsPrivateKey<H> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<H: HashChain> ZeroizeOnDrop for LmotsPrivateKey<H> {}

impl<H: HashChain> ConstantTimeEq for LmotsPrivateKey<H> {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.key.len() != other.key.len() {
            return Choice::from(0);
        }

        self.key
            .iter()
            .zip(other.key.iter())
            .fold(Choice::from(1), |result, (lhs, rhs)| {
                result & lhs.as_slice().ct_eq(rhs.as_slice())
            })
    }
}

impl<H: HashChain> PartialEq for LmotsPrivateKey<H> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<H: HashChain> Eq for LmotsPrivateKey<H> {}

impl<H: HashChain> fmt::Debug for LmotsPrivateKey<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LmotsPrivateKey")
            .field("chains", &self.key.len())
            .finish_non_exhaustive()
    }
}

/// The public key `K = H(I || u32str(q) || D_PBLC || y_0 || ... || y_{p-1})`.
pub struct LmotsPublicKey<H: HashChain> {
    key: Node,
    phantom_data: PhantomData<H>,
}

impl<H: HashChain> LmotsPublicKey<H> {
    pub(crate) fn new(key: Node) -> Self {
        LmotsPublicKey {
            key,
            phantom_data: PhantomData,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        self.key.as_slice()
    }

    pub fn to_binary_representation(&self) -> Node {
        self.key.clone()
    }

    pub fn from_binary_representation(
        data: &[u8],
        lmots_parameter: &LmotsParameter<H>,
    ) -> Option<Self> {
        if data.len() != lmots_parameter.get_hash_function_output_size() {
            return None;
        }

        let mut key = Node::new();
        key.extend_from_slice(data);

        Some(Self::new(key))
    }
}

impl<H: HashChain> Clone for LmotsPublicKey<H> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<H: HashChain> ConstantTimeEq for LmotsPublicKey<H> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.key.as_slice().ct_eq(other.key.as_slice())
    }
}

impl<H: HashChain> PartialEq for LmotsPublicKey<H> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<H: HashChain> Eq for LmotsPublicKey<H> {}

impl<H: HashChain> fmt::Debug for LmotsPublicKey<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LmotsPublicKey")
            .field(&HexFmt(self.key.as_slice()))
            .finish()
    }
}

/// An LM-OTS signature `{C, Y}`.
///
/// The fields are public so that callers embedding the signature in a larger
/// structure can address `C` and the `Y_i` directly. [`crate::LmotsParameter::verify`]
/// checks their shape and rejects anything not matching the parameter set.
pub struct LmotsSignature<H: HashChain> {
    pub signature_randomizer: Node,
    pub signature_data: HashChains,
    phantom_data: PhantomData<H>,
}

impl<H: HashChain> LmotsSignature<H> {
    pub fn new(signature_randomizer: Node, signature_data: HashChains) -> Self {
        LmotsSignature {
            signature_randomizer,
            signature_data,
            phantom_data: PhantomData,
        }
    }

    pub(crate) fn has_shape(&self, lmots_parameter: &LmotsParameter<H>) -> bool {
        let n = lmots_parameter.get_hash_function_output_size();

        self.signature_randomizer.len() == n
            && chains_have_shape(
                &self.signature_data,
                lmots_parameter.get_hash_chain_count(),
                n,
            )
    }

    /// `Y_0 || Y_1 || ... || Y_{p-1}`
    pub fn chain_values(&self) -> ArrayVec<[u8; MAX_LMOTS_CHAIN_DATA_LENGTH]> {
        let mut result = ArrayVec::new();

        for chain in self.signature_data.iter() {
            result.extend_from_slice(chain.as_slice());
        }

        result
    }

    /// `C || Y_0 || Y_1 || ... || Y_{p-1}`
    pub fn to_binary_representation(&self) -> ArrayVec<[u8; MAX_LMOTS_SIGNATURE_LENGTH]> {
        let mut result = ArrayVec::new();

        result.extend_from_slice(self.signature_randomizer.as_slice());

        for chain in self.signature_data.iter() {
            result.extend_from_slice(chain.as_slice());
        }

        result
    }

    pub fn from_binary_representation(
        data: &[u8],
        lmots_parameter: &LmotsParameter<H>,
    ) -> Option<Self> {
        let n = lmots_parameter.get_hash_function_output_size();
        let p = lmots_parameter.get_hash_chain_count() as usize;

        if data.len() != n * (p + 1) {
            return None;
        }

        let (randomizer, chains) = data.split_at(n);

        let mut signature_randomizer = Node::new();
        signature_randomizer.extend_from_slice(randomizer);

        Some(Self::new(signature_randomizer, parse_chains(chains, n)))
    }
}

impl<H: HashChain> Clone for LmotsSignature<H> {
    fn clone(&self) -> Self {
        Self::new(
            self.signature_randomizer.clone(),
            self.signature_data.clone(),
        )
    }
}

impl<H: HashChain> PartialEq for LmotsSignature<H> {
    fn eq(&self, other: &Self) -> bool {
        self.signature_randomizer == other.signature_randomizer
            && self.signature_data == other.signature_data
    }
}

impl<H: HashChain> Eq for LmotsSignature<H> {}

impl<H: HashChain> fmt::Debug for LmotsSignature<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LmotsSignature")
            .field(
                "signature_randomizer",
                &HexFmt(self.signature_randomizer.as_slice()),
            )
            .field("signature_data", &self.signature_data.len())
            .finish()
    }
}
