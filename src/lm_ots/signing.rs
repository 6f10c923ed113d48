use core::fmt;

use tinyvec::ArrayVec;

use crate::{
    constants::{Node, D_MESG, ENCODED_MESSAGE_HASH_MAX_LEN},
    error::Error,
    hasher::HashChain,
    util::{hex::HexFmt, ustr::u32str},
};

use super::{
    chains::walk_chains,
    definitions::{LmotsPrivateKey, LmotsSignature},
    parameters::LmotsParameter,
};

/// Output of [`sign`]: the signature together with the intermediate values it was
/// derived from.
///
/// Everything but `signature` is diagnostic; external evaluators that recompute a
/// signature check can compare against these step by step.
pub struct SigningResult<H: HashChain> {
    pub signature: LmotsSignature<H>,
    /// `Q = H(I || u32str(q) || D_MESG || C || message)`
    pub message_hash: Node,
    /// Cksm(Q), already shifted left by `ls`.
    pub checksum: u16,
    /// `Q || u16str(Cksm(Q))`
    pub encoded_message_hash: ArrayVec<[u8; ENCODED_MESSAGE_HASH_MAX_LEN]>,
    /// `I || u32str(q) || D_MESG || C || message`
    #[cfg(feature = "std")]
    pub pre_image: Vec<u8>,
}

impl<H: HashChain> Clone for SigningResult<H> {
    fn clone(&self) -> Self {
        SigningResult {
            signature: self.signature.clone(),
            message_hash: self.message_hash.clone(),
            checksum: self.checksum,
            encoded_message_hash: self.encoded_message_hash.clone(),
            #[cfg(feature = "std")]
            pre_image: self.pre_image.clone(),
        }
    }
}

// The pre-image is fully determined by the other fields and the signing inputs.
impl<H: HashChain> PartialEq for SigningResult<H> {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
            && self.message_hash == other.message_hash
            && self.checksum == other.checksum
            && self.encoded_message_hash == other.encoded_message_hash
    }
}

impl<H: HashChain> Eq for SigningResult<H> {}

impl<H: HashChain> fmt::Debug for SigningResult<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningResult")
            .field("signature", &self.signature)
            .field("message_hash", &HexFmt(self.message_hash.as_slice()))
            .field("checksum", &self.checksum)
            .field(
                "encoded_message_hash",
                &HexFmt(self.encoded_message_hash.as_slice()),
            )
            .finish_non_exhaustive()
    }
}

pub(crate) fn calculate_message_hash<H: HashChain>(
    identifier: &[u8],
    leaf_index: u32,
    signature_randomizer: &[u8],
    message: &[u8],
) -> Node {
    H::default()
        .chain(identifier)
        .chain(&u32str(leaf_index))
        .chain(&D_MESG)
        .chain(signature_randomizer)
        .chain(message)
        .finalize()
}

#[cfg(feature = "std")]
fn message_pre_image(
    identifier: &[u8],
    leaf_index: u32,
    signature_randomizer: &[u8],
    message: &[u8],
) -> Vec<u8> {
    let mut pre_image = Vec::with_capacity(
        identifier.len() + 4 + D_MESG.len() + signature_randomizer.len() + message.len(),
    );

    pre_image.extend_from_slice(identifier);
    pre_image.extend_from_slice(&u32str(leaf_index));
    pre_image.extend_from_slice(&D_MESG);
    pre_image.extend_from_slice(signature_randomizer);
    pre_image.extend_from_slice(message);

    pre_image
}

/// Signs `message` with the one-time key `private_key` and the randomizer `C`.
///
/// `Y_i` is `x_i` advanced by `coef(Q || Cksm(Q), i)` chain steps; a digit of zero
/// publishes `x_i` itself.
pub fn sign<H: HashChain>(
    lmots_parameter: &LmotsParameter<H>,
    message: &[u8],
    private_key: &LmotsPrivateKey<H>,
    identifier: &[u8],
    leaf_index: u32,
    signature_randomizer: &[u8],
) -> Result<SigningResult<H>, Error> {
    let n = lmots_parameter.get_hash_function_output_size();

    if signature_randomizer.len() != n {
        return Err(Error::InvalidRandomizerLength {
            expected: n,
            got: signature_randomizer.len(),
        });
    }

    if !private_key.has_shape(lmots_parameter) {
        return Err(Error::InvalidPrivateKey);
    }

    let message_hash =
        calculate_message_hash::<H>(identifier, leaf_index, signature_randomizer, message);
    let checksum = lmots_parameter.checksum(message_hash.as_slice());
    let encoded_message_hash = lmots_parameter.append_checksum_to(message_hash.as_slice());

    let signature_data = walk_chains::<H, _>(identifier, leaf_index, private_key.chains(), |i| {
        (0, lmots_parameter.coef(&encoded_message_hash, i) as usize)
    });

    tracing::trace!(
        leaf_index,
        message_hash = %HexFmt(message_hash.as_slice()),
        checksum,
        "signed message with LM-OTS key"
    );

    let mut randomizer = Node::new();
    randomizer.extend_from_slice(signature_randomizer);

    Ok(SigningResult {
        signature: LmotsSignature::new(randomizer, signature_data),
        message_hash,
        checksum,
        encoded_message_hash,
        #[cfg(feature = "std")]
        pre_image: message_pre_image(identifier, leaf_index, signature_randomizer, message),
    })
}

/// [`sign`] with a randomizer `C` drawn from the operating system's RNG.
#[cfg(feature = "rand")]
pub fn sign_random<H: HashChain>(
    lmots_parameter: &LmotsParameter<H>,
    message: &[u8],
    private_key: &LmotsPrivateKey<H>,
    identifier: &[u8],
    leaf_index: u32,
) -> Result<SigningResult<H>, Error> {
    let mut signature_randomizer = Node::new();
    signature_randomizer.resize(lmots_parameter.get_hash_function_output_size(), 0u8);

    crate::util::random::get_random(signature_randomizer.as_mut_slice());

    sign(
        lmots_parameter,
        message,
        private_key,
        identifier,
        leaf_index,
        signature_randomizer.as_slice(),
    )
}
