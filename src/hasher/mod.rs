use core::fmt::Debug;

use crate::{
    constants::Node,
    util::ustr::{u16str, u32str, u8str},
};

#[cfg(test)]
pub(crate) mod counting;
pub mod sha256;
pub mod shake256;

/**
 *
 * This trait is used inside the library to generate hashes. Standard software implementations exist as
 * `Sha256_256`, `Sha256_192`, `Shake256_256` and `Shake256_192`.
 * It can be used to outsource calculations to hardware accelerators, or to instrument the hash
 * invocations of the engine (e.g. for test vector generation).
 *
 * The digest length `n` of an implementation is measured by hashing the empty input, so `finalize`
 * must always return the same number of bytes.
 * */
pub trait HashChain: Debug + Default + Clone + Send + Sync {
    fn update(&mut self, data: &[u8]);
    fn chain(self, data: &[u8]) -> Self;
    fn finalize(self) -> Node;
    fn finalize_reset(&mut self) -> Node;

    /// RFC 8554 chain step: `H(I || u32str(q) || u16str(i) || u8str(j) || value)`
    fn hash_chain_step(
        &mut self,
        identifier: &[u8],
        leaf_index: u32,
        hash_chain_id: u16,
        j: u8,
        value: &[u8],
    ) -> Node {
        self.update(identifier);
        self.update(&u32str(leaf_index));
        self.update(&u16str(hash_chain_id));
        self.update(&u8str(j));
        self.update(value);
        self.finalize_reset()
    }

    /// Walks chain `hash_chain_id` from `initial_value`, applying the steps `from..to` in order.
    fn do_hash_chain(
        &mut self,
        identifier: &[u8],
        leaf_index: u32,
        hash_chain_id: u16,
        initial_value: &[u8],
        from: usize,
        to: usize,
    ) -> Node {
        let mut tmp = Node::new();
        tmp.extend_from_slice(initial_value);

        for j in from..to {
            // We assume that the hasher is fresh initialized on the first round
            tmp = self.hash_chain_step(
                identifier,
                leaf_index,
                hash_chain_id,
                j as u8,
                tmp.as_slice(),
            );
        }

        tmp
    }
}
