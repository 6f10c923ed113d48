use core::cell::Cell;

use crate::constants::Node;

use super::{sha256::Sha256_256, HashChain};

thread_local! {
    static INVOCATIONS: Cell<usize> = const { Cell::new(0) };
}

/// `Sha256_256` that counts finalized digests on the current thread.
#[derive(Debug, Default, Clone)]
pub struct CountingSha256 {
    hasher: Sha256_256,
}

impl CountingSha256 {
    pub fn reset_invocations() {
        INVOCATIONS.with(|count| count.set(0));
    }

    pub fn invocations() -> usize {
        INVOCATIONS.with(Cell::get)
    }

    fn count() {
        INVOCATIONS.with(|count| count.set(count.get() + 1));
    }
}

impl HashChain for CountingSha256 {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn chain(self, data: &[u8]) -> Self {
        CountingSha256 {
            hasher: self.hasher.chain(data),
        }
    }

    fn finalize(self) -> Node {
        Self::count();
        self.hasher.finalize()
    }

    fn finalize_reset(&mut self) -> Node {
        Self::count();
        self.hasher.finalize_reset()
    }
}
