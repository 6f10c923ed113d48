use core::ops::Deref;
use tinyvec::ArrayVec;
use zeroize::Zeroize;

pub mod coef;
pub mod hex;
#[cfg(feature = "rand")]
pub mod random;
pub mod ustr;

/// Fixed-capacity byte buffer that is wiped on drop. Used for serialized
/// private key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretBytes<const N: usize>(ArrayVec<[u8; N]>);

impl<const N: usize> SecretBytes<N> {
    pub(crate) fn new() -> Self {
        Self(ArrayVec::new())
    }

    pub(crate) fn extend_from_slice(&mut self, data: &[u8]) {
        self.0.extend_from_slice(data);
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<const N: usize> Zeroize for SecretBytes<N> {
    fn zeroize(&mut self) {
        // The full backing array, not only the initialized prefix.
        self.0.set_len(N);
        self.0.as_mut_slice().zeroize();
        self.0.clear();
    }
}

impl<const N: usize> Drop for SecretBytes<N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const N: usize> core::fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SecretBytes([REDACTED; {}])", self.0.len())
    }
}
