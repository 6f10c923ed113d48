use core::fmt;

/// Renders public byte strings (digests, randomizers, signature chains) as
/// lowercase hex in log events and `Debug` output.
#[derive(Clone, Copy)]
pub struct HexFmt<'a>(pub &'a [u8]);

impl fmt::Display for HexFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
