//! Sources of random bytes for password generation.

use rand::{CryptoRng, RngCore};

/// A supplier of cryptographically secure random bytes.
///
/// Every `rand` generator that is marked [`CryptoRng`] is an entropy source; generators that are
/// not cryptographically secure can't be used to generate passwords.
pub trait EntropySource {
    /// Fill `buf` entirely with fresh random bytes, or fail without a partial result being used.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error>;
}

impl<R> EntropySource for R
where
    R: RngCore + CryptoRng + ?Sized,
{
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error> {
        self.try_fill_bytes(buf)
    }
}

/// The operating system's random source.
///
/// `OsRng` holds no state, so each caller (and each thread) can have its own.
pub fn os_entropy() -> rand::rngs::OsRng {
    rand::rngs::OsRng
}

#[cfg(test)]
mod tests {
    use super::{os_entropy, EntropySource};

    #[test]
    fn os_entropy_fills_buffer() {
        let mut buf = [0u8; 64];
        os_entropy().fill(&mut buf).unwrap();
        // All zeros has probability 2^-512.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn thread_rng_is_a_source() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        let mut rng = rand::thread_rng();
        EntropySource::fill(&mut rng, &mut a).unwrap();
        EntropySource::fill(&mut rng, &mut b).unwrap();
        assert_ne!(a, b);
    }
}
