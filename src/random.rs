use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Supplies the bytes consumed by `Cxkk`.
///
/// The machine holds one as a boxed field so tests can hand it a seeded
/// generator or a fixed sequence.
pub trait RandomSource {
    fn next_byte(&mut self) -> u8;
}

impl<R: RngCore> RandomSource for R {
    fn next_byte(&mut self) -> u8 {
        (self.next_u32() & 0xFF) as u8
    }
}

/// A generator seeded from system entropy
pub fn from_entropy() -> Box<dyn RandomSource> {
    Box::new(StdRng::from_entropy())
}

/// A generator that yields the same sequence for the same seed
pub fn from_seed(seed: u64) -> Box<dyn RandomSource> {
    Box::new(StdRng::seed_from_u64(seed))
}

/// Cycles through a fixed list of bytes
#[derive(Clone, Debug)]
pub struct Sequence {
    bytes: Vec<u8>,
    position: usize,
}

impl Sequence {
    /// # Arguments
    /// * `bytes` the values to hand out in order
    ///
    /// # Panics
    /// If `bytes` is empty.
    pub fn new(bytes: &[u8]) -> Self {
        assert!(!bytes.is_empty(), "a random Sequence needs at least one byte");
        Sequence {
            bytes: bytes.to_vec(),
            position: 0,
        }
    }
}

impl RandomSource for Sequence {
    fn next_byte(&mut self) -> u8 {
        let byte = self.bytes[self.position];
        self.position = (self.position + 1) % self.bytes.len();
        byte
    }
}
