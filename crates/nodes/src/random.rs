//! Random index source backed by the thread-local RNG.

use rand::Rng;

use crate::IndexSource;

#[derive(Debug, Clone, Default)]
pub struct ThreadRngIndex;

impl IndexSource for ThreadRngIndex {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
