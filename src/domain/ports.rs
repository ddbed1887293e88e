use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Source of randomly generated cipher keys.
pub trait KeySource {
    fn generate_key(&mut self, alphabet: &[u8], length: usize) -> String;
}

/// Any `rand` generator is a key source. Tests hand in a seeded `StdRng`.
impl<R: Rng> KeySource for R {
    fn generate_key(&mut self, alphabet: &[u8], length: usize) -> String {
        if alphabet.is_empty() || length == 0 {
            return String::new();
        }

        // Enough copies of the alphabet to cover `length`, with one to spare.
        let copies = length.div_ceil(alphabet.len()) + 1;
        let mut pool = alphabet.repeat(copies);
        pool.shuffle(self);

        pool.into_iter()
            .take(length)
            .map(char::from)
            .collect()
    }
}

pub fn default_key_source() -> ThreadRng {
    rand::thread_rng()
}
