/// # PRNG
///
/// Small deterministic xorshift-style generator. The same seed always yields the
/// same sequence, which makes magic-key searches reproducible.
#[derive(Debug, Clone)]
pub struct PRNG {
    s: [u64; 4],
}

impl PRNG {
    pub const DEFAULT_SEED: u64 = 0x6B51FF299F6A3AEE;

    /// Expands `seed` into the four state words with splitmix64, so no seed
    /// (zero included) leaves the generator stuck at an all-zero state
    pub const fn new(seed: u64) -> Self {
        let mut state = seed;
        let mut s = [0; 4];
        let mut i = 0;

        while i < s.len() {
            s[i] = splitmix64(&mut state);
            i += 1;
        }

        PRNG { s }
    }

    #[inline]
    pub const fn random_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.s;
        let t = *s1 << 17;

        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;
        *s2 ^= t;
        *s3 = s3.rotate_left(45);

        *s0
    }

    /// AND of three draws, so each bit is set with probability 1/8
    #[inline]
    pub const fn random_sparse_u64(&mut self) -> u64 {
        self.random_u64() & self.random_u64() & self.random_u64()
    }
}

const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

impl Default for PRNG {
    fn default() -> Self {
        PRNG::new(Self::DEFAULT_SEED)
    }
}
