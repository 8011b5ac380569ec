pub mod perft;
pub mod prng;

pub use perft::{perft, perft_bench, perft_bench_list, perft_divide};
pub use prng::PRNG;
