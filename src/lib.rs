// Reusable library API, shared by the CLI and the helper binaries
pub mod errors;
mod letter_char;
pub mod log;
pub mod puzzle;
pub mod search;
pub mod solver;
pub mod validator;
pub mod word_list;

pub use letter_char::{LETTERS_PER_SIDE, MIN_WORD_LEN, NUM_PUZZLE_LETTERS, NUM_SIDES};
