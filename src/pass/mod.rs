//! Password generation and strength scoring.

pub mod charset;
mod generate;
mod options;
pub mod strength;

pub use charset::CharClass;
pub use generate::{generate, generate_batch, generate_each, generate_with};
pub use options::{DEFAULT_LENGTH, GenerationOptions, MAX_LENGTH, MIN_LENGTH, Password};
pub use strength::{StrengthLevel, entropy_bits, score};
