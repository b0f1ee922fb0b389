//! Password generation.

use rand::Rng;
use tracing::debug;

use super::charset;
use super::options::{GenerationOptions, Password};
use crate::error::Result;

/// Generate a password with the thread-local CSPRNG.
pub fn generate(options: &GenerationOptions) -> Result<Password> {
    generate_with(options, &mut rand::thread_rng())
}

/// Generate a password drawing from `rng`.
///
/// Fails with `InvalidConfiguration` when no class is enabled; options are
/// never modified here. Length is clamped to the supported range.
pub fn generate_with<R: Rng + ?Sized>(options: &GenerationOptions, rng: &mut R) -> Result<Password> {
    options.validate()?;

    let chars = charset::build(options);
    let length = options.clamped_length();
    if length != options.length {
        debug!(requested = options.length, length, "password length clamped");
    }

    let password: String = (0..length).map(|_| random_char(&chars, rng)).collect();
    debug!(length, pool = chars.len(), "password generated");
    Ok(Password::new(password))
}

/// Generate `count` independent passwords with the same options.
pub fn generate_batch<R: Rng + ?Sized>(
    options: &GenerationOptions,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>> {
    options.validate()?;
    (0..count).map(|_| generate_with(options, rng)).collect()
}

/// Generate `count` passwords one at a time, handing each to `sink`.
///
/// Each password is dropped (and wiped) before the next is drawn, so memory
/// stays flat for any count.
pub fn generate_each<R, F>(
    options: &GenerationOptions,
    count: usize,
    rng: &mut R,
    mut sink: F,
) -> Result<()>
where
    R: Rng + ?Sized,
    F: FnMut(&Password) -> Result<()>,
{
    options.validate()?;
    for _ in 0..count {
        let password = generate_with(options, rng)?;
        sink(&password)?;
    }
    Ok(())
}

#[inline]
fn random_char<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())] as char
}
