//! Password generation.

use std::num::NonZeroUsize;

use zeroize::Zeroizing;

use super::charset::CharSet;
use super::config::Config;
use super::error::GenerationError;
use crate::rand::IndexSource;

/// Generated password; wiped from memory on drop.
pub type Password = Zeroizing<String>;

/// Generate one password for a validated configuration.
///
/// Seeds one character per mandatory set, fills the rest from the pool,
/// then shuffles the whole buffer so the seeded characters carry no
/// positional meaning.
pub fn generate<S: IndexSource>(config: &Config, source: &mut S) -> Result<Password, GenerationError> {
    let mut buf: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(config.length()));

    log::debug!(
        "generating {} characters with {} mandatory sets",
        config.length(),
        config.mandatory().len()
    );

    pick_mandatory(config.mandatory(), source, &mut buf)?;
    fill_from_pool(config, source, &mut buf)?;
    shuffle(buf.as_mut_slice(), source)?;

    let mut password = Zeroizing::new(String::with_capacity(
        buf.iter().map(|c| c.len_utf8()).sum(),
    ));
    password.extend(buf.iter());
    Ok(password)
}

/// One uniformly chosen character from each set, in set order.
fn pick_mandatory<S: IndexSource>(
    sets: &[CharSet],
    source: &mut S,
    buf: &mut Vec<char>,
) -> Result<(), GenerationError> {
    for set in sets {
        let i = source.index(set.size())?;
        buf.push(set[i]);
    }
    Ok(())
}

/// Discretionary characters followed by every mandatory set.
pub fn pool(config: &Config) -> Zeroizing<Vec<char>> {
    let size = config.discretionary().len()
        + config.mandatory().iter().map(|s| s.len()).sum::<usize>();

    let mut pool: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(size));
    pool.extend_from_slice(config.discretionary());
    for set in config.mandatory() {
        pool.extend_from_slice(set);
    }
    pool
}

fn fill_from_pool<S: IndexSource>(
    config: &Config,
    source: &mut S,
    buf: &mut Vec<char>,
) -> Result<(), GenerationError> {
    let remaining = config.length().saturating_sub(buf.len());
    if remaining == 0 {
        return Ok(());
    }

    let pool = pool(config);
    let size = NonZeroUsize::new(pool.len()).ok_or(GenerationError::EmptyPool)?;
    log::trace!("filling {remaining} positions from a pool of {size}");

    for _ in 0..remaining {
        buf.push(pool[source.index(size)?]);
    }
    Ok(())
}

/// Knuth shuffle: position `i` swaps with a uniform pick from `i..len`.
pub fn shuffle<T, S: IndexSource>(buf: &mut [T], source: &mut S) -> Result<(), GenerationError> {
    let len = buf.len();
    for i in 0..len.saturating_sub(1) {
        // len - i, at least 2 here
        let span = NonZeroUsize::MIN.saturating_add(len - 1 - i);
        let j = source.index(span)?;
        buf.swap(i, i + j);
    }
    Ok(())
}
