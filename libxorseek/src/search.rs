use std::ops::Range;

use log::debug;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::SearchError;
use crate::{derive_keystream, PERMUTATION_LEN, SEED_SPACE};

/// A seed whose derived keystream matched the target prefix
#[derive(Debug)]
pub struct SeedMatch {
    /// Matching seed
    pub seed: u32,
    /// Keystream derived from the seed
    pub keystream: Vec<u8>,
}

/// Outcome of a successful recovery
#[derive(Debug)]
pub struct Recovery {
    /// Seed that produced the keystream
    pub seed: u32,
    /// Keystream derived from the seed
    pub keystream: Vec<u8>,
    /// Ciphertext decoded with the keystream
    pub plaintext: Vec<u8>,
}

/// Search a seed range for a keystream matching the target prefix.
///
/// Seeds are tested in parallel and order-independently; the first match
/// found wins and remaining work stops cooperatively. `progress` is invoked
/// once per tested seed. `target_prefix` must not be longer than
/// `keystream_length`.
pub fn search_seeds<F>(
    seeds: Range<u32>,
    target_prefix: &[u8],
    keystream_length: usize,
    progress: F,
) -> Option<SeedMatch>
where
    F: Fn() + Sync,
{
    seeds.into_par_iter().find_map_any(|seed| {
        let keystream = derive_keystream(u64::from(seed), keystream_length);
        let matched = keystream[..target_prefix.len()] == *target_prefix;
        progress();

        if matched {
            debug!("seed {seed:08X} matches the target prefix");
            Some(SeedMatch { seed, keystream })
        } else {
            None
        }
    })
}

/// Recover the seed and plaintext behind a XOR-encrypted ciphertext.
///
/// Searches the full 16-bit seed space for a keystream whose prefix XORs the
/// known prefix into the ciphertext. `Ok(None)` means the space was exhausted
/// without a match.
pub fn recover<F>(
    prefix: &[u8],
    ciphertext: &[u8],
    progress: F,
) -> Result<Option<Recovery>, SearchError>
where
    F: Fn() + Sync,
{
    check_lengths(prefix, ciphertext)?;

    let target_prefix: Vec<u8> = prefix
        .iter()
        .zip(ciphertext)
        .map(|(known, encrypted)| known ^ encrypted)
        .collect();

    let found = search_seeds(0..SEED_SPACE, &target_prefix, ciphertext.len(), progress);
    if found.is_none() {
        debug!("seed space exhausted without a match");
    }

    Ok(found.map(|m| {
        let plaintext = ciphertext
            .iter()
            .zip(&m.keystream)
            .map(|(encrypted, key)| encrypted ^ key)
            .collect();

        Recovery {
            seed: m.seed,
            keystream: m.keystream,
            plaintext,
        }
    }))
}

fn check_lengths(prefix: &[u8], ciphertext: &[u8]) -> Result<(), SearchError> {
    if prefix.len() > ciphertext.len() {
        return Err(SearchError::PrefixTooLong {
            prefix: prefix.len(),
            ciphertext: ciphertext.len(),
        });
    }

    if ciphertext.len() > PERMUTATION_LEN {
        return Err(SearchError::CiphertextTooLong {
            maximum: PERMUTATION_LEN,
            received: ciphertext.len(),
        });
    }

    Ok(())
}
