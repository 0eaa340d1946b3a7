/*
 * Copyright 2025 RoomAccess Authors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Random display identities for callers that do not supply one.

use rand::Rng;

const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const IDENTITY_LEN: usize = 10;

/// Generate a 10-character alphanumeric identity.
///
/// The identity is display-only; it carries no authorization weight.
pub fn random_identity() -> String {
    let mut rng = rand::thread_rng();
    (0..IDENTITY_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_ten_alphanumeric_chars() {
        for _ in 0..100 {
            let identity = random_identity();
            assert_eq!(identity.len(), 10);
            assert!(identity.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn two_identities_differ() {
        // 62^10 values; a collision here means the RNG is broken.
        assert_ne!(random_identity(), random_identity());
    }
}
