// ─────────────────────────────────────────────────────────────────────
// Dagbench — Stable Random Oracle
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Stable hash-to-unit-interval oracle.
//!
//! The randomized dependence patterns and the imbalance kernels need
//! "random" values that are a pure function of a small integer key: the
//! same `(graph_index, radix, dset, point, peer)` tuple must produce the
//! same value in every run, in every build, and on every platform,
//! because the forward and reverse dependency views recompute each
//! other's draws. A seeded stream RNG cannot give that guarantee (the
//! stream depends on draw order), so the oracle hashes the key's
//! little-endian byte layout directly.
//!
//! Construction: FNV-1a over the key bytes, a splitmix64 finalizer to
//! spread the low-entropy tails, then the top 53 bits mapped to [0, 1).

const FNV_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut h = FNV_OFFSET;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Hash arbitrary bytes to a uniform value in [0, 1).
pub fn uniform_from_bytes(bytes: &[u8]) -> f64 {
    let h = splitmix64(fnv1a(bytes));
    (h >> 11) as f64 / (1u64 << 53) as f64
}

/// Hash a tuple of signed 64-bit words to a uniform value in [0, 1).
///
/// The key is serialized as consecutive little-endian 8-byte words, so
/// the result is byte-exact regardless of host endianness.
pub fn uniform_f64(key: &[i64]) -> f64 {
    // Dependency keys are at most 5 words; avoid allocating for them.
    let mut buf = [0u8; 64];
    if key.len() * 8 <= buf.len() {
        for (i, &word) in key.iter().enumerate() {
            buf[i * 8..(i + 1) * 8].copy_from_slice(&word.to_le_bytes());
        }
        uniform_from_bytes(&buf[..key.len() * 8])
    } else {
        let bytes: Vec<u8> = key.iter().flat_map(|w| w.to_le_bytes()).collect();
        uniform_from_bytes(&bytes)
    }
}
