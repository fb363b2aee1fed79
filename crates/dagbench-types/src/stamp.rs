// ─────────────────────────────────────────────────────────────────────
// Dagbench — Stamp Wire Format and Scratch Magic
// ─────────────────────────────────────────────────────────────────────
//! The verification wire format.
//!
//! An output buffer of `N` bytes (`N >= 16`, complete records only) is a
//! packed array of `N / 16` stamps, each two little-endian signed 64-bit
//! integers `(timestep, point)`. Consumers check every record of every
//! input against the producer they expect, which catches any routing or
//! ordering mistake a runtime makes one timestep after it happens.
//!
//! Scratch regions carry a magic sentinel in their first 8 bytes so the
//! core can tell "initialized by `prepare_scratch`" from garbage.

use serde::{Deserialize, Serialize};

/// Sentinel written over scratch regions at 8-byte granularity.
pub const SCRATCH_MAGIC: u64 = 0x5C4A_7C8B;

/// Size of one encoded `(timestep, point)` record.
pub const STAMP_BYTES: usize = 16;

/// One verification record: which task produced a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stamp {
    pub timestep: i64,
    pub point: i64,
}

impl Stamp {
    pub fn new(timestep: i64, point: i64) -> Self {
        Self { timestep, point }
    }

    /// Encode as 16 little-endian bytes.
    pub fn to_le_bytes(self) -> [u8; STAMP_BYTES] {
        let mut out = [0u8; STAMP_BYTES];
        out[..8].copy_from_slice(&self.timestep.to_le_bytes());
        out[8..].copy_from_slice(&self.point.to_le_bytes());
        out
    }

    /// Decode from 16 little-endian bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), STAMP_BYTES);
        let mut ts = [0u8; 8];
        let mut p = [0u8; 8];
        ts.copy_from_slice(&bytes[..8]);
        p.copy_from_slice(&bytes[8..STAMP_BYTES]);
        Self {
            timestep: i64::from_le_bytes(ts),
            point: i64::from_le_bytes(p),
        }
    }
}

/// Fill every complete 16-byte record of `buf` with `stamp`.
///
/// Trailing bytes beyond the last complete record are left untouched.
pub fn write_stamps(buf: &mut [u8], stamp: Stamp) {
    let encoded = stamp.to_le_bytes();
    for record in buf.chunks_exact_mut(STAMP_BYTES) {
        record.copy_from_slice(&encoded);
    }
}

/// Iterate the complete 16-byte records of `buf` as stamps.
pub fn read_stamps(buf: &[u8]) -> impl Iterator<Item = Stamp> + '_ {
    buf.chunks_exact(STAMP_BYTES).map(Stamp::from_le_bytes)
}
