//! RngSeed: доменный seed для перемешивания колод стола.
//!
//! Позволяет:
//!   - хранить базовый seed стола ([u8;32]);
//!   - детерминированно выводить seed каждой раздачи:
//!         new = H(domain || base || table_id || hand_id || hand_index)
//!   - создавать DeterministicRng из seed.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

const DOMAIN: &[u8] = b"BOMBPOT_DUAL_BOARD_RNG_V1";

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретной раздачи стола.
    pub fn derive(&self, table_id: u64, hand_id: u64, hand_index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN);
        hasher.update(self.bytes);
        hasher.update(table_id.to_le_bytes());
        hasher.update(hand_id.to_le_bytes());
        hasher.update(hand_index.to_le_bytes());

        Self {
            bytes: hasher.finalize().into(),
        }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
