use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// Системный RNG (thread_rng) – для обычной игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// "Перемешивание" заданной перестановкой: элемент `order[i]` исходного
/// среза встаёт на место `i`. Для тестов, где нужна конкретная колода.
///
/// Если длина перестановки не совпадает со срезом или это не перестановка,
/// срез остаётся как есть.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationRng {
    order: Vec<usize>,
}

impl PermutationRng {
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Тождественная перестановка: колода остаётся в каноническом порядке.
    pub fn identity(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    fn is_permutation_of(&self, len: usize) -> bool {
        if self.order.len() != len {
            return false;
        }
        let mut seen = vec![false; len];
        self.order
            .iter()
            .all(|&i| i < len && !std::mem::replace(&mut seen[i], true))
    }
}

impl RandomSource for PermutationRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        if !self.is_permutation_of(slice.len()) {
            return;
        }

        // Применяем перестановку на месте, проходя по циклам.
        let n = slice.len();
        let mut done = vec![false; n];
        for start in 0..n {
            if done[start] {
                continue;
            }
            let mut i = start;
            loop {
                done[i] = true;
                let src = self.order[i];
                if src == start {
                    break;
                }
                slice.swap(i, src);
                i = src;
            }
        }
    }
}
