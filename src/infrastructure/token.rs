use crate::domain::ports::TokenGenerator;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Length of the random part of a transaction identifier.
pub const TOKEN_LEN: usize = 8;

/// Default identifier strategy: 8 alphanumeric characters from the thread
/// RNG. Best-effort uniqueness only; collisions are possible and accepted.
#[derive(Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn token(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect()
    }
}

/// Deterministic identifier strategy for tests and reproducible runs.
pub struct SeededTokenGenerator {
    rng: Mutex<StdRng>,
}

impl SeededTokenGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TokenGenerator for SeededTokenGenerator {
    fn token(&self) -> String {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        (&mut *rng)
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect()
    }
}
