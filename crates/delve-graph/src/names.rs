//! Unique room names drawn without replacement.

use rand::Rng;

use crate::GraphError;

/// The stock room names.
const DEFAULT_NAMES: [&str; 10] = [
    "FOYER",
    "LONG_STAIRCASE",
    "BASEMENT",
    "DUNGEON",
    "LIVING_ROOM",
    "KITCHEN",
    "DARK_ROOM",
    "OPERATING_ROOM",
    "DINING_ROOM",
    "PRISON_CELL",
];

/// A fixed list of candidate names with a parallel "used" flag per entry.
///
/// Each name is handed out at most once. Drawing uses rejection sampling:
/// pick a uniform index, retry if taken. That is fine while the pool is
/// small and not much larger than the number of rooms.
#[derive(Debug, Clone)]
pub struct NamePool {
    names: Vec<String>,
    used: Vec<bool>,
}

impl NamePool {
    /// Creates a pool from an explicit name list. Duplicates are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        let used = vec![false; unique.len()];
        Self {
            names: unique,
            used,
        }
    }

    /// Draws a random unused name and marks it used.
    ///
    /// # Errors
    /// - [`GraphError::NamePoolExhausted`] if every name is taken
    /// - [`GraphError::AttemptsExhausted`] if `max_attempts` draws all hit
    ///   used names
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_attempts: u32,
    ) -> Result<String, GraphError> {
        if self.remaining() == 0 {
            return Err(GraphError::NamePoolExhausted {
                used: self.used_count(),
                size: self.names.len(),
            });
        }

        for _ in 0..max_attempts {
            let index = rng.random_range(0..self.names.len());
            if !self.used[index] {
                self.used[index] = true;
                return Ok(self.names[index].clone());
            }
        }

        Err(GraphError::AttemptsExhausted {
            phase: "name draw",
            attempts: max_attempts,
        })
    }

    /// Total number of names in the pool.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names not yet handed out.
    pub fn remaining(&self) -> usize {
        self.names.len() - self.used_count()
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.names
            .iter()
            .zip(&self.used)
            .any(|(n, used)| *used && n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn used_count(&self) -> usize {
        self.used.iter().filter(|u| **u).count()
    }
}

impl Default for NamePool {
    fn default() -> Self {
        Self::new(DEFAULT_NAMES)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_default_pool_has_ten_names() {
        let pool = NamePool::default();
        assert_eq!(pool.len(), 10);
        assert_eq!(pool.remaining(), 10);
        assert!(pool.names().iter().any(|n| n == "PRISON_CELL"));
    }

    #[test]
    fn test_draw_never_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = NamePool::default();
        let drawn: HashSet<String> = (0..10)
            .map(|_| pool.draw(&mut rng, 10_000).unwrap())
            .collect();
        assert_eq!(drawn.len(), 10);
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn test_draw_marks_name_used() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = NamePool::default();
        let name = pool.draw(&mut rng, 100).unwrap();
        assert!(pool.is_used(&name));
        assert_eq!(pool.remaining(), 9);
    }

    #[test]
    fn test_draw_from_exhausted_pool_fails() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = NamePool::new(["A", "B"]);
        pool.draw(&mut rng, 1_000).unwrap();
        pool.draw(&mut rng, 1_000).unwrap();
        assert!(matches!(
            pool.draw(&mut rng, 1_000),
            Err(GraphError::NamePoolExhausted { used: 2, size: 2 })
        ));
    }

    #[test]
    fn test_new_drops_duplicates() {
        let pool = NamePool::new(["A", "B", "A"]);
        assert_eq!(pool.len(), 2);
    }
}
