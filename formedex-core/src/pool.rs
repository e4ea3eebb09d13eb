use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::table::{FormeKey, IdentityTable};

/// Everything a randomizer may place independently: each base species plus
/// every forme with its own data row. Cosmetic forms are left out since they
/// would only duplicate their base species.
#[derive(Clone, Debug)]
pub struct RandomizablePool {
    entries: Vec<FormeKey>,
}

impl RandomizablePool {
    pub fn new(table: &IdentityTable) -> Self {
        let mut entries: Vec<FormeKey> = (1..=table.species_count())
            .map(|species| FormeKey::new(species, 0))
            .collect();
        entries.extend(
            table
                .resolvable_entries()
                .filter(|entry| !entry.cosmetic)
                .map(|entry| entry.key),
        );
        entries.sort();
        RandomizablePool { entries }
    }

    pub fn entries(&self) -> &[FormeKey] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: FormeKey) -> bool {
        self.entries.binary_search(&key).is_ok()
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<FormeKey> {
        self.entries.choose(rng).copied()
    }

    /// `count` picks with replacement, reproducible for a given seed.
    pub fn sample(&self, seed: u64, count: usize) -> Vec<FormeKey> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count).filter_map(|_| self.pick(&mut rng)).collect()
    }

    pub fn shuffled(&self, seed: u64) -> Vec<FormeKey> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut entries = self.entries.clone();
        entries.shuffle(&mut rng);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Generation;

    fn table() -> IdentityTable {
        IdentityTable::builder(Generation::Gen4)
            .species_count(5)
            .forme(3, 1, "-Mega", 6)
            .cosmetic(4, 1, "-Alt")
            .build()
    }

    #[test]
    fn excludes_cosmetic_forms() {
        let pool = RandomizablePool::new(&table());
        assert_eq!(pool.len(), 6);
        assert!(pool.contains(FormeKey::new(3, 1)));
        assert!(pool.contains(FormeKey::new(4, 0)));
        assert!(!pool.contains(FormeKey::new(4, 1)));
        assert!(!pool.contains(FormeKey::new(6, 0)));
    }

    #[test]
    fn seeded_runs_repeat() {
        let pool = RandomizablePool::new(&table());
        assert_eq!(pool.sample(42, 20), pool.sample(42, 20));
        assert_eq!(pool.sample(42, 20).len(), 20);
        assert_eq!(pool.shuffled(7), pool.shuffled(7));

        let mut shuffled = pool.shuffled(7);
        shuffled.sort();
        assert_eq!(shuffled, pool.entries());
    }

    #[test]
    fn picks_come_from_pool() {
        let pool = RandomizablePool::new(&table());
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let key = pool.pick(&mut rng).unwrap();
            assert!(pool.contains(key));
        }
    }

    #[test]
    fn empty_pool() {
        let table = IdentityTable::builder(Generation::Gen1).species_count(0).build();
        let pool = RandomizablePool::new(&table);
        assert!(pool.is_empty());
        assert!(pool.sample(1, 3).is_empty());
    }
}
