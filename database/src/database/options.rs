#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub seed: bool,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    /// Defines whether the table starts with the seed record (id "1", "Sam") or empty
    pub fn set_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Empty table, used by tests / benchmarks that count rows
    pub fn new_empty() -> Self {
        DatabaseOptions::default().set_seed(false)
    }
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_by_default() {
        assert!(DatabaseOptions::default().seed);
        assert!(!DatabaseOptions::new_empty().seed);
    }
}
