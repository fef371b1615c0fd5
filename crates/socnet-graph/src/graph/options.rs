//! Graph configuration options.

#[derive(Debug, Clone, Copy)]
pub struct GraphOptions {
    /// Seed for the placement of nodes added without explicit coordinates.
    pub seed: u64,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { seed: 1 }
    }
}
