//! Configuration for readings and their storage.

use std::path::PathBuf;

use qg_oracle::CastingMethod;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::reading::Depth;

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// RNG seed for reproducible draws; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Directory for history and saved readings.
    pub data_dir: PathBuf,
    /// Directory holding optional correspondence table overrides.
    pub tables_dir: PathBuf,
    /// Default I Ching casting method.
    pub method: CastingMethod,
    /// Default interpretation depth.
    pub depth: Depth,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            data_dir: PathBuf::from("readings"),
            tables_dir: PathBuf::from("data"),
            method: CastingMethod::Coins,
            depth: Depth::Standard,
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the history and reading directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the correspondence table directory.
    pub fn with_tables_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tables_dir = dir.into();
        self
    }

    /// Set the default casting method.
    pub fn with_method(mut self, method: CastingMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the default interpretation depth.
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    /// Build the RNG this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = ReadingConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.data_dir, PathBuf::from("readings"));
        assert_eq!(cfg.tables_dir, PathBuf::from("data"));
        assert_eq!(cfg.method, CastingMethod::Coins);
        assert_eq!(cfg.depth, Depth::Standard);
    }

    #[test]
    fn builder_methods() {
        let cfg = ReadingConfig::default()
            .with_seed(7)
            .with_data_dir("out")
            .with_tables_dir("tables")
            .with_method(CastingMethod::Yarrow)
            .with_depth(Depth::Comprehensive);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.data_dir, PathBuf::from("out"));
        assert_eq!(cfg.tables_dir, PathBuf::from("tables"));
        assert_eq!(cfg.method, CastingMethod::Yarrow);
        assert_eq!(cfg.depth, Depth::Comprehensive);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = ReadingConfig::default().with_seed(99);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
