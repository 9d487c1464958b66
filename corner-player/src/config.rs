//! Search parameters.

/// Settings for the advanced strategy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    /// Plies searched, counting White's root move. Values below 1 act as 1.
    pub depth: u8,
}

impl SearchConfig {
    pub const DEFAULT_DEPTH: u8 = 4;

    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_defaults_and_clamps() {
        assert_eq!(SearchConfig::default().depth, 4);
        assert_eq!(SearchConfig::with_depth(0).depth, 1);
        assert_eq!(SearchConfig::with_depth(6).depth, 6);
    }
}
