use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the statistics engines.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub ssl: SslWeights,
}

/// Weights of the Team Score / Team Success blend.
///
/// The defaults are the long-standing published values; changing them makes
/// results incomparable with other tools.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SslWeights {
    /// Multiplier on AWAL (or WAL) per game.
    pub awal_per_game: Decimal,
    /// Multiplier on scoring share.
    pub scoring_share: Decimal,
    /// Multiplier on the sum of max and min score.
    pub max_min_score: Decimal,
}

impl Default for SslWeights {
    fn default() -> Self {
        Self {
            awal_per_game: dec!(100),
            scoring_share: dec!(2),
            max_min_score: dec!(0.05),
        }
    }
}
