//! Configuration for the route planner.

use chrono::Duration;

/// Tunable parameters for connecting-route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Most bus changes allowed in a route. A route of N buses makes
    /// N - 1 changes, so 2 permits routes of up to three buses.
    pub max_transfers: usize,
    /// Most routes returned from a search, after ranking.
    pub max_results: usize,
    /// Assumed coach speed used when estimating duration from distance,
    /// in km/h.
    pub average_speed_kmh: f64,
    /// Assumed spacing between consecutive stops, in km, used when a
    /// location has no coordinates.
    pub km_per_stop: f64,
    /// Shortest acceptable wait between alighting one bus and boarding
    /// the next, in minutes. Zero or negative disables the check.
    pub min_connection_mins: i64,
}

impl SearchConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The minimum connection time as a [`Duration`].
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_transfers: 2,      // up to three buses end to end
            max_results: 10,       // keep responses small
            average_speed_kmh: 50.0,
            km_per_stop: 25.0,
            min_connection_mins: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = SearchConfig::new();
        assert_eq!(config.max_transfers, 2);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.average_speed_kmh, 50.0);
        assert_eq!(config.km_per_stop, 25.0);
        assert_eq!(config.min_connection_mins, 15);
    }

    #[test]
    fn min_connection_as_duration() {
        let config = SearchConfig::default();
        assert_eq!(config.min_connection(), Duration::minutes(15));
    }

    #[test]
    fn custom_values_flow_through() {
        let config = SearchConfig {
            max_transfers: 1,
            min_connection_mins: 0,
            ..SearchConfig::default()
        };
        assert_eq!(config.max_transfers, 1);
        assert_eq!(config.min_connection(), Duration::zero());
    }
}
