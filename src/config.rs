use crate::error::{Result, TableError};

/// Number of buckets a table starts with when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor above which an insertion triggers a resize.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Capacity multiplier applied on every resize.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Construction parameters of a [`HashTable`](crate::HashTable).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableConfig {
    /// Initial number of buckets. Must be positive.
    pub capacity: usize,
    /// Ratio of entries to buckets the table may reach before growing. Must be positive.
    pub max_load_factor: f64,
    /// Factor the bucket count is multiplied by when growing. Must be greater than one.
    pub growth_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check every parameter, reporting the first one that is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(TableError::InvalidArgument(
                "capacity must be greater than zero".to_string(),
            ));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(TableError::InvalidArgument(format!(
                "max load factor must be a positive number, got {}",
                self.max_load_factor
            )));
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(TableError::InvalidArgument(format!(
                "growth factor must be greater than one, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.capacity, 16);
        assert_eq!(config.max_load_factor, 0.75);
        assert_eq!(config.growth_factor, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_capacity() {
        let config = TableConfig::default().with_capacity(0);
        assert!(matches!(config.validate(), Err(TableError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_bad_load_factors() {
        for load_factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = TableConfig::default().with_max_load_factor(load_factor);
            assert!(
                matches!(config.validate(), Err(TableError::InvalidArgument(_))),
                "load factor {} was accepted",
                load_factor
            );
        }
    }

    #[test]
    fn rejects_growth_factor_that_does_not_grow() {
        for growth_factor in [1.0, 0.5, f64::NAN] {
            let config = TableConfig::default().with_growth_factor(growth_factor);
            assert!(matches!(config.validate(), Err(TableError::InvalidArgument(_))));
        }
        assert!(TableConfig::default().with_growth_factor(1.5).validate().is_ok());
    }
}
