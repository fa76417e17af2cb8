use serde::{Deserialize, Serialize};

use crate::TableError;

/// Session-level settings. The dealer's rules are fixed and not part of this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Seed for the shoe. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Total at which the autoplayer stops hitting.
    pub auto_stand_on: u8,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            auto_stand_on: 17,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), TableError> {
        if !(4..=21).contains(&self.auto_stand_on) {
            return Err(TableError::InvalidConfig(format!(
                "auto_stand_on must be between 4 and 21, got {}",
                self.auto_stand_on
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn test_stand_on_out_of_range() {
        let config = TableConfig {
            auto_stand_on: 22,
            ..TableConfig::default()
        };
        assert!(matches!(config.validate(), Err(TableError::InvalidConfig(_))));

        let config = TableConfig {
            auto_stand_on: 3,
            ..TableConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_json() {
        let config: TableConfig =
            serde_json::from_str(r#"{"seed": 9, "auto_stand_on": 15}"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.auto_stand_on, 15);
    }
}
