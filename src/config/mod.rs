/*!
Configuration of a context.

All configuration for a context is contained within a [Config] struct.
Each option is a [ConfigOption], which records the name of the option, its bounds, and the latest [state](ContextState) of a context in which the option may be changed.

# Proof modes

The options `lrat` and `lrat_external` together determine how failed assumptions are found:
- If `lrat` is set and `lrat_external` is not, chains of clause ids are built alongside each failing clause, and the implication graph is walked depth first.
- Otherwise, no chains are built, and the implication graph is walked breadth first.
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::context::ContextState;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Build chains of clause ids justifying each derived clause.
    pub lrat: ConfigOption<bool>,

    /// Chains are built externally, from steps without chains.
    pub lrat_external: ConfigOption<bool>,

    /// Check each derived clause with an independent checker.
    pub check: ConfigOption<bool>,
}

impl Config {
    /// True if chains are to be built for each derived clause.
    pub fn structured_proofs(&self) -> bool {
        self.lrat.value && !self.lrat_external.value
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lrat: ConfigOption {
                name: "lrat",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },

            lrat_external: ConfigOption {
                name: "lrat_external",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },

            check: ConfigOption {
                name: "check",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },
        }
    }
}
