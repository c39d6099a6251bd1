use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Flowchart layout direction
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right
    ///
    /// Dependents on the left, their dependencies to the right. Reads well
    /// for long, shallow dependency chains.
    #[default]
    #[value(name = "lr")]
    Lr,

    /// Right to left
    #[value(name = "rl")]
    Rl,

    /// Top down
    ///
    /// The main module at the top. Better for wide graphs with many direct
    /// dependencies.
    #[value(name = "td")]
    Td,

    /// Bottom to top
    #[value(name = "bt")]
    Bt,
}

impl Direction {
    /// Mermaid keyword for this direction.
    pub fn as_mermaid(self) -> &'static str {
        match self {
            Self::Lr => "LR",
            Self::Rl => "RL",
            Self::Td => "TD",
            Self::Bt => "BT",
        }
    }
}
