use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Kind of employment a work period was done under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum ContractType {
    Casual,
    #[value(alias = "piecerate", alias = "piece_rate")]
    PieceRate,
}

impl ContractType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ContractType::Casual => "Casual",
            ContractType::PieceRate => "Piece Rate",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Casual" => Some(ContractType::Casual),
            "Piece Rate" => Some(ContractType::PieceRate),
            _ => None,
        }
    }

    /// Lower-cased label embedded in the day-count prompt.
    pub fn prompt_label(&self) -> String {
        self.to_db_str().to_lowercase()
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
