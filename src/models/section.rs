//! The six fixed budget sections

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinanthropeError;

/// One of the six fixed budget sections
///
/// `Income` feeds the income total; the other five are expense groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Income,
    DailyExpenses,
    AdminExpenses,
    FamilyExpenses,
    Loans,
    Taxes,
}

impl Section {
    /// Number of sections
    pub const COUNT: usize = 6;

    /// All sections in display order
    pub fn all() -> &'static [Self; Self::COUNT] {
        &[
            Self::Income,
            Self::DailyExpenses,
            Self::AdminExpenses,
            Self::FamilyExpenses,
            Self::Loans,
            Self::Taxes,
        ]
    }

    /// The five expense sections in display order
    pub fn expenses() -> &'static [Self] {
        &Self::all()[1..]
    }

    /// Position in display order, usable as an array index
    pub const fn index(&self) -> usize {
        match self {
            Self::Income => 0,
            Self::DailyExpenses => 1,
            Self::AdminExpenses => 2,
            Self::FamilyExpenses => 3,
            Self::Loans => 4,
            Self::Taxes => 5,
        }
    }

    /// Stable identifier used in documents
    pub fn id(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::DailyExpenses => "daily_expenses",
            Self::AdminExpenses => "admin_expenses",
            Self::FamilyExpenses => "family_expenses",
            Self::Loans => "loans",
            Self::Taxes => "taxes",
        }
    }

    /// Whether this section counts toward total expenses
    pub const fn is_expense(&self) -> bool {
        !matches!(self, Self::Income)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = FinanthropeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "income" => Ok(Self::Income),
            "daily_expenses" | "daily" => Ok(Self::DailyExpenses),
            "admin_expenses" | "admin" => Ok(Self::AdminExpenses),
            "family_expenses" | "family" => Ok(Self::FamilyExpenses),
            "loans" => Ok(Self::Loans),
            "taxes" => Ok(Self::Taxes),
            _ => Err(FinanthropeError::UnknownSection(s.to_string())),
        }
    }
}
