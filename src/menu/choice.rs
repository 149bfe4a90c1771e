//! Main menu entries
//!
//! Maps the numbered input typed at the menu prompt to an operation.

use crate::types::BillingError;
use std::fmt;
use std::str::FromStr;

/// Entries of the main menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    PrintBill,
    SearchItem,
    UpdateItem,
    DeleteItem,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddItem,
        MenuChoice::PrintBill,
        MenuChoice::SearchItem,
        MenuChoice::UpdateItem,
        MenuChoice::DeleteItem,
        MenuChoice::Exit,
    ];

    /// Number typed at the prompt to select this entry
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::AddItem => 1,
            MenuChoice::PrintBill => 2,
            MenuChoice::SearchItem => 3,
            MenuChoice::UpdateItem => 4,
            MenuChoice::DeleteItem => 5,
            MenuChoice::Exit => 6,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::AddItem => "Add Item",
            MenuChoice::PrintBill => "Print Bill",
            MenuChoice::SearchItem => "Search Item",
            MenuChoice::UpdateItem => "Update Item",
            MenuChoice::DeleteItem => "Delete Item",
            MenuChoice::Exit => "Exit",
        };
        write!(f, "{}. {}.", self.number(), label)
    }
}

impl FromStr for MenuChoice {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        input
            .parse::<u8>()
            .ok()
            .and_then(|n| MenuChoice::ALL.into_iter().find(|c| c.number() == n))
            .ok_or_else(|| BillingError::invalid_choice(input))
    }
}
