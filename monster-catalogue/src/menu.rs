//! Top-level menu: the six numbered entries and their parsing.

use std::fmt::Display;

/// One entry of the main menu. Every choice except [`MenuChoice::Exit`]
/// returns to the menu once its operation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Update,
    Delete,
    PrintAll,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Search,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::PrintAll,
        MenuChoice::Exit,
    ];

    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 6;

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Search => 2,
            MenuChoice::Update => 3,
            MenuChoice::Delete => 4,
            MenuChoice::PrintAll => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a new monster card",
            MenuChoice::Search => "Search for a monster card",
            MenuChoice::Update => "Update a monster card",
            MenuChoice::Delete => "Delete a monster card",
            MenuChoice::PrintAll => "Print all monster cards",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<u8> for MenuChoice {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(value)
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_map_back_to_choices() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::try_from(choice.number()), Ok(choice));
        }
        assert_eq!(MenuChoice::try_from(0), Err(0));
        assert_eq!(MenuChoice::try_from(7), Err(7));
    }

    #[test]
    fn menu_lines() {
        let lines: Vec<String> = MenuChoice::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(lines[0], "1. Add a new monster card");
        assert_eq!(lines[5], "6. Exit");
    }
}
