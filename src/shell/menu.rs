//! Menu choices understood by the shell.

use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEmployee,
    SearchEmployee,
    DisplayAll,
    Exit,
}

impl MenuChoice {
    /// Menu text, in display order.
    pub const MENU: &'static str = "\
Employee Management System
1. Add Employee
2. Search Employee
3. Display All Employees
4. Exit";
}

/// Returned when input does not name a menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice;

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(1) => Ok(MenuChoice::AddEmployee),
            Ok(2) => Ok(MenuChoice::SearchEmployee),
            Ok(3) => Ok(MenuChoice::DisplayAll),
            Ok(4) => Ok(MenuChoice::Exit),
            _ => Err(InvalidChoice),
        }
    }
}
