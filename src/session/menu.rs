//! Menu choices for the interactive session.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Banner printed before every prompt.
pub const MENU: &str = "\
-------------Trie Menu-----------------
 1. Insert
 2. Search
 3. Delete
 4. Display
 5. Save the Trie to file
 6. Load the Trie from file
 7. Exit
---------------------------------------
";

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a word
    Insert,
    /// Look a word up
    Search,
    /// Remove a word
    Delete,
    /// Print every stored word
    Display,
    /// Write the trie to a word file
    Save,
    /// Read a word file into the trie
    Load,
    /// End the session
    Exit,
}

/// Input that does not name a menu entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please, enter correct choice...")]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(1) => Ok(Self::Insert),
            Ok(2) => Ok(Self::Search),
            Ok(3) => Ok(Self::Delete),
            Ok(4) => Ok(Self::Display),
            Ok(5) => Ok(Self::Save),
            Ok(6) => Ok(Self::Load),
            Ok(7) => Ok(Self::Exit),
            _ => Err(InvalidChoice(s.to_string())),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Insert => "insert",
            Self::Search => "search",
            Self::Delete => "delete",
            Self::Display => "display",
            Self::Save => "save",
            Self::Load => "load",
            Self::Exit => "exit",
        };
        f.write_str(name)
    }
}
