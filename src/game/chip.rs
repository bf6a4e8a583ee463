use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chip {
    Red,
    Black,
}

impl Chip {
    /// Get the opposing chip color
    pub fn other(self) -> Chip {
        match self {
            Chip::Red => Chip::Black,
            Chip::Black => Chip::Red,
        }
    }

    /// Get chip name for display
    pub fn name(self) -> &'static str {
        match self {
            Chip::Red => "Red",
            Chip::Black => "Black",
        }
    }
}

impl std::fmt::Display for Chip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
