use serde::{Deserialize, Serialize};
use std::fmt;

/// Garment size. The set is closed; stock maps carry an entry for every
/// variant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    /// Extra small
    #[serde(rename = "XS")]
    Xs,
    /// Small
    S,
    /// Medium
    M,
    /// Large
    L,
    /// Extra large
    #[serde(rename = "XL")]
    Xl,
    /// Double extra large
    #[serde(rename = "XXL")]
    Xxl,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Size; 6] = [Size::Xs, Size::S, Size::M, Size::L, Size::Xl, Size::Xxl];

    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
        }
    }

    /// Converts a string to a Size enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "XS" => Some(Size::Xs),
            "S" => Some(Size::S),
            "M" => Some(Size::M),
            "L" => Some(Size::L),
            "XL" => Some(Size::Xl),
            "XXL" => Some(Size::Xxl),
            _ => None,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for size in Size::ALL {
            assert_eq!(Size::from_str(size.as_str()), Some(size));
        }
        assert_eq!(Size::from_str("XXXL"), None);
    }

    #[test]
    fn test_ordering() {
        let mut shuffled = [Size::Xxl, Size::Xs, Size::L, Size::M, Size::S, Size::Xl];
        shuffled.sort();
        assert_eq!(shuffled, Size::ALL);
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Size::Xs).unwrap(), "\"XS\"");
        let size: Size = serde_json::from_str("\"XXL\"").unwrap();
        assert_eq!(size, Size::Xxl);
    }
}
