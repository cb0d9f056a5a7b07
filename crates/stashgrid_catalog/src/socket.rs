//! Sockets and link groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Socket colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketColour {
    /// Red (strength).
    #[serde(rename = "R")]
    Red,
    /// Green (dexterity).
    #[serde(rename = "G")]
    Green,
    /// Blue (intelligence).
    #[serde(rename = "B")]
    Blue,
    /// White (any).
    #[serde(rename = "W")]
    White,
}

impl SocketColour {
    /// Single-letter code used on the wire and in compact displays.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::White => 'W',
        }
    }
}

/// Attribute affinity of a socket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketAttr {
    /// Strength.
    #[serde(rename = "S")]
    Strength,
    /// Dexterity.
    #[serde(rename = "D")]
    Dexterity,
    /// Intelligence.
    #[serde(rename = "I")]
    Intelligence,
}

/// A socket. Sockets sharing a group are linked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Socket {
    /// Link group.
    pub group: u32,
    /// Attribute affinity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<SocketAttr>,
    /// Colour.
    #[serde(rename = "sColour")]
    pub colour: SocketColour,
}

impl Socket {
    /// Creates a socket without attribute affinity.
    #[must_use]
    pub const fn new(group: u32, colour: SocketColour) -> Self {
        Self {
            group,
            attr: None,
            colour,
        }
    }
}

/// Groups sockets by link group, ascending by group number.
///
/// Order within a group follows the input order.
#[must_use]
pub fn link_groups(sockets: &[Socket]) -> Vec<Vec<&Socket>> {
    let mut groups: BTreeMap<u32, Vec<&Socket>> = BTreeMap::new();
    for socket in sockets {
        groups.entry(socket.group).or_default().push(socket);
    }
    groups.into_values().collect()
}
