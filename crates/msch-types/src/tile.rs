use msch_wire::Position;

use crate::config::ConfigValue;

/// One placed block in a schematic.
///
/// `block` is the name resolved from the block dictionary at decode time,
/// so a `Tile` stands on its own once decoding is done.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub block: String,
    pub position: Position,
    pub config: ConfigValue,
    /// Raw rotation byte as stored. Only the low two bits are meaningful
    /// for placement; see [`Tile::direction`].
    pub rotation: u8,
}

impl Tile {
    /// Quarter-turn direction, `0..=3` (right, up, left, down).
    pub fn direction(&self) -> u8 {
        self.rotation & 0b11
    }
}
