/// Row stride of the packed position encoding.
pub const OVERFLOW: u32 = 65535;

/// A tile coordinate inside a schematic grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - origin`, as `(dx, dy)`.
    ///
    /// Saturates instead of overflowing so hand-built positions far outside
    /// the packed domain can't panic.
    pub fn offset_from(self, origin: Self) -> (i32, i32) {
        (
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
        )
    }
}

/// Pack a coordinate into its `u32` wire form: `y * OVERFLOW + x`.
///
/// The legal domain is `0 <= x < OVERFLOW`, `y >= 0`, with the result
/// fitting in a `u32` (so `y <= 65537`, and `x == 0` when `y == 65537`).
/// Anything outside it returns `None`, since no `u32` would unpack back
/// to the same coordinate.
pub fn pack(x: i32, y: i32) -> Option<u32> {
    let x = u32::try_from(x).ok().filter(|&x| x < OVERFLOW)?;
    let y = u32::try_from(y).ok()?;
    y.checked_mul(OVERFLOW)?.checked_add(x)
}

/// Unpack a `u32` wire position into a coordinate.
///
/// `x = v mod OVERFLOW`, `y = v div OVERFLOW`. This is the exact inverse
/// of [`pack`] across the whole `u32` range. Subtracting the row from `x`
/// as well (`x = v mod OVERFLOW - v div OVERFLOW`) only inverts `pack` on
/// row zero and is not used.
pub fn unpack(packed: u32) -> Position {
    // Both components are at most 65537, well inside i32.
    Position {
        x: (packed % OVERFLOW) as i32,
        y: (packed / OVERFLOW) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(v: u32) -> Option<u32> {
        let p = unpack(v);
        pack(p.x, p.y)
    }

    #[test]
    fn roundtrip_boundaries() {
        for v in [
            0,
            1,
            OVERFLOW - 1,
            OVERFLOW,
            OVERFLOW + 1,
            2 * OVERFLOW - 1,
            i32::MAX as u32 - 1,
            i32::MAX as u32,
            i32::MAX as u32 + 1,
            u32::MAX - 1,
            u32::MAX,
        ] {
            assert_eq!(roundtrip(v), Some(v), "round-trip failed for {v}");
        }
    }

    #[test]
    fn unpack_known_values() {
        assert_eq!(unpack(0), Position::ORIGIN);
        assert_eq!(unpack(OVERFLOW - 1), Position::new(65534, 0));
        assert_eq!(unpack(OVERFLOW), Position::new(0, 1));
        assert_eq!(unpack(3 * OVERFLOW + 7), Position::new(7, 3));
        assert_eq!(unpack(u32::MAX), Position::new(0, 65537));
    }

    #[test]
    fn pack_rejects_out_of_domain() {
        assert_eq!(pack(-1, 0), None);
        assert_eq!(pack(0, -1), None);
        assert_eq!(pack(OVERFLOW as i32, 0), None);
        assert_eq!(pack(1, 65537), None);
        assert_eq!(pack(0, 65537), Some(u32::MAX));
    }

    #[test]
    fn subtracting_the_row_breaks_the_inverse() {
        // Off row zero, the subtracting form drifts by exactly `y`.
        let v = pack(10, 4).unwrap();
        let drifted_x = (v % OVERFLOW) as i32 - (v / OVERFLOW) as i32;
        assert_eq!(drifted_x, 6);
        assert_eq!(unpack(v).x, 10);
    }

    #[test]
    fn offset_from_is_componentwise() {
        let target = Position::new(12, 3);
        let origin = Position::new(10, 5);
        assert_eq!(target.offset_from(origin), (2, -2));
        assert_eq!(
            Position::new(i32::MIN, 0).offset_from(Position::new(1, 0)),
            (i32::MIN, 0)
        );
    }
}
