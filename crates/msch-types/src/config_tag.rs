/// Type tags of the modern (version 1) self-describing config encoding.
///
/// The tag space is open-ended: newer writers may emit tags this version
/// has never heard of, and those must fail loudly rather than decode as
/// `None`, because a tile's config decides its in-game behaviour.
///
/// ```text
/// ┌──────┬───────────────────┬──────────────────┐
/// │ Wire │ Variant           │ Support          │
/// ├──────┼───────────────────┼──────────────────┤
/// │ 0x00 │ Null              │ Base             │
/// │ 0x01 │ Int               │ Base             │
/// │ 0x02 │ Long              │ Base             │
/// │ 0x03 │ Float             │ Base             │
/// │ 0x04 │ String            │ Base             │
/// │ 0x05 │ Content           │ RequiresRegistry │
/// │ 0x06 │ IntSeq            │ RequiresRegistry │
/// │ 0x07 │ Point             │ Base             │
/// │ 0x08 │ PointArray        │ RequiresRegistry │
/// │ 0x09 │ TechNode          │ Unsupported      │
/// │ 0x0A │ Bool              │ Base             │
/// │ 0x0B │ Double            │ Unsupported      │
/// │ 0x0C │ Building          │ Unsupported      │
/// │ 0x0D │ LogicAccess       │ RequiresRegistry │
/// │ 0x0E │ Bytes             │ RequiresRegistry │
/// │ 0x0F │ LegacyUnitCommand │ Unsupported      │
/// │ 0x10 │ BoolArray         │ RequiresRegistry │
/// │ 0x11 │ Unit              │ Unsupported      │
/// │ 0x12 │ Vec2Array         │ Unsupported      │
/// │ 0x13 │ Vec2              │ Unsupported      │
/// │ 0x14 │ Team              │ RequiresRegistry │
/// │ 0x15 │ IntArray          │ Unsupported      │
/// │ 0x16 │ ObjectArray       │ Unsupported      │
/// │ 0x17 │ UnitCommand       │ Unsupported      │
/// │ else │ Unknown(n)        │ Unknown          │
/// └──────┴───────────────────┴──────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigTag {
    Null,
    Int,
    Long,
    Float,
    String,
    Content,
    IntSeq,
    Point,
    PointArray,
    TechNode,
    Bool,
    Double,
    Building,
    LogicAccess,
    Bytes,
    LegacyUnitCommand,
    BoolArray,
    Unit,
    Vec2Array,
    Vec2,
    Team,
    IntArray,
    ObjectArray,
    UnitCommand,
    /// A tag outside the known table. The raw byte is kept for the error.
    Unknown(u8),
}

/// How far this crate can go in decoding a given tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagSupport {
    /// Always decodable.
    Base,
    /// Decodable only when a content registry is wired into the decoder.
    RequiresRegistry,
    /// A known tag whose payload this crate does not decode.
    Unsupported,
    /// Not a known tag at all.
    Unknown,
}

impl ConfigTag {
    pub fn wire_id(self) -> u8 {
        match self {
            Self::Null => 0x00,
            Self::Int => 0x01,
            Self::Long => 0x02,
            Self::Float => 0x03,
            Self::String => 0x04,
            Self::Content => 0x05,
            Self::IntSeq => 0x06,
            Self::Point => 0x07,
            Self::PointArray => 0x08,
            Self::TechNode => 0x09,
            Self::Bool => 0x0A,
            Self::Double => 0x0B,
            Self::Building => 0x0C,
            Self::LogicAccess => 0x0D,
            Self::Bytes => 0x0E,
            Self::LegacyUnitCommand => 0x0F,
            Self::BoolArray => 0x10,
            Self::Unit => 0x11,
            Self::Vec2Array => 0x12,
            Self::Vec2 => 0x13,
            Self::Team => 0x14,
            Self::IntArray => 0x15,
            Self::ObjectArray => 0x16,
            Self::UnitCommand => 0x17,
            Self::Unknown(id) => id,
        }
    }

    pub fn from_wire_id(id: u8) -> Self {
        match id {
            0x00 => Self::Null,
            0x01 => Self::Int,
            0x02 => Self::Long,
            0x03 => Self::Float,
            0x04 => Self::String,
            0x05 => Self::Content,
            0x06 => Self::IntSeq,
            0x07 => Self::Point,
            0x08 => Self::PointArray,
            0x09 => Self::TechNode,
            0x0A => Self::Bool,
            0x0B => Self::Double,
            0x0C => Self::Building,
            0x0D => Self::LogicAccess,
            0x0E => Self::Bytes,
            0x0F => Self::LegacyUnitCommand,
            0x10 => Self::BoolArray,
            0x11 => Self::Unit,
            0x12 => Self::Vec2Array,
            0x13 => Self::Vec2,
            0x14 => Self::Team,
            0x15 => Self::IntArray,
            0x16 => Self::ObjectArray,
            0x17 => Self::UnitCommand,
            other => Self::Unknown(other),
        }
    }

    pub fn support(self) -> TagSupport {
        match self {
            Self::Null
            | Self::Int
            | Self::Long
            | Self::Float
            | Self::String
            | Self::Point
            | Self::Bool => TagSupport::Base,
            Self::Content
            | Self::IntSeq
            | Self::PointArray
            | Self::LogicAccess
            | Self::Bytes
            | Self::BoolArray
            | Self::Team => TagSupport::RequiresRegistry,
            Self::TechNode
            | Self::Double
            | Self::Building
            | Self::LegacyUnitCommand
            | Self::Unit
            | Self::Vec2Array
            | Self::Vec2
            | Self::IntArray
            | Self::ObjectArray
            | Self::UnitCommand => TagSupport::Unsupported,
            Self::Unknown(_) => TagSupport::Unknown,
        }
    }
}
