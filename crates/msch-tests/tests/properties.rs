//! Property tests: the decoder never panics, and well-formed payloads
//! always decode to what was written.

use msch_decoder::SchematicDecoder;
use msch_tests::{SchematicBuilder, compress, frame};
use msch_types::{ConfigValue, Position};
use proptest::prelude::*;

proptest! {
    #[test]
    fn arbitrary_payload_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = SchematicDecoder::decode(&bytes);
    }

    #[test]
    fn arbitrary_body_never_panics(
        version in 0u8..=1,
        body in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let _ = SchematicDecoder::decode(&frame(version, &compress(&body)));
    }

    #[test]
    fn legacy_tiles_decode_as_written(
        tiles in proptest::collection::vec((0i32..65535, 0i32..1000, any::<u8>()), 0..32),
    ) {
        let builder = tiles.iter().fold(
            SchematicBuilder::legacy().size(100, 100).block("conveyor"),
            |b, &(x, y, rotation)| b.legacy_tile(0, x, y, 0, rotation),
        );

        let schematic = SchematicDecoder::decode(&builder.build()).unwrap();
        prop_assert_eq!(schematic.tiles().len(), tiles.len());
        for (tile, &(x, y, rotation)) in schematic.tiles().iter().zip(&tiles) {
            prop_assert_eq!(tile.position, Position::new(x, y));
            prop_assert_eq!(tile.rotation, rotation);
            prop_assert_eq!(&tile.config, &ConfigValue::None);
        }
    }
}
