#![no_main]

use libfuzzer_sys::fuzz_target;
use pe_packet_codec::{CodecConfig, LongLayout, MetadataDecoder, MetadataEncoder};

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic or read out of bounds
    let decoder = MetadataDecoder::default();
    if let Ok(map) = decoder.decode(data) {
        // Anything decoded from the wire re-encodes; NaN floats rule out a direct equality check
        let bytes = MetadataEncoder.encode(&map).expect("decoded map must re-encode");
        let again = decoder.decode(&bytes).expect("re-encoded map must decode");
        assert_eq!(again.len(), map.len());
    }

    let legacy = MetadataDecoder::new(&CodecConfig::default_with_overrides(|c| {
        c.metadata.long_layout = LongLayout::Legacy;
    }));
    let _ = legacy.decode(data);
});
