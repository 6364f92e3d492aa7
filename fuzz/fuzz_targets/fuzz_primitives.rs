#![no_main]

use libfuzzer_sys::fuzz_target;
use pe_packet_codec::core::binary::*;
use pe_packet_codec::PrimitiveCodec;

fuzz_target!(|data: &[u8]| {
    // Short inputs must be rejected, never over-read
    let codec = PrimitiveCodec::new();
    let _ = read_triad(data);
    let _ = read_l_triad(data);
    let _ = read_signed_short(data);
    let _ = read_signed_l_short(data);
    let _ = read_int(data);
    let _ = codec.read_float(data);
    let _ = codec.read_l_double(data);

    if let (Ok(be), Some(window)) = (read_long(data), data.get(..8)) {
        let mut rev = [0u8; 8];
        rev.copy_from_slice(window);
        rev.reverse();
        assert_eq!(read_l_long(&rev).ok(), Some(be));
    }
});
