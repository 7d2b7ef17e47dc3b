#![no_main]

use slate::{float_to_uint, uint_to_float_round_down, uint_to_float_round_up};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|size: u32| {
    let down = uint_to_float_round_down(size);
    let up = uint_to_float_round_up(size);

    // the two encodings bracket the size from below and above
    assert!(down <= up);
    assert!(up - down <= 1);
    assert!(float_to_uint(down) <= size);
    if up < 240 {
        // codes >= 240 decode past u32::MAX
        assert!(float_to_uint(up) >= size);

        assert!(uint_to_float_round_up(float_to_uint(up)) == up);
    }
    assert!(uint_to_float_round_down(float_to_uint(down)) == down);
});
