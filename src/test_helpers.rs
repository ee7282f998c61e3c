//! Small float-tolerance assertions shared across the test suites in this
//! crate.

#![cfg(test)]

/// Asserts two `f32`s are equal to within a fixed, small epsilon.
pub fn f32_equal_naive(a: f32, b: f32) {
    let epsilon = 1e-4;
    assert!(
        (a - b).abs() < epsilon,
        "expected {} to be close to {} (within {})",
        a,
        b,
        epsilon
    );
}

/// Asserts two `f64`s are equal to within `tolerance`.
pub fn f64_close(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() < tolerance,
        "expected {} to be close to {} (within {})",
        a,
        b,
        tolerance
    );
}

/// Builds an armoured six-bit payload from an ordered list of
/// `(value, width_in_bits)` fields, for tests that need exact control over
/// a message's raw wire values (sentinels, boundary conditions) rather than
/// a captured real-world fixture. Packs bits MSB-first per field, the same
/// order `BitReader::unsigned` reads them back in, and pads the tail with
/// zero bits to a whole number of six-bit characters.
pub fn encode_bits(fields: &[(u64, usize)]) -> String {
    let mut bits: Vec<u8> = Vec::new();
    for &(value, width) in fields {
        for i in (0..width).rev() {
            bits.push(((value >> i) & 1) as u8);
        }
    }
    while bits.len() % 6 != 0 {
        bits.push(0);
    }
    bits.chunks(6)
        .map(|chunk| {
            let v = chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b);
            armour_char(v)
        })
        .collect()
}

/// Inverse of the crate's armour-character decode: the ASCII character
/// whose six-bit decoded value is `v`.
fn armour_char(v: u8) -> char {
    let c = if v <= 40 { 48 + v } else { 56 + v };
    c as char
}
