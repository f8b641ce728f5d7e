use crate::value::Value;
use xxhash_rust::xxh3::Xxh3;

/// Value-hash format version byte used by canonical digest encoding.
pub const VALUE_HASH_VERSION: u8 = 1;

/// Stable XXH3 seed used by canonical value hashing.
pub const VALUE_HASH_SEED: u64 = 0;

fn feed_u8(h: &mut Xxh3, x: u8) {
    h.update(&[x]);
}
fn feed_u32(h: &mut Xxh3, x: u32) {
    h.update(&x.to_be_bytes());
}
fn feed_bytes(h: &mut Xxh3, b: &[u8]) {
    h.update(b);
}

// -0.0 and 0.0 compare equal, so they must feed identical bits.
const fn canonical_f32_bits(x: f32) -> u32 {
    if x == 0.0 { 0 } else { x.to_bits() }
}

const fn canonical_f64_bits(x: f64) -> u64 {
    if x == 0.0 { 0 } else { x.to_bits() }
}

#[expect(clippy::cast_possible_truncation)]
fn write_to_hasher(value: &Value, h: &mut Xxh3) {
    feed_u8(h, value.canonical_tag().to_u8());

    match value {
        Value::Blob(v) => {
            feed_u32(h, v.len() as u32);
            feed_bytes(h, v);
        }
        Value::Bool(b) => feed_u8(h, u8::from(*b)),
        Value::Date(d) => feed_bytes(h, &d.to_be_bytes()),
        Value::Float32(f) => feed_bytes(h, &canonical_f32_bits(*f).to_be_bytes()),
        Value::Float64(f) => feed_bytes(h, &canonical_f64_bits(*f).to_be_bytes()),
        Value::Int(i) | Value::Timestamp(i) => feed_bytes(h, &i.to_be_bytes()),
        Value::Int128(i) => feed_bytes(h, &i.to_be_bytes()),
        Value::Text(s) => {
            feed_u32(h, s.len() as u32);
            feed_bytes(h, s.as_bytes());
        }
        Value::Uint(u) => feed_bytes(h, &u.to_be_bytes()),
        Value::Uint128(u) => feed_bytes(h, &u.to_be_bytes()),
        Value::Unit => {}
    }
}

/// Canonical 64-bit hash of one value.
///
/// Values that compare equal under strict equality hash equal.
#[must_use]
pub fn hash_value(value: &Value) -> u64 {
    let mut h = Xxh3::with_seed(VALUE_HASH_SEED);
    feed_u8(&mut h, VALUE_HASH_VERSION);
    write_to_hasher(value, &mut h);

    h.digest()
}
