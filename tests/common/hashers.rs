use std::hash::{BuildHasherDefault, Hasher};

/// Sends every key to the same bucket.
#[derive(Default)]
pub struct ConstantHasher;

impl Hasher for ConstantHasher {
    fn finish(&self) -> u64 {
        42
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

pub type Constant = BuildHasherDefault<ConstantHasher>;

/// Hashes to twice the sum of the written bytes, so only the parity of the byte sum decides the
/// bucket in a table of four. `"a"` and `"c"` share a bucket, `"b"` does not.
#[derive(Default)]
pub struct ByteSumHasher {
    sum: u64,
}

impl Hasher for ByteSumHasher {
    fn finish(&self) -> u64 {
        self.sum.wrapping_mul(2)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.sum = self.sum.wrapping_add(byte as u64);
        }
    }
}

pub type ByteSum = BuildHasherDefault<ByteSumHasher>;
