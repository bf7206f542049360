//! Primary-hash derivation for table keys.

use std::hash::{Hash, Hasher};

/// Supplies the raw primary hash the table reduces modulo capacity.
///
/// String keys use an additive byte-sum hash. It clusters anagrams
/// into the same slot, which the probe sequence then has to untangle;
/// the table keeps it for probe-order compatibility with the data this
/// layout was built against.
pub trait TableKey: Eq {
    /// The raw hash value, before the modulo reduction.
    fn raw_hash(&self) -> u64;
}

impl TableKey for String {
    fn raw_hash(&self) -> u64 {
        self.bytes().map(u64::from).sum()
    }
}

macro_rules! impl_table_key_via_std_hash {
    ($($ty:ty),*) => {
        $(
            impl TableKey for $ty {
                fn raw_hash(&self) -> u64 {
                    let mut hasher = std::collections::hash_map::DefaultHasher::new();
                    self.hash(&mut hasher);
                    hasher.finish()
                }
            }
        )*
    };
}

impl_table_key_via_std_hash!(u32, u64, usize, i32, i64);
