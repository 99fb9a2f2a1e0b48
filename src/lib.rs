//! A growable hash table with separate chaining.
//!
//! Every bucket holds a chain of `(key, value)` entries, so keys that collide on the same bucket
//! are all retained and told apart by `Eq`. Whether a key is present depends only on whether its
//! entry is in a chain, never on the stored value: `None`, `0` or `()` are ordinary values.
//!
//! The table grows by [`TableConfig::growth_factor`] whenever an insertion pushes the load factor
//! above [`TableConfig::max_load_factor`]. It never shrinks on its own.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher, RandomState};
use std::mem;
use std::ops::Index;

use log::{debug, trace};

mod config;
mod error;
mod iter;

pub use config::{TableConfig, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, DEFAULT_MAX_LOAD_FACTOR};
pub use error::{Result, TableError};
pub use iter::{Iter, Keys, Values};

/// A hash table mapping keys to values, resolving collisions by chaining.
#[derive(Clone)]
pub struct HashTable<K, V, S = RandomState> {
    buckets: Box<[Chain<K, V>]>,
    len: usize,
    max_load_factor: f64,
    growth_factor: f64,
    hash_builder: S,
}

#[derive(Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Entries sharing one bucket, in insertion order.
type Chain<K, V> = Vec<Entry<K, V>>;

impl<K, V> HashTable<K, V> {
    /// Create a new empty table with `capacity` buckets and a randomly seeded hasher.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, RandomState::new())
    }

    /// Create a new empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn with_default_capacity() -> Self {
        Self::from_config(TableConfig::default(), RandomState::new())
    }
}

impl<K, V, S> Default for HashTable<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::from_config(TableConfig::default(), S::default())
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Create a new empty table with `capacity` buckets and the given hasher.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidArgument`] if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        Self::with_config(TableConfig::default().with_capacity(capacity), hash_builder)
    }

    /// Create a new empty table from a full [`TableConfig`].
    ///
    /// # Errors
    /// Returns [`TableError::InvalidArgument`] if the config does not pass
    /// [`TableConfig::validate`].
    pub fn with_config(config: TableConfig, hash_builder: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config, hash_builder))
    }

    /// Build the table from a config that is already known to be valid.
    fn from_config(config: TableConfig, hash_builder: S) -> Self {
        debug!(
            "creating hash table with {} buckets (max load factor {}, growth factor {})",
            config.capacity, config.max_load_factor, config.growth_factor
        );
        HashTable {
            buckets: empty_buckets(config.capacity),
            len: 0,
            max_load_factor: config.max_load_factor,
            growth_factor: config.growth_factor,
            hash_builder,
        }
    }

    /// Returns the number of entries stored in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the load factor above which an insertion triggers a resize.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Returns a reference to the table's `BuildHasher`.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes all entries. The bucket array is kept for reuse.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }

    /// Returns an iterator over the entries in arbitrary order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets, self.len)
    }

    /// Returns an iterator over the keys in arbitrary order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over the values in arbitrary order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Convert a key into a bucket index by hashing it and mapping the hash onto `capacity`.
    fn hash_to_index<Q>(hash_builder: &S, key: &Q, capacity: usize) -> usize
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = hash_builder.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() % capacity as u64) as usize
    }

    /// Get the bucket a key belongs to under the current capacity.
    #[inline(always)]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        Self::hash_to_index(&self.hash_builder, key, self.capacity())
    }

    /// Scan the key's chain for an entry with an equal key.
    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|entry| key.eq(entry.key.borrow()))
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If the table already holds an equal key, its value is replaced and the old value is
    /// returned; the length is unchanged. Otherwise the entry is appended to the key's chain and
    /// `None` is returned.
    ///
    /// If the insertion pushes the load factor above the maximum, the table grows before
    /// returning, so that afterwards `len() / capacity() <= max_load_factor()` holds again.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            trace!("replacing value in bucket {}", index);
            return Some(mem::replace(&mut entry.value, value));
        }

        chain.push(Entry { key, value });
        self.len += 1;
        trace!("inserted entry into bucket {} (chain length {})", index, chain.len());

        if !can_fit(self.len, self.capacity(), self.max_load_factor) {
            self.grow();
        }
        None
    }

    /// Returns the value stored for `key`, or `None` if the key is absent.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|entry| &entry.value)
    }

    /// Returns the value stored for `key`, or `default` if the key is absent.
    ///
    /// A stored value is always returned as is, even if it equals `default`.
    #[must_use]
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns the value stored for `key`.
    ///
    /// # Errors
    /// Returns [`TableError::KeyNotFound`] if the key is absent.
    pub fn get_strict<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(TableError::KeyNotFound)
    }

    /// Returns a mutable reference to the value stored for `key`, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| key.eq(entry.key.borrow()))
            .map(|entry| &mut entry.value)
    }

    /// Returns true if the table holds an entry for `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_strict(key).is_ok()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// The remaining entries of the chain keep their order. Capacity is never reduced.
    ///
    /// # Errors
    /// Returns [`TableError::KeyNotFound`] if the key is absent; the table is left unchanged.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];

        let Some(position) = chain.iter().position(|entry| key.eq(entry.key.borrow())) else {
            trace!("no entry to delete in bucket {}", index);
            return Err(TableError::KeyNotFound);
        };

        let entry = chain.remove(position);
        self.len -= 1;
        trace!("deleted entry from bucket {}", index);
        Ok(entry.value)
    }

    /// Reserves room for at least `additional` more entries, so that inserting them does not
    /// trigger a resize. Does nothing if the current capacity is already sufficient.
    ///
    /// # Panics
    /// Panics if the required length or the bucket count it needs overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        if usize::MAX - self.len < additional {
            panic!("capacity overflow");
        }

        let target_len = self.len + additional;
        let required_buckets = (target_len as f64 / self.max_load_factor).ceil();
        if !required_buckets.is_finite() || required_buckets >= usize::MAX as f64 {
            panic!("capacity overflow");
        }

        if !can_fit(target_len, self.capacity(), self.max_load_factor) {
            let new_capacity = self.capacity_for(target_len);
            self.resize(new_capacity);
        }
    }

    /// Grow the table according to the growth factor until the current length fits.
    fn grow(&mut self) {
        let new_capacity = self.capacity_for(self.len);
        self.resize(new_capacity);
    }

    /// Repeatedly apply the growth factor to the current capacity until `len` entries stay
    /// within the maximum load factor.
    ///
    /// # Panics
    /// Panics once the capacity saturates at `usize::MAX` without fitting `len`.
    fn capacity_for(&self, len: usize) -> usize {
        let mut capacity = self.capacity();
        while !can_fit(len, capacity, self.max_load_factor) {
            let grown = grown_capacity(capacity, self.growth_factor);
            if grown == capacity {
                panic!("capacity overflow");
            }
            capacity = grown;
        }
        capacity
    }

    /// Move every entry into a freshly allocated bucket array of `new_capacity` buckets.
    ///
    /// The new array is fully populated before it replaces the old one.
    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > 0, "capacity must stay positive");

        let old_capacity = self.capacity();
        let mut new_buckets = empty_buckets(new_capacity);

        for entry in self.buckets.iter_mut().flat_map(|chain| chain.drain(..)) {
            let index = Self::hash_to_index(&self.hash_builder, &entry.key, new_capacity);
            new_buckets[index].push(entry);
        }

        self.buckets = new_buckets;
        debug!(
            "resized hash table from {} to {} buckets ({} entries)",
            old_capacity, new_capacity, self.len
        );
    }
}

/// Returns whether `len` entries stay within `max_load_factor` over `capacity` buckets.
fn can_fit(len: usize, capacity: usize, max_load_factor: f64) -> bool {
    (len as f64) <= capacity as f64 * max_load_factor
}

/// Apply the growth factor once, always gaining at least one bucket.
fn grown_capacity(capacity: usize, growth_factor: f64) -> usize {
    let grown = (capacity as f64 * growth_factor).ceil() as usize;
    grown.max(capacity.saturating_add(1))
}

fn empty_buckets<K, V>(capacity: usize) -> Box<[Chain<K, V>]> {
    (0..capacity).map(|_| Vec::new()).collect()
}

impl<K, V, S> fmt::Debug for HashTable<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, Q, V, S> Index<&Q> for HashTable<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Panics
    /// Panics if the key is absent. Use [`HashTable::get_strict`] to handle that case instead.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
