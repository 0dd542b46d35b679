use std::{borrow::Borrow, fmt, ops::Index, slice, vec};

/// Insertion ordered key-value mapping.
///
/// Iteration follows insertion order, and [`insert`][Entries::insert] on an existing key replaces
/// the value in place, keeping its original position. Lookup is a linear scan, which is intended
/// for the small property sets this crate resolves.
///
/// Two [`Entries`] are equal when they contain the same pairs in the same order.
///
/// # Example
///
/// ```
/// use propjoin::Entries;
///
/// let mut entries = Entries::new();
/// entries.insert("width", 1920);
/// entries.insert("height", 1080);
///
/// assert_eq!(entries["width"], 1920);
/// assert_eq!(entries.insert("width", 1280), Some(1920));
/// assert_eq!(entries.keys().collect::<Vec<_>>(), [&"width", &"height"]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Entries<K, V> {
    repr: Vec<(K, V)>,
}

impl<K, V> Entries<K, V> {
    /// Create new empty [`Entries`].
    #[inline]
    pub const fn new() -> Self {
        Self { repr: Vec::new() }
    }

    /// Create new empty [`Entries`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            repr: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.repr.len()
    }

    /// Returns `true` if there is no entry.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.repr.is_empty()
    }

    /// Remove all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.repr.clear();
    }

    /// Returns an iterator of key-value pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.repr.iter().map(|(key, value)| (key, value))
    }

    /// Returns an iterator of keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.repr.iter().map(|(key, _)| key)
    }

    /// Returns an iterator of values in insertion order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.repr.iter().map(|(_, value)| value)
    }

    // ===== Lookup =====

    /// Returns a reference to the value of given key.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.repr
            .iter()
            .find_map(|(k, value)| (k.borrow() == key).then_some(value))
    }

    /// Returns a mutable reference to the value of given key.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.repr
            .iter_mut()
            .find_map(|(k, value)| ((*k).borrow() == key).then_some(value))
    }

    /// Returns `true` if the mapping contains given key.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.get(key).is_some()
    }

    // ===== Mutation =====

    /// Insert a key-value pair.
    ///
    /// If the key is already present, the value is replaced in place and the previous value is
    /// returned, the entry keeps its original position.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: PartialEq,
    {
        match self.repr.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.repr.push((key, value));
                None
            }
        }
    }

    /// Remove the entry of given key, returning its value.
    ///
    /// The relative order of the remaining entries is preserved.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        let at = self.repr.iter().position(|(k, _)| k.borrow() == key)?;
        Some(self.repr.remove(at).1)
    }
}

// ===== Entries traits =====

impl<K, V> Default for Entries<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entries<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, Q, V> Index<&Q> for Entries<K, V>
where
    K: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    type Output = V;

    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for Entries<K, V> {
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Entries<K, V> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut entries = Self::with_capacity(iter.size_hint().0);
        entries.extend(iter);
        entries
    }
}

impl<K, V> IntoIterator for Entries<K, V> {
    type Item = (K, V);

    type IntoIter = vec::IntoIter<(K, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.repr.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Entries<K, V> {
    type Item = &'a (K, V);

    type IntoIter = slice::Iter<'a, (K, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.repr.iter()
    }
}

// ===== Test =====
