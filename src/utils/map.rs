#[cfg(not(feature = "preserve_order"))]
/// An abstraction over the associative array used for JSON objects.
///
/// This maps to [`::std::collections::btree_map::BTreeMap<K, V>`],
/// which keeps keys sorted rather than in insertion order. Enable the
/// `preserve_order` feature to opt in to [`::indexmap::IndexMap<K, V>`]
/// instead:
///
/// ```toml
/// [dependencies]
/// jmespath_eval = { version = "0.1", features = ["preserve_order"] }
/// ```
///
pub type Map<K, V> = ::std::collections::btree_map::BTreeMap<K, V>;
#[cfg(feature = "preserve_order")]
/// An abstraction over the associative array used for JSON objects.
///
/// This maps to [`::indexmap::IndexMap<K, V>`], which preserves the
/// insertion order of keys. Disable the `preserve_order` feature to opt
/// out to [`::std::collections::btree_map::BTreeMap<K, V>`] instead.
pub type Map<K, V> = ::indexmap::IndexMap<K, V>;

/// Creates a [`Map`] from a list of key-value pairs.
/// This macro is taken from the [maplit](https://github.com/bluss/maplit/blob/master/src/lib.rs)
/// crate to minimize external dependencies.
///
/// ## Example
///
/// ```
/// use jmespath_eval::map;
/// use jmespath_eval::Map;
///
/// let map = map!{
///     "a" => 1,
///     "b" => 2,
/// };
/// assert_eq!(map["a"], 1);
/// assert_eq!(map.get("c"), None);
/// ```
#[macro_export]
macro_rules! map {
    // trailing comma case
    ($($key:expr => $value:expr,)+) => (map!($($key => $value),+));

    ( $($key:expr => $value:expr),* ) => {
        {
            let mut _map = Map::new();
            $( let _ = _map.insert($key, $value); )*
            _map
        }
    };
}
