//! Lazy, tolerant views over the parsed document tree
//!
//! Views never own data and never fail: a missing key, or a key holding the
//! wrong JSON shape, reads as the empty value. Containers iterate in document
//! order (serde_json is built with `preserve_order`).

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

/// A possibly-absent JSON node borrowed from a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, Default)]
pub struct Node<'a>(Option<&'a Value>);

impl<'a> Node<'a> {
    #[must_use]
    pub const fn new(value: Option<&'a Value>) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    #[must_use]
    pub const fn value(self) -> Option<&'a Value> {
        self.0
    }

    /// True when the node is present and is a JSON object.
    #[must_use]
    pub fn is_object(self) -> bool {
        self.0.is_some_and(Value::is_object)
    }

    /// Child node under `key`. Non-object nodes have no children.
    #[must_use]
    pub fn get(self, key: &str) -> Node<'a> {
        Node(self.0.and_then(|v| v.as_object()).and_then(|o| o.get(key)))
    }

    /// String value under `key`, or `""`.
    #[must_use]
    pub fn str_field(self, key: &str) -> &'a str {
        self.get(key).0.and_then(Value::as_str).unwrap_or("")
    }

    /// Boolean value under `key`, or `false`.
    #[must_use]
    pub fn bool_field(self, key: &str) -> bool {
        self.get(key).0.and_then(Value::as_bool).unwrap_or(false)
    }

    #[must_use]
    pub fn child<T: FromNode<'a>>(self, key: &str) -> T {
        T::from_node(self.get(key))
    }

    #[must_use]
    pub fn map<T: FromNode<'a>>(self, key: &str) -> MapView<'a, T> {
        MapView::from_node(self.get(key))
    }

    #[must_use]
    pub fn list<T: FromNode<'a>>(self, key: &str) -> ListView<'a, T> {
        ListView::from_node(self.get(key))
    }
}

/// Construction of a typed view from an optional node.
pub trait FromNode<'a>: Sized {
    fn from_node(node: Node<'a>) -> Self;
}

impl<'a> FromNode<'a> for Node<'a> {
    fn from_node(node: Node<'a>) -> Self {
        node
    }
}

impl<'a> FromNode<'a> for &'a str {
    fn from_node(node: Node<'a>) -> Self {
        node.0.and_then(Value::as_str).unwrap_or("")
    }
}

impl<'a> FromNode<'a> for bool {
    fn from_node(node: Node<'a>) -> Self {
        node.0.and_then(Value::as_bool).unwrap_or(false)
    }
}

/// Declares an object view: a `Copy` wrapper over a [`Node`] that is valid
/// only when the node is a JSON object.
macro_rules! object_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name<'a> {
            node: $crate::view::Node<'a>,
        }

        impl<'a> $crate::view::FromNode<'a> for $name<'a> {
            fn from_node(node: $crate::view::Node<'a>) -> Self {
                Self { node }
            }
        }

        impl<'a> $name<'a> {
            /// True when the backing node exists and is an object.
            #[must_use]
            pub fn is_valid(&self) -> bool {
                self.node.is_object()
            }

            #[must_use]
            pub fn node(&self) -> $crate::view::Node<'a> {
                self.node
            }
        }
    };
}

pub(crate) use object_view;

/// Key → view mapping over a JSON object, in document order.
pub struct MapView<'a, T> {
    object: Option<&'a serde_json::Map<String, Value>>,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: FromNode<'a>> FromNode<'a> for MapView<'a, T> {
    fn from_node(node: Node<'a>) -> Self {
        Self {
            object: node.0.and_then(Value::as_object),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: FromNode<'a>> MapView<'a, T> {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.object.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.object.map_or(0, serde_json::Map::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View under `key`; an empty view when the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> T {
        T::from_node(Node(self.object.and_then(|o| o.get(key))))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.object.is_some_and(|o| o.contains_key(key))
    }

    pub fn keys(self) -> impl Iterator<Item = &'a str> + 'a {
        self.object
            .into_iter()
            .flat_map(|o| o.keys().map(String::as_str))
    }

    pub fn iter(self) -> impl Iterator<Item = (&'a str, T)> + 'a
    where
        T: 'a,
    {
        self.object
            .into_iter()
            .flat_map(|o| o.iter())
            .map(|(k, v)| (k.as_str(), T::from_node(Node(Some(v)))))
    }
}

impl<T> Clone for MapView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MapView<'_, T> {}

impl<T> Default for MapView<'_, T> {
    fn default() -> Self {
        Self {
            object: None,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for MapView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapView")
            .field("len", &self.object.map_or(0, serde_json::Map::len))
            .finish()
    }
}

/// Ordered element views over a JSON array.
pub struct ListView<'a, T> {
    array: Option<&'a [Value]>,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: FromNode<'a>> FromNode<'a> for ListView<'a, T> {
    fn from_node(node: Node<'a>) -> Self {
        Self {
            array: node.0.and_then(Value::as_array).map(Vec::as_slice),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: FromNode<'a>> ListView<'a, T> {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.array.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.array.map_or(0, <[Value]>::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`; an empty view when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> T {
        T::from_node(Node(self.array.and_then(|a| a.get(index))))
    }

    pub fn iter(self) -> impl Iterator<Item = T> + 'a
    where
        T: 'a,
    {
        self.array
            .into_iter()
            .flatten()
            .map(|v| T::from_node(Node(Some(v))))
    }
}

impl<T> Clone for ListView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListView<'_, T> {}

impl<T> Default for ListView<'_, T> {
    fn default() -> Self {
        Self {
            array: None,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ListView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("len", &self.array.map_or(0, <[Value]>::len))
            .finish()
    }
}
