//! Schema views and node classification
//!
//! [`Property`] is the recursive node the synthesis engine walks. [`Schema`]
//! is the view found under `schema` keys of parameters and responses; it
//! translates to the other views explicitly instead of pretending they are
//! the same shape.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resolve::definition_name;
use crate::view::{ListView, MapView, object_view};

/// Composition keywords the classifier does not interpret.
pub const COMPOSITION_KEYWORDS: [&str; 3] = ["allOf", "oneOf", "anyOf"];

/// Classification tag of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Object,
    Array,
    Primitive,
    Reference,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::Primitive => "primitive",
            Self::Reference => "reference",
        })
    }
}

object_view! {
    /// A schema node: definition entry, property, or array item.
    Property
}

pub type Properties<'a> = MapView<'a, Property<'a>>;
pub type StringList<'a> = ListView<'a, &'a str>;

impl<'a> Property<'a> {
    #[must_use]
    pub fn type_(&self) -> &'a str {
        self.node.str_field("type")
    }

    #[must_use]
    pub fn format(&self) -> &'a str {
        self.node.str_field("format")
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn pattern(&self) -> &'a str {
        self.node.str_field("pattern")
    }

    /// Raw `$ref` string.
    #[must_use]
    pub fn reference(&self) -> &'a str {
        self.node.str_field("$ref")
    }

    #[must_use]
    pub fn enum_values(&self) -> StringList<'a> {
        self.node.list("enum")
    }

    /// The single item schema of an array. The key is plural; the value is not.
    #[must_use]
    pub fn items(&self) -> Property<'a> {
        self.node.child("items")
    }

    #[must_use]
    pub fn properties(&self) -> Properties<'a> {
        self.node.map("properties")
    }

    #[must_use]
    pub fn required(&self) -> StringList<'a> {
        self.node.list("required")
    }

    /// True when `name` is listed in this node's `required` array.
    #[must_use]
    pub fn requires(&self, name: &str) -> bool {
        self.required().iter().any(|r| r == name)
    }

    /// First composition keyword present on the node, if any.
    #[must_use]
    pub fn composition(&self) -> Option<&'static str> {
        COMPOSITION_KEYWORDS
            .into_iter()
            .find(|k| self.node.get(k).value().is_some())
    }

    /// Definitions-table name this node points at, when it is a reference.
    #[must_use]
    pub fn referenced_name(&self) -> Option<&'a str> {
        definition_name(self.reference())
    }

    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.referenced_name().is_some()
    }

    /// Classify the node. Reference-ness wins over any declared `type`.
    #[must_use]
    pub fn shape(&self) -> Shape {
        if self.is_reference() {
            return Shape::Reference;
        }
        match self.type_() {
            "array" => Shape::Array,
            "object" if !self.properties().is_empty() => Shape::Object,
            _ => Shape::Primitive,
        }
    }
}

object_view! {
    /// The view found under a `schema` key.
    Schema
}

impl<'a> Schema<'a> {
    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn type_(&self) -> &'a str {
        self.node.str_field("type")
    }

    #[must_use]
    pub fn format(&self) -> &'a str {
        self.node.str_field("format")
    }

    #[must_use]
    pub fn reference(&self) -> &'a str {
        self.node.str_field("$ref")
    }

    /// Read the same node as a model (object) schema.
    #[must_use]
    pub fn as_model(&self) -> ModelSchema<'a> {
        ModelSchema { node: self.node }
    }

    /// Read the same node as an array schema.
    #[must_use]
    pub fn as_array(&self) -> ArraySchema<'a> {
        ArraySchema { node: self.node }
    }

    /// Read the same node as a synthesizable [`Property`].
    #[must_use]
    pub fn as_property(&self) -> Property<'a> {
        Property { node: self.node }
    }
}

object_view! {
    /// An object schema with named properties.
    ModelSchema
}

object_view! {
    /// A property of a [`ModelSchema`]. Flat: no nested items or properties.
    ModelProperty
}

impl<'a> ModelSchema<'a> {
    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn properties(&self) -> MapView<'a, ModelProperty<'a>> {
        self.node.map("properties")
    }

    #[must_use]
    pub fn required(&self) -> StringList<'a> {
        self.node.list("required")
    }
}

impl<'a> ModelProperty<'a> {
    #[must_use]
    pub fn type_(&self) -> &'a str {
        self.node.str_field("type")
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn pattern(&self) -> &'a str {
        self.node.str_field("pattern")
    }

    #[must_use]
    pub fn enum_values(&self) -> StringList<'a> {
        self.node.list("enum")
    }
}

object_view! {
    /// An array schema.
    ArraySchema
}

impl<'a> ArraySchema<'a> {
    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn items(&self) -> Schema<'a> {
        self.node.child("items")
    }
}
