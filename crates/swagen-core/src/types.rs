//! Primitive type table and the type references carried by declarations

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rust type used for the opaque placeholder unless configured otherwise.
pub const DEFAULT_OPAQUE_TYPE: &str = "serde_json::Value";

/// Target scalar for a Swagger primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Scalar {
    String,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    Bool,
    Int32,
    Int64,
    /// Unrecognized or free-form type, rendered as a placeholder
    Opaque,
}

impl Scalar {
    /// Rust spelling; `Opaque` renders as `opaque`.
    #[must_use]
    pub const fn rust_type<'o>(self, opaque: &'o str) -> &'o str {
        match self {
            Self::String => "String",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Bool => "bool",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Opaque => opaque,
        }
    }
}

/// Map a declared `(type, format)` pair to its scalar.
///
/// | type    | format        | scalar |
/// |---------|---------------|--------|
/// | string  | any           | String |
/// | number  | double        | Double |
/// | number  | other/absent  | Float  |
/// | boolean | any           | Bool   |
/// | integer | int64         | Int64  |
/// | integer | other/absent  | Int32  |
/// | other   |               | Opaque |
#[must_use]
pub fn scalar_for(type_: &str, format: &str) -> Scalar {
    match (type_, format) {
        ("string", _) => Scalar::String,
        ("number", "double") => Scalar::Double,
        ("number", _) => Scalar::Float,
        ("boolean", _) => Scalar::Bool,
        ("integer", "int64") => Scalar::Int64,
        ("integer", _) => Scalar::Int32,
        _ => Scalar::Opaque,
    }
}

/// The type of a synthesized field or alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeRef {
    Scalar(Scalar),
    /// A named declaration: a definition or a synthesized nested type
    Named(String),
    Sequence(Box<TypeRef>),
}

impl TypeRef {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn sequence(inner: Self) -> Self {
        Self::Sequence(Box::new(inner))
    }

    #[must_use]
    pub const fn opaque() -> Self {
        Self::Scalar(Scalar::Opaque)
    }

    /// Rust spelling, with `opaque` standing in for [`Scalar::Opaque`].
    #[must_use]
    pub fn to_rust(&self, opaque: &str) -> String {
        match self {
            Self::Scalar(s) => s.rust_type(opaque).to_string(),
            Self::Named(name) => name.clone(),
            Self::Sequence(inner) => format!("Vec<{}>", inner.to_rust(opaque)),
        }
    }
}

impl From<Scalar> for TypeRef {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rust(DEFAULT_OPAQUE_TYPE))
    }
}
