//! Declarations produced by synthesis and the sinks that receive them
//!
//! The declaration stream is the interchange format between the synthesis
//! engine and backend emitters. It is append-only and depth-annotated so an
//! emitter can place nested declarations without re-walking the schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

/// One synthesized declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "decl", rename_all = "snake_case")]
pub enum Declaration {
    /// Documentation for the declaration that follows
    Comment { text: String, depth: usize },
    /// Opens a named aggregate
    BeginStruct { name: String, depth: usize },
    /// A member of the innermost open aggregate
    Field(Field),
    /// Closes the aggregate opened by the matching `BeginStruct`
    EndStruct { name: String, depth: usize },
    /// An exported top-level type name
    Alias { name: String, ty: TypeRef },
}

/// A member of an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Field {
    /// Sanitized identifier
    pub name: String,
    /// Key as written in the document
    pub json_name: String,
    pub ty: TypeRef,
    /// Listed in the enclosing schema's `required` array
    pub required: bool,
    pub depth: usize,
}

impl Declaration {
    /// Nesting depth of the declaration; aliases are always top level.
    #[must_use]
    pub const fn depth(&self) -> usize {
        match self {
            Self::Comment { depth, .. }
            | Self::BeginStruct { depth, .. }
            | Self::EndStruct { depth, .. }
            | Self::Field(Field { depth, .. }) => *depth,
            Self::Alias { .. } => 0,
        }
    }
}

/// Append-only destination for declarations.
pub trait DeclarationSink {
    fn emit(&mut self, declaration: Declaration);
}

impl DeclarationSink for Vec<Declaration> {
    fn emit(&mut self, declaration: Declaration) {
        self.push(declaration);
    }
}

impl<S: DeclarationSink + ?Sized> DeclarationSink for &mut S {
    fn emit(&mut self, declaration: Declaration) {
        (**self).emit(declaration);
    }
}

/// Sink that forwards every declaration to two sinks.
#[derive(Debug)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: DeclarationSink, B: DeclarationSink> DeclarationSink for Tee<A, B> {
    fn emit(&mut self, declaration: Declaration) {
        self.0.emit(declaration.clone());
        self.1.emit(declaration);
    }
}

/// Names of every top-level declaration (structs at depth 0 and aliases).
#[must_use]
pub fn exported_names(declarations: &[Declaration]) -> Vec<&str> {
    declarations
        .iter()
        .filter_map(|d| match d {
            Declaration::BeginStruct { name, depth: 0 } | Declaration::Alias { name, .. } => {
                Some(name.as_str())
            }
            _ => None,
        })
        .collect()
}
