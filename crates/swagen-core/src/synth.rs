//! Schema synthesis: recursive descent from a schema node to declarations
//!
//! One call classifies a node ([`Shape`]) and emits its declarations:
//!
//! - reference → a field/alias typed by the referenced definition's name. The
//!   definition itself is never expanded here; it is synthesized when the
//!   definitions table is walked, so reference cycles cannot recurse.
//! - object → an aggregate whose properties are synthesized one level deeper.
//!   Nested objects become standalone aggregates named `{parent}_{property}`
//!   plus a field in the parent typed by that name.
//! - array → a sequence over the item type. Object items are synthesized as
//!   `{name}_item` at the same depth; arrays of arrays nest sequences.
//! - primitive → a scalar from the type table, opaque when unrecognized.
//!
//! Placement: at depth 0 every non-aggregate result is an exported alias,
//! deeper it is a field of the enclosing aggregate.
//!
//! Field identifiers are unique within their aggregate (`id`, `id_2`).
//! Derived type names never reuse a definition's name; they take the next free
//! `_2`, `_3` suffix instead.

use std::collections::HashSet;

use crate::document::Document;
use crate::naming::{nested_name, sanitize, unique};
use crate::resolve::{definition_ref, resolve};
use crate::schema::{Properties, Property, Shape};
use crate::sink::{Declaration, DeclarationSink, Field};
use crate::types::{TypeRef, scalar_for};

/// Position of a node in the descent.
#[derive(Debug, Clone, Copy)]
pub struct Nesting<'n> {
    depth: usize,
    /// Type name of the enclosing aggregate
    parent: Option<&'n str>,
    /// Whether the enclosing aggregate lists this node as required
    required: bool,
    /// Identifier chosen by the parent when the sanitized key was taken
    ident: Option<&'n str>,
    /// Aggregates at this position get derived names, not definition keys
    derived: bool,
}

impl<'n> Nesting<'n> {
    /// Top level: a definitions-table entry.
    #[must_use]
    pub const fn top() -> Self {
        Self {
            depth: 0,
            parent: None,
            required: true,
            ident: None,
            derived: false,
        }
    }

    /// A property of the aggregate named `parent` at `depth - 1`.
    #[must_use]
    pub const fn member(parent: &'n str, depth: usize, required: bool) -> Self {
        Self {
            depth,
            parent: Some(parent),
            required,
            ident: None,
            derived: true,
        }
    }

    /// Use `ident` instead of the sanitized key for the field and for names
    /// derived from it.
    #[must_use]
    pub const fn renamed(self, ident: &'n str) -> Self {
        Self {
            ident: Some(ident),
            ..self
        }
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Name for an aggregate synthesized from the node called `name`.
    fn type_name(&self, name: &str) -> String {
        match self.parent {
            Some(parent) => nested_name(parent, self.ident.unwrap_or(name)),
            None => sanitize(name),
        }
    }

    fn field_name(&self, name: &str) -> String {
        self.ident.map_or_else(|| sanitize(name), str::to_string)
    }

    /// Same depth, no enclosing aggregate name: for array items that get a
    /// fully derived name of their own.
    const fn detached(&self) -> Nesting<'static> {
        Nesting {
            depth: self.depth,
            parent: None,
            required: true,
            ident: None,
            derived: true,
        }
    }
}

/// The synthesis engine.
///
/// With a definitions table attached, references that do not resolve are
/// emitted as opaque fields preceded by a diagnostic comment. Without one,
/// every `#/definitions/` reference is trusted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer<'d> {
    definitions: Option<Properties<'d>>,
}

impl<'d> Synthesizer<'d> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_definitions(definitions: Properties<'d>) -> Self {
        Self {
            definitions: Some(definitions),
        }
    }

    /// Synthesize `node` as a top-level declaration named `name`.
    pub fn synthesize<S>(&self, node: Property<'_>, name: &str, sink: &mut S) -> Shape
    where
        S: DeclarationSink + ?Sized,
    {
        self.synthesize_nested(node, name, Nesting::top(), sink)
    }

    /// Synthesize `node` at an explicit position.
    pub fn synthesize_nested<S>(
        &self,
        node: Property<'_>,
        name: &str,
        nesting: Nesting<'_>,
        sink: &mut S,
    ) -> Shape
    where
        S: DeclarationSink + ?Sized,
    {
        let shape = node.shape();
        match shape {
            Shape::Reference => {
                let ty = self.reference_type(node, nesting.depth, sink);
                describe(node, nesting.depth, sink);
                place(name, ty, nesting, sink);
            }
            Shape::Object => {
                let type_name = self.aggregate_name(nesting, name);
                if type_name != nesting.type_name(name) {
                    tracing::warn!(
                        name = %nesting.type_name(name),
                        renamed = %type_name,
                        "derived type name is taken by a definition"
                    );
                }
                describe(node, nesting.depth, sink);
                sink.emit(Declaration::BeginStruct {
                    name: type_name.clone(),
                    depth: nesting.depth,
                });
                let depth = nesting.depth + 1;
                let mut idents = HashSet::new();
                for (key, child) in node.properties().iter() {
                    let required = node.requires(key);
                    let base = sanitize(key);
                    let ident = unique(base.clone(), &mut idents);
                    let mut member = Nesting::member(&type_name, depth, required);
                    if ident != base {
                        tracing::warn!(property = key, field = %ident, "field identifier is taken");
                        member = member.renamed(&ident);
                    }
                    if self.synthesize_nested(child, key, member, sink) == Shape::Object {
                        sink.emit(Declaration::Field(Field {
                            name: ident.clone(),
                            json_name: key.to_string(),
                            ty: TypeRef::Named(self.aggregate_name(member, key)),
                            required,
                            depth,
                        }));
                    }
                }
                sink.emit(Declaration::EndStruct {
                    name: type_name,
                    depth: nesting.depth,
                });
            }
            Shape::Array => {
                let item_name = nested_name(&nesting.type_name(name), "item");
                let element = self.element_type(node.items(), &item_name, nesting, sink);
                describe(node, nesting.depth, sink);
                place(name, TypeRef::sequence(element), nesting, sink);
            }
            Shape::Primitive => {
                let ty = self.primitive_type(node, nesting.depth, sink);
                describe(node, nesting.depth, sink);
                place(name, ty, nesting, sink);
            }
        }
        shape
    }

    /// Type of a free-standing schema such as a parameter or response body.
    ///
    /// Inline objects are synthesized as top-level aggregates named `name`;
    /// arrays of them use `{name}_item`.
    pub fn type_of<S>(&self, node: Property<'_>, name: &str, sink: &mut S) -> TypeRef
    where
        S: DeclarationSink + ?Sized,
    {
        self.element_type(node, name, Nesting::top(), sink)
    }

    /// Element type of an array whose item schema is `item`.
    fn element_type<S>(
        &self,
        item: Property<'_>,
        item_name: &str,
        nesting: Nesting<'_>,
        sink: &mut S,
    ) -> TypeRef
    where
        S: DeclarationSink + ?Sized,
    {
        match item.shape() {
            Shape::Reference => self.reference_type(item, nesting.depth, sink),
            Shape::Primitive => self.primitive_type(item, nesting.depth, sink),
            Shape::Object => {
                let detached = nesting.detached();
                self.synthesize_nested(item, item_name, detached, sink);
                TypeRef::Named(self.aggregate_name(detached, item_name))
            }
            Shape::Array => {
                let inner_name = nested_name(item_name, "item");
                TypeRef::sequence(self.element_type(item.items(), &inner_name, nesting, sink))
            }
        }
    }

    /// Type name of an aggregate synthesized for `name` at `nesting`.
    fn aggregate_name(&self, nesting: Nesting<'_>, name: &str) -> String {
        let type_name = nesting.type_name(name);
        if !nesting.derived {
            return type_name;
        }
        let Some(definitions) = self.definitions else {
            return type_name;
        };
        let taken = |candidate: &str| definitions.iter().any(|(key, _)| sanitize(key) == candidate);
        if !taken(&type_name) {
            return type_name;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{type_name}_{n}");
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn reference_type<S>(&self, node: Property<'_>, depth: usize, sink: &mut S) -> TypeRef
    where
        S: DeclarationSink + ?Sized,
    {
        let Some(target) = node.referenced_name() else {
            return TypeRef::opaque();
        };
        if let Some(definitions) = self.definitions {
            if !resolve(definitions, target).is_valid() {
                tracing::warn!(reference = node.reference(), "unresolved reference");
                sink.emit(Declaration::Comment {
                    text: format!("unresolved reference `{}`", definition_ref(target)),
                    depth,
                });
                return TypeRef::opaque();
            }
        }
        TypeRef::named(sanitize(target))
    }

    fn primitive_type<S>(&self, node: Property<'_>, depth: usize, sink: &mut S) -> TypeRef
    where
        S: DeclarationSink + ?Sized,
    {
        if let Some(keyword) = node.composition() {
            tracing::warn!(keyword, "schema composition is not supported");
            sink.emit(Declaration::Comment {
                text: format!("`{keyword}` is not supported; using a placeholder type"),
                depth,
            });
            return TypeRef::opaque();
        }
        scalar_for(node.type_(), node.format()).into()
    }
}

fn describe<S>(node: Property<'_>, depth: usize, sink: &mut S)
where
    S: DeclarationSink + ?Sized,
{
    let text = node.description().trim();
    if !text.is_empty() {
        sink.emit(Declaration::Comment {
            text: text.to_string(),
            depth,
        });
    }
}

/// Alias at the top level, field anywhere deeper.
fn place<S>(name: &str, ty: TypeRef, nesting: Nesting<'_>, sink: &mut S)
where
    S: DeclarationSink + ?Sized,
{
    if nesting.depth == 0 {
        sink.emit(Declaration::Alias {
            name: sanitize(name),
            ty,
        });
    } else {
        sink.emit(Declaration::Field(Field {
            name: nesting.field_name(name),
            json_name: name.to_string(),
            ty,
            required: nesting.required,
            depth: nesting.depth,
        }));
    }
}

/// Synthesize every entry of the document's definitions table, in document
/// order, checking references against that same table.
pub fn synthesize_definitions<S>(document: &Document, sink: &mut S) -> Vec<(String, Shape)>
where
    S: DeclarationSink + ?Sized,
{
    let synthesizer = Synthesizer::with_definitions(document.definitions());
    document
        .definitions()
        .iter()
        .map(|(name, schema)| {
            let shape = synthesizer.synthesize(schema, name, sink);
            tracing::debug!(definition = name, %shape, "synthesized");
            (name.to_string(), shape)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Scalar;
    use crate::view::{FromNode, Node};
    use serde_json::{Value, json};

    fn prop(v: &Value) -> Property<'_> {
        Property::from_node(Node::new(Some(v)))
    }

    fn run(v: &Value, name: &str) -> (Shape, Vec<Declaration>) {
        let mut out = Vec::new();
        let shape = Synthesizer::new().synthesize(prop(v), name, &mut out);
        (shape, out)
    }

    fn field(name: &str, ty: TypeRef, required: bool, depth: usize) -> Declaration {
        Declaration::Field(Field {
            name: name.into(),
            json_name: name.into(),
            ty,
            required,
            depth,
        })
    }

    fn begin(name: &str, depth: usize) -> Declaration {
        Declaration::BeginStruct { name: name.into(), depth }
    }

    fn end(name: &str, depth: usize) -> Declaration {
        Declaration::EndStruct { name: name.into(), depth }
    }

    #[test]
    fn object_with_string_and_string_array() {
        let v = json!({"type": "object", "properties": {
            "name": {"type": "string"},
            "tags": {"type": "array", "items": {"type": "string"}}
        }});
        let (shape, out) = run(&v, "Pet");
        assert_eq!(shape, Shape::Object);
        assert_eq!(
            out,
            vec![
                begin("Pet", 0),
                field("name", Scalar::String.into(), false, 1),
                field("tags", TypeRef::sequence(Scalar::String.into()), false, 1),
                end("Pet", 0),
            ]
        );
    }

    #[test]
    fn nested_reference_is_not_inlined() {
        let v = json!({"type": "object", "required": ["pet"], "properties": {
            "pet": {"$ref": "#/definitions/Pet"}
        }});
        let (_, out) = run(&v, "Adoption");
        assert_eq!(
            out,
            vec![
                begin("Adoption", 0),
                field("pet", TypeRef::named("Pet"), true, 1),
                end("Adoption", 0),
            ]
        );
    }

    #[test]
    fn nested_object_gets_struct_and_field() {
        let v = json!({"type": "object", "properties": {
            "owner": {"type": "object", "properties": {"name": {"type": "string"}}}
        }});
        let (_, out) = run(&v, "Pet");
        assert_eq!(
            out,
            vec![
                begin("Pet", 0),
                begin("Pet_owner", 1),
                field("name", Scalar::String.into(), false, 2),
                end("Pet_owner", 1),
                field("owner", TypeRef::named("Pet_owner"), false, 1),
                end("Pet", 0),
            ]
        );
    }

    #[test]
    fn top_level_array_is_alias() {
        let v = json!({"type": "array", "items": {"$ref": "#/definitions/Pet"}});
        let (shape, out) = run(&v, "Pets");
        assert_eq!(shape, Shape::Array);
        assert_eq!(
            out,
            vec![Declaration::Alias { name: "Pets".into(), ty: TypeRef::sequence(TypeRef::named("Pet")) }]
        );
    }

    #[test]
    fn primitive_array_items_use_format() {
        let v = json!({"type": "array", "items": {"type": "integer", "format": "int64"}});
        let (_, out) = run(&v, "Ids");
        assert_eq!(
            out,
            vec![Declaration::Alias { name: "Ids".into(), ty: TypeRef::sequence(Scalar::Int64.into()) }]
        );
    }

    #[test]
    fn array_of_objects_synthesizes_item_type() {
        let v = json!({"type": "array", "items": {"type": "object", "properties": {"id": {"type": "integer"}}}});
        let (_, out) = run(&v, "Rows");
        assert_eq!(
            out,
            vec![
                begin("Rows_item", 0),
                field("id", Scalar::Int32.into(), false, 1),
                end("Rows_item", 0),
                Declaration::Alias { name: "Rows".into(), ty: TypeRef::sequence(TypeRef::named("Rows_item")) },
            ]
        );
    }

    #[test]
    fn nested_array_of_objects_is_field() {
        let v = json!({"type": "object", "properties": {
            "lines": {"type": "array", "items": {"type": "object", "properties": {"qty": {"type": "number"}}}}
        }});
        let (_, out) = run(&v, "Order");
        assert_eq!(
            out,
            vec![
                begin("Order", 0),
                begin("Order_lines_item", 1),
                field("qty", Scalar::Float.into(), false, 2),
                end("Order_lines_item", 1),
                field("lines", TypeRef::sequence(TypeRef::named("Order_lines_item")), false, 1),
                end("Order", 0),
            ]
        );
    }

    #[test]
    fn array_of_arrays_nests_sequences() {
        let v = json!({"type": "array", "items": {"type": "array", "items": {"type": "number", "format": "double"}}});
        let (shape, out) = run(&v, "Matrix");
        assert_eq!(shape, Shape::Array);
        assert_eq!(
            out,
            vec![Declaration::Alias {
                name: "Matrix".into(),
                ty: TypeRef::sequence(TypeRef::sequence(Scalar::Double.into())),
            }]
        );
    }

    #[test]
    fn array_of_arrays_of_objects() {
        let v = json!({"type": "array", "items": {"type": "array", "items": {"type": "object", "properties": {"x": {"type": "boolean"}}}}});
        let (_, out) = run(&v, "Grid");
        assert_eq!(out[0], begin("Grid_item_item", 0));
        assert_eq!(
            out.last(),
            Some(&Declaration::Alias {
                name: "Grid".into(),
                ty: TypeRef::sequence(TypeRef::sequence(TypeRef::named("Grid_item_item"))),
            })
        );
    }

    #[test]
    fn bare_object_and_unknown_types_are_opaque() {
        let v = json!({"type": "object", "properties": {
            "meta": {"type": "object"},
            "blob": {"type": "file"},
            "untyped": {}
        }});
        let (_, out) = run(&v, "Thing");
        assert_eq!(out[1], field("meta", TypeRef::opaque(), false, 1));
        assert_eq!(out[2], field("blob", TypeRef::opaque(), false, 1));
        assert_eq!(out[3], field("untyped", TypeRef::opaque(), false, 1));
    }

    #[test]
    fn top_level_primitive_is_alias() {
        let (shape, out) = run(&json!({"type": "string", "description": "An ISO code"}), "Country");
        assert_eq!(shape, Shape::Primitive);
        assert_eq!(
            out,
            vec![
                Declaration::Comment { text: "An ISO code".into(), depth: 0 },
                Declaration::Alias { name: "Country".into(), ty: Scalar::String.into() },
            ]
        );
    }

    #[test]
    fn descriptions_precede_their_declaration() {
        let v = json!({"type": "object", "description": "A pet", "properties": {
            "tags": {"type": "array", "description": "Labels", "items": {
                "type": "object", "description": "One label", "properties": {"v": {"type": "string"}}
            }}
        }});
        let (_, out) = run(&v, "Pet");
        assert_eq!(
            out,
            vec![
                Declaration::Comment { text: "A pet".into(), depth: 0 },
                begin("Pet", 0),
                Declaration::Comment { text: "One label".into(), depth: 1 },
                begin("Pet_tags_item", 1),
                field("v", Scalar::String.into(), false, 2),
                end("Pet_tags_item", 1),
                Declaration::Comment { text: "Labels".into(), depth: 1 },
                field("tags", TypeRef::sequence(TypeRef::named("Pet_tags_item")), false, 1),
                end("Pet", 0),
            ]
        );
    }

    #[test]
    fn names_are_sanitized_but_json_names_kept() {
        let v = json!({"type": "object", "properties": {"created-at": {"type": "string"}, "type": {"type": "string"}}});
        let (_, out) = run(&v, "my model");
        assert_eq!(out[0], begin("my_model", 0));
        let Declaration::Field(f) = &out[1] else { panic!("expected field") };
        assert_eq!(f.name, "created_at");
        assert_eq!(f.json_name, "created-at");
        let Declaration::Field(f) = &out[2] else { panic!("expected field") };
        assert_eq!(f.name, "type_");
        assert_eq!(f.json_name, "type");
    }

    #[test]
    fn colliding_field_identifiers_get_suffixes() {
        let v = json!({"type": "object", "properties": {
            "created-at": {"type": "string"},
            "created_at": {"type": "integer"},
            "tag-list": {"type": "object", "properties": {"x": {"type": "string"}}},
            "tag_list": {"type": "object", "properties": {"y": {"type": "string"}}}
        }});
        let (_, out) = run(&v, "Event");
        let renamed = |name: &str, json_name: &str, ty: TypeRef| {
            Declaration::Field(Field {
                name: name.into(),
                json_name: json_name.into(),
                ty,
                required: false,
                depth: 1,
            })
        };
        assert_eq!(
            out,
            vec![
                begin("Event", 0),
                renamed("created_at", "created-at", Scalar::String.into()),
                renamed("created_at_2", "created_at", Scalar::Int32.into()),
                begin("Event_tag_list", 1),
                field("x", Scalar::String.into(), false, 2),
                end("Event_tag_list", 1),
                renamed("tag_list", "tag-list", TypeRef::named("Event_tag_list")),
                begin("Event_tag_list_2", 1),
                field("y", Scalar::String.into(), false, 2),
                end("Event_tag_list_2", 1),
                renamed("tag_list_2", "tag_list", TypeRef::named("Event_tag_list_2")),
                end("Event", 0),
            ]
        );
    }

    #[test]
    fn derived_names_avoid_definition_names() {
        let doc = Document::from_json_str(
            r#"{"definitions": {
                "Pet": {"type": "object", "properties": {
                    "owner": {"type": "object", "properties": {"name": {"type": "string"}}}
                }},
                "Pet_owner": {"type": "string"},
                "Tags": {"type": "array", "items": {"type": "object", "properties": {"label": {"type": "string"}}}},
                "Tags_item": {"type": "integer"}
            }}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        synthesize_definitions(&doc, &mut out);

        assert!(out.contains(&begin("Pet_owner_2", 1)));
        assert!(out.contains(&field("owner", TypeRef::named("Pet_owner_2"), false, 1)));
        assert!(out.contains(&begin("Tags_item_2", 0)));
        assert!(out.contains(&Declaration::Alias {
            name: "Tags".into(),
            ty: TypeRef::sequence(TypeRef::named("Tags_item_2")),
        }));
        assert_eq!(
            crate::sink::exported_names(&out),
            vec!["Pet", "Pet_owner", "Tags_item_2", "Tags", "Tags_item"]
        );
    }

    #[test]
    fn composition_falls_back_with_diagnostic() {
        let v = json!({"type": "object", "properties": {"pet": {"allOf": [{"$ref": "#/definitions/Pet"}]}}});
        let (_, out) = run(&v, "Wrapper");
        assert_eq!(
            out[1],
            Declaration::Comment { text: "`allOf` is not supported; using a placeholder type".into(), depth: 1 }
        );
        assert_eq!(out[2], field("pet", TypeRef::opaque(), false, 1));
    }

    #[test]
    fn unresolved_reference_with_definitions() {
        let defs = json!({"Pet": {"type": "object"}});
        let v = json!({"type": "object", "properties": {
            "pet": {"$ref": "#/definitions/Pet"},
            "owner": {"$ref": "#/definitions/Owner"}
        }});
        let synth = Synthesizer::with_definitions(Properties::from_node(Node::new(Some(&defs))));
        let mut out = Vec::new();
        synth.synthesize(prop(&v), "Adoption", &mut out);
        assert_eq!(out[1], field("pet", TypeRef::named("Pet"), false, 1));
        assert_eq!(
            out[2],
            Declaration::Comment { text: "unresolved reference `#/definitions/Owner`".into(), depth: 1 }
        );
        assert_eq!(out[3], field("owner", TypeRef::opaque(), false, 1));
    }

    #[test]
    fn self_reference_terminates() {
        let v = json!({"type": "object", "properties": {
            "children": {"type": "array", "items": {"$ref": "#/definitions/Node"}},
            "parent": {"$ref": "#/definitions/Node"}
        }});
        let (shape, out) = run(&v, "Node");
        assert_eq!(shape, Shape::Object);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn synthesis_is_deterministic() {
        let v = json!({"type": "object", "required": ["id"], "properties": {
            "id": {"type": "integer", "format": "int64"},
            "owner": {"type": "object", "properties": {"tags": {"type": "array", "items": {"type": "object", "properties": {"k": {"type": "string"}}}}}}
        }});
        let synth = Synthesizer::new();
        let mut a = Vec::new();
        let mut b = Vec::new();
        assert_eq!(synth.synthesize(prop(&v), "Pet", &mut a), synth.synthesize(prop(&v), "Pet", &mut b));
        assert_eq!(a, b);
    }

    #[test]
    fn type_of_free_standing_schemas() {
        let synth = Synthesizer::new();
        let mut out = Vec::new();

        let v = json!({"type": "array", "items": {"$ref": "#/definitions/Pet"}});
        assert_eq!(synth.type_of(prop(&v), "list_pets_response", &mut out), TypeRef::sequence(TypeRef::named("Pet")));
        assert!(out.is_empty());

        let v = json!({"type": "object", "properties": {"code": {"type": "integer"}}});
        assert_eq!(synth.type_of(prop(&v), "get_error", &mut out), TypeRef::named("get_error"));
        assert_eq!(out.first(), Some(&begin("get_error", 0)));
        out.clear();

        let v = json!({"type": "array", "items": {"type": "object", "properties": {"a": {"type": "string"}}}});
        assert_eq!(
            synth.type_of(prop(&v), "put_rows", &mut out),
            TypeRef::sequence(TypeRef::named("put_rows_item"))
        );
        assert_eq!(out.first(), Some(&begin("put_rows_item", 0)));
    }

    #[test]
    fn definitions_walk_in_document_order() {
        let doc = Document::from_json_str(
            r##"{"definitions": {
                "Pets": {"type": "array", "items": {"$ref": "#/definitions/Pet"}},
                "Pet": {"type": "object", "properties": {"id": {"type": "integer"}}},
                "Id": {"type": "string"}
            }}"##,
        )
        .unwrap();
        let mut out = Vec::new();
        let shapes = synthesize_definitions(&doc, &mut out);
        assert_eq!(
            shapes,
            vec![
                ("Pets".to_string(), Shape::Array),
                ("Pet".to_string(), Shape::Object),
                ("Id".to_string(), Shape::Primitive),
            ]
        );
        assert_eq!(crate::sink::exported_names(&out), vec!["Pets", "Pet", "Id"]);
    }
}
