//! Path items, operations and their inputs/outputs

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::method::Method;
use crate::schema::{Property, Schema, StringList};
use crate::view::{FromNode, ListView, MapView, object_view};

object_view! {
    /// An entry of `paths`: HTTP method token → operation.
    PathItem
}

impl<'a> PathItem<'a> {
    /// Every key of the path item read as an operation, including non-verb
    /// keys such as `parameters`.
    #[must_use]
    pub fn operations(&self) -> MapView<'a, Operation<'a>> {
        MapView::from_node(self.node)
    }

    /// Operations under recognized verb keys, in document order.
    pub fn iter_operations(self) -> impl Iterator<Item = (Method, Operation<'a>)> + 'a {
        self.operations()
            .iter()
            .map(|(key, op)| (Method::parse(key), op))
            .filter(|(method, _)| method.is_known())
    }

    /// Parameters shared by every operation of this path.
    #[must_use]
    pub fn parameters(&self) -> ListView<'a, Parameter<'a>> {
        self.node.list("parameters")
    }
}

object_view! {
    /// A single API operation.
    Operation
}

impl<'a> Operation<'a> {
    #[must_use]
    pub fn summary(&self) -> &'a str {
        self.node.str_field("summary")
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    /// `operationId`, `""` when absent.
    #[must_use]
    pub fn operation_id(&self) -> &'a str {
        self.node.str_field("operationId")
    }

    #[must_use]
    pub fn deprecated(&self) -> bool {
        self.node.bool_field("deprecated")
    }

    /// Status key (`"200"`, `"default"`, ...) → response.
    #[must_use]
    pub fn responses(&self) -> MapView<'a, Response<'a>> {
        self.node.map("responses")
    }

    #[must_use]
    pub fn parameters(&self) -> ListView<'a, Parameter<'a>> {
        self.node.list("parameters")
    }

    #[must_use]
    pub fn tags(&self) -> StringList<'a> {
        self.node.list("tags")
    }

    #[must_use]
    pub fn consumes(&self) -> StringList<'a> {
        self.node.list("consumes")
    }

    #[must_use]
    pub fn produces(&self) -> StringList<'a> {
        self.node.list("produces")
    }

    #[must_use]
    pub fn request_body(&self) -> RequestBody<'a> {
        self.node.child("requestBody")
    }
}

/// Where a parameter travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    FormData,
    Unknown,
}

impl ParameterLocation {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "path" => Self::Path,
            "query" => Self::Query,
            "header" => Self::Header,
            "body" => Self::Body,
            "formData" => Self::FormData,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Body => "body",
            Self::FormData => "formData",
            Self::Unknown => "unknown",
        }
    }
}

object_view! {
    /// An operation or path-level parameter.
    ///
    /// Carries either the simple shape (`type`/`format`/`pattern`/`items`) or
    /// a full `schema`. Both accessors are always available; the one that
    /// does not apply reads empty.
    Parameter
}

impl<'a> Parameter<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.node.str_field("name")
    }

    /// Raw `in` value.
    #[must_use]
    pub fn in_(&self) -> &'a str {
        self.node.str_field("in")
    }

    #[must_use]
    pub fn location(&self) -> ParameterLocation {
        ParameterLocation::parse(self.in_())
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn required(&self) -> bool {
        self.node.bool_field("required")
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
    pub fn pattern(&self) -> &'a str {
        self.node.str_field("pattern")
    }

    /// Item schema for `type: array` parameters.
    #[must_use]
    pub fn items(&self) -> Property<'a> {
        self.node.child("items")
    }

    #[must_use]
    pub fn schema(&self) -> Schema<'a> {
        self.node.child("schema")
    }

    /// The simple shape of this parameter read as a schema node.
    #[must_use]
    pub fn as_property(&self) -> Property<'a> {
        Property::from_node(self.node)
    }
}

object_view! {
    /// A response under an operation's `responses`.
    Response
}

impl<'a> Response<'a> {
    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn schema(&self) -> Schema<'a> {
        self.node.child("schema")
    }

    #[must_use]
    pub fn headers(&self) -> MapView<'a, Header<'a>> {
        self.node.map("headers")
    }

    /// Media type → body description.
    #[must_use]
    pub fn content(&self) -> MapView<'a, MediaType<'a>> {
        self.node.map("content")
    }
}

object_view! {
    /// A request body description.
    RequestBody
}

impl<'a> RequestBody<'a> {
    #[must_use]
    pub fn content(&self) -> MapView<'a, MediaType<'a>> {
        self.node.map("content")
    }

    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn required(&self) -> bool {
        self.node.bool_field("required")
    }
}

object_view! {
    MediaType
}

impl<'a> MediaType<'a> {
    #[must_use]
    pub fn schema(&self) -> Schema<'a> {
        self.node.child("schema")
    }

    #[must_use]
    pub fn encoding(&self) -> MapView<'a, Encoding<'a>> {
        self.node.map("encoding")
    }
}

object_view! {
    Header
}

impl<'a> Header<'a> {
    #[must_use]
    pub fn description(&self) -> &'a str {
        self.node.str_field("description")
    }

    #[must_use]
    pub fn required(&self) -> bool {
        self.node.bool_field("required")
    }

    #[must_use]
    pub fn deprecated(&self) -> bool {
        self.node.bool_field("deprecated")
    }

    #[must_use]
    pub fn type_(&self) -> &'a str {
        self.node.str_field("type")
    }

    #[must_use]
    pub fn format(&self) -> &'a str {
        self.node.str_field("format")
    }
}

object_view! {
    Encoding
}

impl<'a> Encoding<'a> {
    #[must_use]
    pub fn content_type(&self) -> &'a str {
        self.node.str_field("contentType")
    }

    #[must_use]
    pub fn style(&self) -> &'a str {
        self.node.str_field("style")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    const PETS: &str = r##"{
        "swagger": "2.0",
        "paths": {
            "/pets/{petId}": {
                "parameters": [{"name": "petId", "in": "path", "required": true, "type": "integer", "format": "int64"}],
                "get": {
                    "summary": "Info for a specific pet",
                    "operationId": "showPetById",
                    "tags": ["pets"],
                    "produces": ["application/json"],
                    "responses": {
                        "200": {
                            "description": "Expected response to a valid request",
                            "schema": {"$ref": "#/definitions/Pet"},
                            "headers": {"X-Rate-Limit": {"type": "integer", "format": "int32", "description": "calls per hour"}}
                        },
                        "default": {"description": "unexpected error"}
                    }
                },
                "delete": {"deprecated": true, "parameters": "bogus"},
                "x-owner": "team-pets"
            }
        }
    }"##;

    #[test]
    fn iter_operations_skips_non_verbs() {
        let doc = Document::from_json_str(PETS).unwrap();
        let item = doc.paths().get("/pets/{petId}");
        assert_eq!(item.operations().len(), 4);
        let verbs: Vec<_> = item.iter_operations().map(|(m, _)| m).collect();
        assert_eq!(verbs, vec![Method::Get, Method::Delete]);
    }

    #[test]
    fn operation_fields() {
        let doc = Document::from_json_str(PETS).unwrap();
        let op = doc.paths().get("/pets/{petId}").operations().get("get");
        assert_eq!(op.summary(), "Info for a specific pet");
        assert_eq!(op.operation_id(), "showPetById");
        assert!(!op.deprecated());
        assert_eq!(op.tags().iter().collect::<Vec<_>>(), vec!["pets"]);
        assert_eq!(op.produces().get(0), "application/json");
        assert_eq!(op.responses().keys().collect::<Vec<_>>(), vec!["200", "default"]);
        assert!(!op.request_body().is_valid());

        let ok = op.responses().get("200");
        assert_eq!(ok.schema().reference(), "#/definitions/Pet");
        let limit = ok.headers().get("X-Rate-Limit");
        assert_eq!(limit.type_(), "integer");
        assert_eq!(limit.description(), "calls per hour");
        assert!(!ok.content().is_valid());
    }

    #[test]
    fn absent_fields_are_empty() {
        let doc = Document::from_json_str(PETS).unwrap();
        let op = doc.paths().get("/pets/{petId}").operations().get("delete");
        assert!(op.deprecated());
        assert_eq!(op.operation_id(), "");
        assert_eq!(op.parameters().len(), 0);
        assert_eq!(op.parameters().iter().count(), 0);
        assert_eq!(op.responses().len(), 0);
        assert_eq!(op.tags().len(), 0);
    }

    #[test]
    fn path_level_parameter() {
        let doc = Document::from_json_str(PETS).unwrap();
        let param = doc.paths().get("/pets/{petId}").parameters().get(0);
        assert_eq!(param.name(), "petId");
        assert_eq!(param.location(), ParameterLocation::Path);
        assert!(param.required());
        assert_eq!(param.format(), "int64");
        assert!(!param.schema().is_valid());
        assert!(!param.items().is_valid());
    }

    #[test]
    fn body_parameter_schema() {
        let doc = Document::from_json_str(
            r##"{"paths": {"/pets": {"post": {"parameters": [
                {"name": "pet", "in": "body", "schema": {"$ref": "#/definitions/NewPet"}},
                {"name": "tags", "in": "query", "type": "array", "items": {"type": "string"}},
                {"name": "x", "in": "cookie"}
            ]}}}}"##,
        )
        .unwrap();
        let op = doc.paths().get("/pets").operations().get("post");
        let params: Vec<_> = op.parameters().iter().collect();
        assert_eq!(params[0].location(), ParameterLocation::Body);
        assert_eq!(params[0].schema().reference(), "#/definitions/NewPet");
        assert_eq!(params[0].type_(), "");
        assert_eq!(params[1].items().type_(), "string");
        assert_eq!(params[2].location(), ParameterLocation::Unknown);
    }

    #[test]
    fn request_body_and_media_types() {
        let doc = Document::from_json_str(
            r#"{"paths": {"/upload": {"post": {
                "requestBody": {"required": true, "description": "file", "content": {
                    "multipart/form-data": {
                        "schema": {"type": "object", "properties": {"file": {"type": "string"}}},
                        "encoding": {"file": {"contentType": "image/png", "style": "form"}}
                    }
                }}
            }}}}"#,
        )
        .unwrap();
        let body = doc.paths().get("/upload").operations().get("post").request_body();
        assert!(body.required());
        assert_eq!(body.description(), "file");
        let media = body.content().get("multipart/form-data");
        assert_eq!(media.schema().type_(), "object");
        let enc = media.encoding().get("file");
        assert_eq!(enc.content_type(), "image/png");
        assert_eq!(enc.style(), "form");
    }
}
