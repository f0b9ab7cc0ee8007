//! Per-operation stub signatures
//!
//! Every (path, verb) pair becomes one [`OperationStub`]. Inline schemas found
//! on parameters and responses are synthesized into the same declaration sink
//! as the definitions, so the rendered trait only refers to named types.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::method::Method;
use crate::naming::{nested_name, operation_name, sanitize, unique};
use crate::operation::{Operation, Parameter, ParameterLocation, PathItem, Response};
use crate::schema::Schema;
use crate::sink::DeclarationSink;
use crate::synth::Synthesizer;
use crate::types::TypeRef;

/// Name given to an OAS3 `requestBody` when it becomes a parameter.
const REQUEST_BODY_PARAM: &str = "body";

/// The signature of one API operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OperationStub {
    /// Unique, sanitized function name
    pub name: String,
    pub method: Method,
    pub path: String,
    /// Operation description, or its summary when there is none
    pub description: String,
    pub params: Vec<StubParam>,
    /// `None` when no success or default response carries a schema
    pub response: Option<TypeRef>,
    pub deprecated: bool,
}

/// A parameter of an [`OperationStub`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StubParam {
    /// Sanitized identifier, unique within the operation
    pub name: String,
    /// Name as written in the document
    pub wire_name: String,
    pub location: ParameterLocation,
    pub ty: TypeRef,
    pub required: bool,
}

/// Collect a stub for every operation under a recognized verb, in document
/// order, synthesizing inline schemas into `sink`.
pub fn collect_operations<S>(document: &Document, sink: &mut S) -> Vec<OperationStub>
where
    S: DeclarationSink + ?Sized,
{
    let synthesizer = Synthesizer::with_definitions(document.definitions());
    let mut used = HashSet::new();
    let mut stubs = Vec::new();

    for (path, item) in document.paths().iter() {
        for (method, operation) in item.iter_operations() {
            let name = unique(operation_name(path, method, &operation), &mut used);
            let stub = build_stub(&synthesizer, name, path, method, item, operation, sink);
            tracing::debug!(
                operation = %stub.name,
                %method,
                path,
                params = stub.params.len(),
                "collected operation"
            );
            stubs.push(stub);
        }
    }
    stubs
}

fn build_stub<S>(
    synthesizer: &Synthesizer<'_>,
    name: String,
    path: &str,
    method: Method,
    item: PathItem<'_>,
    operation: Operation<'_>,
    sink: &mut S,
) -> OperationStub
where
    S: DeclarationSink + ?Sized,
{
    let mut param_names = HashSet::new();
    let mut params = Vec::new();
    for param in merged_parameters(item, operation) {
        let ident = unique(sanitize(param.name()), &mut param_names);
        let ty = parameter_type(synthesizer, &name, param, sink);
        params.push(StubParam {
            name: ident,
            wire_name: param.name().to_string(),
            location: param.location(),
            ty,
            required: param.required() || param.location() == ParameterLocation::Path,
        });
    }

    let body = operation.request_body();
    if body.is_valid() {
        let schema = first_media_schema(body.content().iter().map(|(_, media)| media.schema()));
        let ty = schema_type(synthesizer, schema, &nested_name(&name, REQUEST_BODY_PARAM), sink);
        params.push(StubParam {
            name: unique(REQUEST_BODY_PARAM.to_string(), &mut param_names),
            wire_name: REQUEST_BODY_PARAM.to_string(),
            location: ParameterLocation::Body,
            ty,
            required: body.required(),
        });
    }

    let response = success_response(operation)
        .map(|schema| schema_type(synthesizer, schema, &nested_name(&name, "response"), sink));

    let description = match operation.description().trim() {
        "" => operation.summary().trim(),
        d => d,
    };

    OperationStub {
        name,
        method,
        path: path.to_string(),
        description: description.to_string(),
        params,
        response,
        deprecated: operation.deprecated(),
    }
}

/// Path-level parameters followed by operation-level ones. An operation
/// parameter with the same name and location replaces the path-level one in
/// place.
fn merged_parameters<'a>(item: PathItem<'a>, operation: Operation<'a>) -> Vec<Parameter<'a>> {
    let mut merged: Vec<Parameter<'a>> = item.parameters().iter().collect();
    for param in operation.parameters().iter() {
        let existing = merged
            .iter_mut()
            .find(|p| p.name() == param.name() && p.in_() == param.in_());
        match existing {
            Some(slot) => *slot = param,
            None => merged.push(param),
        }
    }
    merged
}

fn parameter_type<S>(
    synthesizer: &Synthesizer<'_>,
    operation: &str,
    param: Parameter<'_>,
    sink: &mut S,
) -> TypeRef
where
    S: DeclarationSink + ?Sized,
{
    let derived = nested_name(operation, param.name());
    let schema = param.schema();
    if schema.is_valid() {
        schema_type(synthesizer, schema, &derived, sink)
    } else {
        synthesizer.type_of(param.as_property(), &derived, sink)
    }
}

fn schema_type<S>(synthesizer: &Synthesizer<'_>, schema: Schema<'_>, name: &str, sink: &mut S) -> TypeRef
where
    S: DeclarationSink + ?Sized,
{
    synthesizer.type_of(schema.as_property(), name, sink)
}

/// Schema of the first `2xx` response that has one. `default` is consulted
/// only when no `2xx` response is declared at all.
fn success_response(operation: Operation<'_>) -> Option<Schema<'_>> {
    let responses = operation.responses();
    let mut declared = false;
    for (_, response) in responses.iter().filter(|(status, _)| is_success(status)) {
        declared = true;
        let schema = response_schema(response);
        if schema.is_valid() {
            return Some(schema);
        }
    }
    if declared {
        return None;
    }
    Some(response_schema(responses.get("default"))).filter(Schema::is_valid)
}

fn is_success(status: &str) -> bool {
    (status.len() == 3 && status.starts_with('2') && status.bytes().all(|b| b.is_ascii_digit()))
        || status.eq_ignore_ascii_case("2XX")
}

/// Swagger 2.0 `schema`, or the schema of the first OAS3 media type.
fn response_schema(response: Response<'_>) -> Schema<'_> {
    let schema = response.schema();
    if schema.is_valid() {
        return schema;
    }
    first_media_schema(response.content().iter().map(|(_, media)| media.schema()))
}

fn first_media_schema<'a>(mut schemas: impl Iterator<Item = Schema<'a>>) -> Schema<'a> {
    schemas.find(Schema::is_valid).unwrap_or_default()
}

/// Render the stubs as one Rust trait.
#[must_use]
pub fn render_trait(stubs: &[OperationStub], trait_name: &str, opaque: &str) -> String {
    let mut out = String::new();
    out.push_str("/// One method per API operation.\n");
    out.push_str(&format!("pub trait {} {{\n", sanitize(trait_name)));
    out.push_str("    type Error;\n");

    for stub in stubs {
        out.push('\n');
        for line in stub.description.lines() {
            match line.trim_end() {
                "" => out.push_str("    ///\n"),
                line => out.push_str(&format!("    /// {line}\n")),
            }
        }
        if !stub.description.is_empty() {
            out.push_str("    ///\n");
        }
        out.push_str(&format!(
            "    /// `{} {}`\n",
            stub.method.as_str().to_ascii_uppercase(),
            stub.path
        ));
        if stub.deprecated {
            out.push_str("    #[deprecated]\n");
        }

        let mut args = vec!["&self".to_string()];
        for param in &stub.params {
            let ty = param.ty.to_rust(opaque);
            let ty = if param.required { ty } else { format!("Option<{ty}>") };
            args.push(format!("{}: {ty}", param.name));
        }
        let response = stub
            .response
            .as_ref()
            .map_or_else(|| "()".to_string(), |ty| ty.to_rust(opaque));
        out.push_str(&format!(
            "    fn {}({}) -> Result<{response}, Self::Error>;\n",
            stub.name,
            args.join(", ")
        ));
    }

    out.push_str("}\n");
    out
}
