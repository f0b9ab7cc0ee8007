//! swagen-core: Swagger 2.0 document model and schema synthesis
//!
//! This crate provides a lazy, tolerant object model over a loaded Swagger
//! document, the recursive synthesis engine that turns schemas into a stream
//! of type declarations, and a Rust emitter for that stream.

pub mod codegen;
pub mod config;
pub mod document;
pub mod method;
pub mod naming;
pub mod operation;
pub mod render;
pub mod resolve;
pub mod schema;
pub mod sink;
pub mod stubs;
pub mod synth;
pub mod types;
pub mod view;

pub use codegen::{DefinitionSummary, Generated, Interchange, generate, generate_schema};
pub use config::{Config, ConfigError};
pub use document::{Document, DocumentError, Info, Server, ServerVariable};
pub use method::Method;
pub use naming::{operation_name, sanitize, synthesize_operation_name};
pub use operation::{
    Encoding, Header, MediaType, Operation, Parameter, ParameterLocation, PathItem, RequestBody,
    Response,
};
pub use render::RustWriter;
pub use schema::{ArraySchema, ModelProperty, ModelSchema, Property, Schema, Shape};
pub use sink::{Declaration, DeclarationSink, Field, Tee};
pub use stubs::{OperationStub, StubParam, collect_operations, render_trait};
pub use synth::{Nesting, Synthesizer, synthesize_definitions};
pub use types::{Scalar, TypeRef, scalar_for};
pub use view::{FromNode, ListView, MapView, Node};
