//! Data-model introspection seam.
//!
//! The schema deriver does not know how a model is stored; it asks a
//! [`DataModel`] for its field schemas and association names. [`ModelSchema`]
//! is a plain description for hosts that have no introspection of their own.

use crate::specification::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A model whose shape can be described as Swagger schemas
pub trait DataModel: fmt::Debug + Send + Sync {
    /// Field name to field schema, in declaration order
    fn properties(&self) -> IndexMap<String, Schema>;

    /// Names of fields that must be present
    fn required(&self) -> Vec<String> {
        Vec::new()
    }

    /// Names of related models reachable from this one
    fn associations(&self) -> Vec<String>;
}

/// A single model field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelField {
    pub name: String,
    pub schema: Schema,
    #[serde(default)]
    pub required: bool,
}

/// Declarative model description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSchema {
    #[serde(default)]
    pub fields: Vec<ModelField>,
    /// Names of related models that can be included
    #[serde(default)]
    pub associations: Vec<String>,
}

impl ModelSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an optional field
    pub fn field(mut self, name: &str, schema: Schema) -> Self {
        self.fields.push(ModelField {
            name: name.to_string(),
            schema,
            required: false,
        });
        self
    }

    /// Add a field that must be present
    pub fn required_field(mut self, name: &str, schema: Schema) -> Self {
        self.fields.push(ModelField {
            name: name.to_string(),
            schema,
            required: true,
        });
        self
    }

    /// Add an association
    pub fn association(mut self, name: &str) -> Self {
        self.associations.push(name.to_string());
        self
    }
}

impl DataModel for ModelSchema {
    fn properties(&self) -> IndexMap<String, Schema> {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.schema.clone()))
            .collect()
    }

    fn required(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name.clone())
            .collect()
    }

    fn associations(&self) -> Vec<String> {
        self.associations.clone()
    }
}
