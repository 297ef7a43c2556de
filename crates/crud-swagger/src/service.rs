/*!
Service descriptors.

A descriptor is what the hosting framework hands over for every mounted
service: its name, which CRUD methods it implements, optional hand-written
documentation and an optional data model.
*/

use crate::{
    model::DataModel,
    specification::{
        ExternalDocumentation, HttpMethod, Operation, Parameter, Response, Schema,
        SecurityRequirement,
    },
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// The six CRUD shapes a service can support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudMethod {
    Find,
    Get,
    Create,
    Update,
    Patch,
    Remove,
}

impl CrudMethod {
    /// All methods in the order operations are generated
    pub const ALL: [CrudMethod; 6] = [
        Self::Find,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Patch,
        Self::Remove,
    ];

    /// Service method name
    pub fn name(self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Patch => "patch",
            Self::Remove => "remove",
        }
    }

    /// Parse a service method name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }

    /// HTTP verb the method is exposed under
    pub fn http_method(self) -> HttpMethod {
        match self {
            Self::Find | Self::Get => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Patch => HttpMethod::Patch,
            Self::Remove => HttpMethod::Delete,
        }
    }

    /// Whether the method addresses a single resource by id
    pub fn is_item_scoped(self) -> bool {
        !matches!(self, Self::Find | Self::Create)
    }
}

/// Which CRUD methods a service implements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub find: bool,
    pub get: bool,
    pub create: bool,
    pub update: bool,
    pub patch: bool,
    pub remove: bool,
}

impl Capabilities {
    /// No methods
    pub fn none() -> Self {
        Self::default()
    }

    /// Every CRUD method
    pub fn all() -> Self {
        Self {
            find: true,
            get: true,
            create: true,
            update: true,
            patch: true,
            remove: true,
        }
    }

    /// Capabilities from the names of the methods a service exposes.
    ///
    /// Unknown names are ignored.
    pub fn from_method_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| CrudMethod::from_name(name.as_ref()))
            .fold(Self::none(), |caps, method| caps.with(method))
    }

    /// Add one method
    pub fn with(mut self, method: CrudMethod) -> Self {
        *self.slot(method) = true;
        self
    }

    /// Whether the service implements `method`
    pub fn supports(&self, method: CrudMethod) -> bool {
        match method {
            CrudMethod::Find => self.find,
            CrudMethod::Get => self.get,
            CrudMethod::Create => self.create,
            CrudMethod::Update => self.update,
            CrudMethod::Patch => self.patch,
            CrudMethod::Remove => self.remove,
        }
    }

    /// Supported methods in generation order
    pub fn methods(&self) -> Vec<CrudMethod> {
        CrudMethod::ALL
            .into_iter()
            .filter(|method| self.supports(*method))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.methods().is_empty()
    }

    fn slot(&mut self, method: CrudMethod) -> &mut bool {
        match method {
            CrudMethod::Find => &mut self.find,
            CrudMethod::Get => &mut self.get,
            CrudMethod::Create => &mut self.create,
            CrudMethod::Update => &mut self.update,
            CrudMethod::Patch => &mut self.patch,
            CrudMethod::Remove => &mut self.remove,
        }
    }
}

/// Hand-written overrides for one generated operation.
///
/// Every field that is set replaces the generated value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDocs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Response>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

impl OperationDocs {
    /// Lay these overrides over a generated operation
    pub fn apply(&self, mut operation: Operation) -> Operation {
        if let Some(summary) = &self.summary {
            operation.summary = Some(summary.clone());
        }
        if let Some(description) = &self.description {
            operation.description = Some(description.clone());
        }
        if let Some(operation_id) = &self.operation_id {
            operation.operation_id = Some(operation_id.clone());
        }
        if let Some(tags) = &self.tags {
            operation.tags = tags.clone();
        }
        if let Some(parameters) = &self.parameters {
            operation.parameters = parameters.clone();
        }
        if let Some(responses) = &self.responses {
            operation.responses = responses.clone();
        }
        if let Some(consumes) = &self.consumes {
            operation.consumes = consumes.clone();
        }
        if let Some(produces) = &self.produces {
            operation.produces = produces.clone();
        }
        if let Some(security) = &self.security {
            operation.security = security.clone();
        }
        if let Some(deprecated) = self.deprecated {
            operation.deprecated = Some(deprecated);
        }
        operation
    }
}

/// Manual documentation attached to a service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDocs {
    /// Tag description; defaults to `A {tag} service`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,

    /// Schema stored under the service's tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Schema>,

    /// Named schemas merged into the root definitions
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub definitions: IndexMap<String, Schema>,

    /// Type of the id path parameter; defaults to `integer`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_type: Option<String>,

    /// Name of the id path parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub find: Option<OperationDocs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<OperationDocs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<OperationDocs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<OperationDocs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<OperationDocs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<OperationDocs>,

    /// Free-form members, carried onto the service's tag
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ServiceDocs {
    /// Overrides for one CRUD method
    pub fn operation(&self, method: CrudMethod) -> Option<&OperationDocs> {
        match method {
            CrudMethod::Find => self.find.as_ref(),
            CrudMethod::Get => self.get.as_ref(),
            CrudMethod::Create => self.create.as_ref(),
            CrudMethod::Update => self.update.as_ref(),
            CrudMethod::Patch => self.patch.as_ref(),
            CrudMethod::Remove => self.remove.as_ref(),
        }
    }
}

/// One service as registered by the host framework
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    /// Name used for generated model definitions
    pub name: String,
    /// Name of the model's id field
    pub id: Option<String>,
    pub capabilities: Capabilities,
    pub docs: Option<ServiceDocs>,
    pub model: Option<Arc<dyn DataModel>>,
}

impl ServiceDescriptor {
    pub fn new(name: &str, capabilities: Capabilities) -> Self {
        Self {
            name: name.to_string(),
            id: None,
            capabilities,
            docs: None,
            model: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_docs(mut self, docs: ServiceDocs) -> Self {
        self.docs = Some(docs);
        self
    }

    pub fn with_model<M: DataModel + 'static>(mut self, model: M) -> Self {
        self.model = Some(Arc::new(model));
        self
    }

    /// Name of the id path parameter: docs override, then the service id, then `id`
    pub fn id_name(&self) -> &str {
        self.docs
            .as_ref()
            .and_then(|docs| docs.id_name.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("id")
    }

    /// Type of the id path parameter, `integer` unless documented otherwise
    pub fn id_type(&self) -> &str {
        self.docs
            .as_ref()
            .and_then(|docs| docs.id_type.as_deref())
            .unwrap_or("integer")
    }
}
