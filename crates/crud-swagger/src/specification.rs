//! Swagger 2.0 document model.
//!
//! Only the members this crate reads or writes are modelled in detail; anything
//! else a caller puts on a schema or tag survives round trips through the
//! flattened `extensions` maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Swagger version written into every new document
pub const SWAGGER_VERSION: &str = "2.0";

/// Complete Swagger 2.0 document, shared across service registrations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootDocument {
    /// Swagger specification version
    pub swagger: String,

    /// API metadata
    pub info: ApiInfo,

    /// Host serving the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Base path for every path key
    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Transfer protocols
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub schemes: Vec<String>,

    /// Global request MIME types, copied into every generated operation
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub consumes: Vec<String>,

    /// Global response MIME types, copied into every generated operation
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub produces: Vec<String>,

    /// API paths and operations
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable schema definitions
    #[serde(default)]
    pub definitions: IndexMap<String, Schema>,

    /// Security scheme declarations
    #[serde(
        rename = "securityDefinitions",
        skip_serializing_if = "IndexMap::is_empty",
        default
    )]
    pub security_definitions: IndexMap<String, SecurityScheme>,

    /// Global security requirements
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub security: Vec<SecurityRequirement>,

    /// Tags for grouping operations, unique by name
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// External documentation
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
}

/// API metadata information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// API title
    pub title: String,

    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Terms of service URL
    #[serde(rename = "termsOfService", skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,

    /// API version
    pub version: String,
}

/// Path item containing operations for a specific URL template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    /// Common parameters for all operations on this path
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<Parameter>,
}

/// HTTP methods a path item can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    /// Lowercase key used in a path item
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Patch => "patch",
        }
    }
}

impl PathItem {
    /// Operation slot for a method
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
        }
    }

    /// Replace the operation for one method, leaving siblings untouched
    pub fn set_operation(&mut self, method: HttpMethod, operation: Operation) {
        let slot = match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
        };
        *slot = Some(operation);
    }

    /// Methods that currently have an operation
    pub fn methods(&self) -> Vec<HttpMethod> {
        [
            HttpMethod::Get,
            HttpMethod::Put,
            HttpMethod::Post,
            HttpMethod::Delete,
            HttpMethod::Options,
            HttpMethod::Head,
            HttpMethod::Patch,
        ]
        .into_iter()
        .filter(|method| self.operation(*method).is_some())
        .collect()
    }
}

/// HTTP operation (GET, POST, etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Operation {
    /// Tags for grouping
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,

    /// Short summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Long description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unique operation ID
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Request MIME types
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub consumes: Vec<String>,

    /// Response MIME types
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub produces: Vec<String>,

    /// Parameters
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<Parameter>,

    /// Possible responses keyed by status code
    #[serde(default)]
    pub responses: IndexMap<String, Response>,

    /// Deprecated flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Security requirements
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub security: Vec<SecurityRequirement>,
}

/// Where a parameter is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    FormData,
    Body,
}

/// Parameter for operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Parameter location
    #[serde(rename = "in")]
    pub location: ParameterLocation,

    /// Parameter description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Required flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Primitive type for non-body parameters
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    /// Item type for array parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Schema>,

    /// Array serialization format
    #[serde(rename = "collectionFormat", skip_serializing_if = "Option::is_none")]
    pub collection_format: Option<String>,

    /// Schema for body parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Parameter {
    /// Optional query parameter of a primitive type
    pub fn query(name: &str, param_type: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            location: ParameterLocation::Query,
            description: Some(description.to_string()),
            required: None,
            param_type: Some(param_type.to_string()),
            items: None,
            collection_format: None,
            schema: None,
        }
    }

    /// Required path parameter
    pub fn path(name: &str, param_type: &str, description: String) -> Self {
        Self {
            name: name.to_string(),
            location: ParameterLocation::Path,
            description: Some(description),
            required: Some(true),
            param_type: Some(param_type.to_string()),
            items: None,
            collection_format: None,
            schema: None,
        }
    }

    /// Required `body` parameter carrying a schema
    pub fn body(schema: Schema) -> Self {
        Self {
            name: "body".to_string(),
            location: ParameterLocation::Body,
            description: None,
            required: Some(true),
            param_type: None,
            items: None,
            collection_format: None,
            schema: Some(schema),
        }
    }
}

/// Response specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Description
    pub description: String,

    /// Response body schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Response {
    /// Response without a body
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            schema: None,
        }
    }

    /// Response whose body is described by a schema
    pub fn with_schema(description: &str, schema: Schema) -> Self {
        Self {
            description: description.to_string(),
            schema: Some(schema),
        }
    }
}

/// Schema for data types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// Reference to another schema
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Schema title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Data type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Format specifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Example value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Properties for object types
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub properties: IndexMap<String, Schema>,

    /// Required properties
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,

    /// Additional properties schema
    #[serde(rename = "additionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Schema>>,

    /// Items schema for arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Enum values
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty", default)]
    pub enum_values: Vec<Value>,

    /// AllOf composition
    #[serde(rename = "allOf", skip_serializing_if = "Vec::is_empty", default)]
    pub all_of: Vec<Schema>,

    /// Validation: minimum value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Validation: maximum value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Read-only flag
    #[serde(rename = "readOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    /// Any other members, kept verbatim
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

impl Schema {
    /// Schema that is only a `$ref` to a named definition
    pub fn reference(definition: &str) -> Self {
        Self {
            reference: Some(format!("#/definitions/{}", definition)),
            ..Default::default()
        }
    }

    /// Schema of a bare primitive or container type
    pub fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Default::default()
        }
    }

    /// Array schema around an item schema
    pub fn array_of(items: Schema) -> Self {
        Self {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }
}

/// Security scheme declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    #[serde(rename = "basic")]
    Basic {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename = "apiKey")]
    ApiKey {
        name: String,
        #[serde(rename = "in")]
        location: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

/// Security requirement: scheme name to required scopes
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Tag for grouping operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// Free-form members contributed by service docs
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// External documentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocumentation {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RootDocument {
    /// Create an empty document with the given API title and version
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            swagger: SWAGGER_VERSION.to_string(),
            info: ApiInfo {
                title: title.to_string(),
                description: None,
                terms_of_service: None,
                version: version.to_string(),
            },
            host: None,
            base_path: None,
            schemes: Vec::new(),
            consumes: Vec::new(),
            produces: Vec::new(),
            paths: IndexMap::new(),
            definitions: IndexMap::new(),
            security_definitions: IndexMap::new(),
            security: Vec::new(),
            tags: Vec::new(),
            external_docs: None,
        }
    }

    /// Look up a tag by name
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }
}
