/*!
# crud-swagger

Swagger 2.0 document synthesis for CRUD resource services.

Every mounted service is described by the CRUD methods it implements, optional
hand-written documentation and an optional data model. Registering it merges
its paths, operations, definitions and tag into one shared root document.

## Features

- One operation per implemented CRUD method (`find`, `get`, `create`,
  `update`, `patch`, `remove`)
- Tag and model names derived from the mount path, with prefix stripping and
  version suffixes
- Model definitions with plain or paginated list schemas
- `$include` query parameter for models with associations
- Per-operation documentation overrides
- JSON and YAML export

## Usage

```rust,no_run
use crud_swagger::{Capabilities, ServiceDescriptor, SwaggerConfig, SwaggerPlugin};

let config = SwaggerConfig::new("Widgets API", "1.0.0").with_prefix("api/");
let mut plugin = SwaggerPlugin::new(config).unwrap();

let service = ServiceDescriptor::new("widgets", Capabilities::all());
plugin.register(&service, "api/widgets");

println!("{}", plugin.document().to_json(true).unwrap());
```
*/

// Re-export main types
pub use crate::{
    config::{CompiledConfig, IgnoreConfig, InfoConfig, PaginateConfig, SwaggerConfig},
    error::{SwaggerError, SwaggerResult},
    export::ExportFormat,
    generator::{synthesize_paths, RegistrationOutcome},
    model::{DataModel, ModelField, ModelSchema},
    plugin::{register_service, SharedDocument, SwaggerPlugin},
    route::{derive_route_info, RouteInfo},
    schema::{derive_schema, SchemaFragment},
    service::{Capabilities, CrudMethod, OperationDocs, ServiceDescriptor, ServiceDocs},
    specification::RootDocument,
};

// Core modules
pub mod config;
pub mod error;
pub mod specification;

// Synthesis
pub mod generator;
pub mod merge;
pub mod route;
pub mod schema;

// Inputs from the host framework
pub mod model;
pub mod service;

// Registration and output
pub mod export;
pub mod plugin;

// Test utilities
#[cfg(test)]
mod test_utils;
