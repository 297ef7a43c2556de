/*!
Registration driver.

Runs the schema deriver and then the path synthesizer for each service the
host mounts, against one root document owned for the life of the process.
*/

use crate::{
    config::{CompiledConfig, SwaggerConfig},
    error::SwaggerResult,
    generator::{synthesize_paths, RegistrationOutcome},
    schema::derive_schema,
    service::ServiceDescriptor,
    specification::RootDocument,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Run one full registration pass for `service` against `root`
pub fn register_service(
    root: &mut RootDocument,
    config: &CompiledConfig,
    service: &ServiceDescriptor,
    mount_path: &str,
) -> RegistrationOutcome {
    let fragment = derive_schema(
        &service.name,
        service.model.as_deref(),
        config.paginate.as_ref(),
    );
    synthesize_paths(service, mount_path, root, config, &fragment)
}

/// Owns the root document and applies registrations to it in order
#[derive(Debug, Clone)]
pub struct SwaggerPlugin {
    config: CompiledConfig,
    document: RootDocument,
}

impl SwaggerPlugin {
    /// Compile `config` and seed a fresh document from it
    pub fn new(config: SwaggerConfig) -> SwaggerResult<Self> {
        let compiled = config.compile()?;
        Ok(Self {
            document: config.root_document(),
            config: compiled,
        })
    }

    /// Accrete into a document the caller has already populated
    pub fn with_document(config: CompiledConfig, document: RootDocument) -> Self {
        Self { config, document }
    }

    /// Register one mounted service
    pub fn register(&mut self, service: &ServiceDescriptor, mount_path: &str) -> RegistrationOutcome {
        register_service(&mut self.document, &self.config, service, mount_path)
    }

    pub fn config(&self) -> &CompiledConfig {
        &self.config
    }

    pub fn document(&self) -> &RootDocument {
        &self.document
    }

    pub fn into_document(self) -> RootDocument {
        self.document
    }
}

/// Root document shared between threads that register services.
///
/// Each registration holds the lock for its whole read-modify-write pass, so
/// merges into `definitions`, `paths` and `tags` never interleave.
#[derive(Debug, Clone)]
pub struct SharedDocument {
    config: Arc<CompiledConfig>,
    document: Arc<Mutex<RootDocument>>,
}

impl SharedDocument {
    pub fn new(config: CompiledConfig, document: RootDocument) -> Self {
        Self {
            config: Arc::new(config),
            document: Arc::new(Mutex::new(document)),
        }
    }

    /// Compile `config` and seed a fresh shared document from it
    pub fn from_config(config: SwaggerConfig) -> SwaggerResult<Self> {
        let compiled = config.compile()?;
        Ok(Self::new(compiled, config.root_document()))
    }

    /// Register one mounted service under the document lock
    pub fn register(&self, service: &ServiceDescriptor, mount_path: &str) -> RegistrationOutcome {
        let mut document = self.document.lock();
        register_service(&mut document, &self.config, service, mount_path)
    }

    /// Copy of the document as it stands
    pub fn snapshot(&self) -> RootDocument {
        self.document.lock().clone()
    }
}
