#[cfg(test)]
pub mod test_utils {
    use crate::{
        config::SwaggerConfig,
        model::ModelSchema,
        service::{Capabilities, ServiceDescriptor},
        specification::{RootDocument, Schema},
    };

    /// Create a root document with JSON produces/consumes
    #[allow(dead_code)]
    pub fn create_test_document() -> RootDocument {
        SwaggerConfig::new("Test API", "1.0.0").root_document()
    }

    /// Model with two fields and two associations
    #[allow(dead_code)]
    pub fn create_test_model() -> ModelSchema {
        ModelSchema::new()
            .required_field("id", Schema::of_type("integer"))
            .field("name", Schema::of_type("string"))
            .association("owner")
            .association("tags")
    }

    /// Service implementing every CRUD method, backed by the test model
    #[allow(dead_code)]
    pub fn create_test_service(name: &str) -> ServiceDescriptor {
        ServiceDescriptor::new(name, Capabilities::all()).with_model(create_test_model())
    }

    /// Assert the document's tags are unique by name
    #[allow(dead_code)]
    pub fn assert_unique_tags(document: &RootDocument) {
        let mut names: Vec<_> = document.tags.iter().map(|tag| tag.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate tags in {:?}", document.tags);
    }
}
