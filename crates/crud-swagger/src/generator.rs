/*!
Path synthesis.

Turns one registered service into path items, operations, definitions and a
tag on the shared root document. Each call only adds to or overwrites what
earlier registrations left behind; nothing is removed.
*/

use crate::{
    config::CompiledConfig,
    merge::{attach_operation, merge_definition, merge_definitions, merge_tag},
    route::{derive_route_info, RouteInfo},
    schema::{SchemaFragment, LIST_SUFFIX},
    service::{CrudMethod, ServiceDescriptor, ServiceDocs},
    specification::{
        Operation, Parameter, Response, RootDocument, Schema, SecurityRequirement, Tag,
    },
};
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

/// What a registration did to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The service's operations, definitions and tag were merged in
    Registered { tag: String, operations: usize },
    /// The service's tag is ignored; the document was not touched
    Ignored { tag: String },
}

impl RegistrationOutcome {
    pub fn tag(&self) -> &str {
        match self {
            Self::Registered { tag, .. } | Self::Ignored { tag } => tag,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }
}

/// Everything an operation builder needs about the service being registered
struct OperationContext<'a> {
    tag: &'a str,
    model: &'a str,
    id_name: &'a str,
    id_type: &'a str,
    associations: &'a [String],
    produces: Vec<String>,
    consumes: Vec<String>,
    security: Vec<SecurityRequirement>,
}

/// Merge one service into `root`.
///
/// `fragment` is the schema deriver's output for the service's model (empty
/// when the service has none). An ignored tag returns before anything is
/// written.
pub fn synthesize_paths(
    service: &ServiceDescriptor,
    mount_path: &str,
    root: &mut RootDocument,
    config: &CompiledConfig,
    fragment: &SchemaFragment,
) -> RegistrationOutcome {
    let route = derive_route_info(
        mount_path,
        config.prefix.as_ref(),
        config.version_prefix.as_ref(),
    );

    if config.is_ignored(&route.tag) {
        debug!(tag = %route.tag, path = %route.path, "Skipping ignored service");
        return RegistrationOutcome::Ignored { tag: route.tag };
    }

    let docs = service.docs.clone().unwrap_or_default();
    if service.capabilities.is_empty() {
        warn!(service = %service.name, path = %route.path, "Service exposes no CRUD methods");
    }

    merge_service_definitions(root, &route.tag, &docs, fragment);

    let mut security = SecurityRequirement::new();
    security.insert(config.security_scheme.clone(), Vec::new());

    let context = OperationContext {
        tag: &route.tag,
        model: &route.model,
        id_name: service.id_name(),
        id_type: service.id_type(),
        associations: &fragment.associations,
        produces: root.produces.clone(),
        consumes: root.consumes.clone(),
        security: vec![security],
    };

    let methods = service.capabilities.methods();
    for method in &methods {
        let generated = build_operation(*method, &context);
        let operation = match docs.operation(*method) {
            Some(overrides) => overrides.apply(generated),
            None => generated,
        };
        let key = path_key(&route, *method, context.id_name);

        trace!(path = %key, method = method.http_method().as_str(), "Attaching operation");
        attach_operation(&mut root.paths, &key, method.http_method(), operation);
    }

    merge_tag(&mut root.tags, service_tag(&route.tag, &docs));

    debug!(
        service = %service.name,
        tag = %route.tag,
        path = %route.path,
        operations = methods.len(),
        "Registered service documentation"
    );

    RegistrationOutcome::Registered {
        tag: route.tag,
        operations: methods.len(),
    }
}

/// Manual definitions first, then the bulk map with generated model schemas
/// taking precedence over same-named manual ones.
fn merge_service_definitions(
    root: &mut RootDocument,
    tag: &str,
    docs: &ServiceDocs,
    fragment: &SchemaFragment,
) {
    if let Some(definition) = &docs.definition {
        merge_definition(&mut root.definitions, tag.to_string(), definition.clone());
        merge_definition(
            &mut root.definitions,
            format!("{}{}", tag, LIST_SUFFIX),
            Schema::array_of(definition.clone()),
        );
    }

    let mut bulk = docs.definitions.clone();
    bulk.extend(fragment.definitions.clone());
    merge_definitions(&mut root.definitions, bulk);
}

fn path_key(route: &RouteInfo, method: CrudMethod, id_name: &str) -> String {
    if method.is_item_scoped() {
        route.item_key(id_name)
    } else {
        route.collection_key()
    }
}

/// Members a tag always serializes itself; free-form docs may not shadow them
const TAG_MEMBERS: [&str; 3] = ["name", "description", "externalDocs"];

/// Tag descriptor contributed by a service
pub fn service_tag(tag: &str, docs: &ServiceDocs) -> Tag {
    let extensions = docs
        .extra
        .iter()
        .filter(|(key, _)| !TAG_MEMBERS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Tag {
        name: tag.to_string(),
        description: Some(
            docs.description
                .clone()
                .unwrap_or_else(|| format!("A {} service", tag)),
        ),
        external_docs: docs.external_docs.clone(),
        extensions,
    }
}

fn build_operation(method: CrudMethod, context: &OperationContext<'_>) -> Operation {
    let (description, parameters, responses) = match method {
        CrudMethod::Find => (
            "Retrieves a list of all resources from the service.",
            find_parameters(context.associations),
            with_error_responses(list_success(context.tag), None, false),
        ),
        CrudMethod::Get => (
            "Retrieves a single resource with the given id from the service.",
            vec![id_parameter(context)],
            with_error_responses(success(context.tag), None, true),
        ),
        CrudMethod::Create => (
            "Creates a new resource with data.",
            vec![Parameter::body(Schema::reference(context.tag))],
            with_error_responses(Response::new("created"), Some("201"), false),
        ),
        CrudMethod::Update => (
            "Updates the resource identified by id using data.",
            vec![id_parameter(context), Parameter::body(Schema::reference(context.tag))],
            with_error_responses(success(context.tag), None, true),
        ),
        CrudMethod::Patch => (
            "Updates the resource identified by id using data, leaving fields not sent unchanged.",
            vec![id_parameter(context), Parameter::body(Schema::reference(context.tag))],
            with_error_responses(success(context.tag), None, true),
        ),
        CrudMethod::Remove => (
            "Removes the resource with id.",
            vec![id_parameter(context)],
            with_error_responses(success(context.tag), None, true),
        ),
    };

    Operation {
        tags: vec![context.tag.to_string()],
        summary: None,
        description: Some(description.to_string()),
        operation_id: None,
        consumes: context.consumes.clone(),
        produces: context.produces.clone(),
        parameters,
        responses,
        deprecated: None,
        security: context.security.clone(),
    }
}

fn success(tag: &str) -> Response {
    Response::with_schema("success", Schema::reference(tag))
}

fn list_success(tag: &str) -> Response {
    Response::with_schema(
        "success",
        Schema::reference(&format!("{}{}", tag, LIST_SUFFIX)),
    )
}

/// Success response plus the fixed error responses every operation carries
fn with_error_responses(
    success: Response,
    status: Option<&str>,
    not_found: bool,
) -> IndexMap<String, Response> {
    let mut responses = IndexMap::new();
    responses.insert(status.unwrap_or("200").to_string(), success);
    responses.insert("401".to_string(), Response::new("not authenticated"));
    if not_found {
        responses.insert("404".to_string(), Response::new("not found"));
    }
    responses.insert("500".to_string(), Response::new("general error"));
    responses
}

fn id_parameter(context: &OperationContext<'_>) -> Parameter {
    Parameter::path(
        context.id_name,
        context.id_type,
        format!("ID of {} to return", context.model),
    )
}

fn find_parameters(associations: &[String]) -> Vec<Parameter> {
    let mut parameters = vec![
        Parameter::query("$limit", "integer", "Number of results to return"),
        Parameter::query("$skip", "integer", "Number of results to skip"),
        Parameter::query(
            "$sort",
            "object",
            "Sorting operation (ex _$sort[propertyName]=1_). 1 ascending, -1 descending",
        ),
    ];

    if !associations.is_empty() {
        let description = format!(
            "Include associated elements. Nested objects can be included by separating \
             levels with periods (ex _$include=level1.level2.level3_)\n\
             Includable elements:\n> _{}_",
            associations.join(", ")
        );
        let mut include = Parameter::query("$include", "array", &description);
        include.items = Some(Schema::of_type("string"));
        include.collection_format = Some("multi".to_string());
        parameters.push(include);
    }

    parameters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::Capabilities;
    use crate::specification::{HttpMethod, ParameterLocation};
    use crate::test_utils::test_utils::create_test_document;

    fn root() -> RootDocument {
        create_test_document()
    }

    #[test]
    fn test_find_parameters_without_associations() {
        let parameters = find_parameters(&[]);
        let names: Vec<_> = parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["$limit", "$skip", "$sort"]);
    }

    #[test]
    fn test_include_parameter_lists_associations() {
        let associations = vec!["owner".to_string(), "tags".to_string()];
        let parameters = find_parameters(&associations);

        let include = parameters.last().unwrap();
        assert_eq!(include.name, "$include");
        assert_eq!(include.collection_format.as_deref(), Some("multi"));
        assert!(include
            .description
            .as_deref()
            .unwrap()
            .ends_with("> _owner, tags_"));
    }

    #[test]
    fn test_every_operation_carries_common_fields() {
        let service = ServiceDescriptor::new("widgets", Capabilities::all());
        let mut doc = root();
        synthesize_paths(
            &service,
            "widgets",
            &mut doc,
            &CompiledConfig::default(),
            &SchemaFragment::default(),
        );

        for item in doc.paths.values() {
            for method in item.methods() {
                let operation = item.operation(method).unwrap();
                assert_eq!(operation.tags, vec!["widgets".to_string()]);
                assert_eq!(operation.responses["401"].description, "not authenticated");
                assert_eq!(operation.responses["500"].description, "general error");
                assert_eq!(operation.produces, vec!["application/json".to_string()]);
                assert_eq!(operation.consumes, vec!["application/json".to_string()]);
                assert_eq!(operation.security.len(), 1);
                assert_eq!(operation.security[0].get("jwt"), Some(&Vec::new()));
            }
        }
    }

    #[test]
    fn test_create_returns_201_without_schema() {
        let service = ServiceDescriptor::new(
            "widgets",
            Capabilities::none().with(CrudMethod::Create),
        );
        let mut doc = root();
        synthesize_paths(
            &service,
            "widgets",
            &mut doc,
            &CompiledConfig::default(),
            &SchemaFragment::default(),
        );

        let post = doc.paths["/widgets"].operation(HttpMethod::Post).unwrap();
        assert!(post.responses["201"].schema.is_none());
        assert!(!post.responses.contains_key("404"));
        assert_eq!(post.parameters[0].location, ParameterLocation::Body);
        assert_eq!(post.parameters[0].schema, Some(Schema::reference("widgets")));
    }

    #[test]
    fn test_update_and_patch_take_id_and_body() {
        let service = ServiceDescriptor::new(
            "parts",
            Capabilities::none()
                .with(CrudMethod::Update)
                .with(CrudMethod::Patch),
        );
        let mut doc = root();
        synthesize_paths(
            &service,
            "widgets/parts",
            &mut doc,
            &CompiledConfig::default(),
            &SchemaFragment::default(),
        );

        let item = &doc.paths["/widgets/parts/{id}"];
        for method in [HttpMethod::Put, HttpMethod::Patch] {
            let operation = item.operation(method).unwrap();
            let names: Vec<_> = operation.parameters.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, vec!["id", "body"]);
            assert_eq!(
                operation.parameters[0].description.as_deref(),
                Some("ID of parts to return")
            );
            assert_eq!(
                operation.responses["200"].schema,
                Some(Schema::reference("widgets"))
            );
            assert!(operation.responses.contains_key("404"));
        }
    }

    #[test]
    fn test_operation_docs_override_generated_fields() {
        let mut docs = ServiceDocs::default();
        docs.find = Some(crate::service::OperationDocs {
            summary: Some("List widgets".to_string()),
            operation_id: Some("listWidgets".to_string()),
            ..Default::default()
        });
        let service = ServiceDescriptor::new("widgets", Capabilities::none().with(CrudMethod::Find))
            .with_docs(docs);

        let mut doc = root();
        synthesize_paths(
            &service,
            "widgets",
            &mut doc,
            &CompiledConfig::default(),
            &SchemaFragment::default(),
        );

        let get = doc.paths["/widgets"].operation(HttpMethod::Get).unwrap();
        assert_eq!(get.summary.as_deref(), Some("List widgets"));
        assert_eq!(get.operation_id.as_deref(), Some("listWidgets"));
        assert_eq!(get.parameters.len(), 3);
    }

    #[test]
    fn test_service_tag_defaults() {
        let tag = service_tag("widgets v1", &ServiceDocs::default());
        assert_eq!(tag.description.as_deref(), Some("A widgets v1 service"));
        assert!(tag.external_docs.is_none());
        assert!(tag.extensions.is_empty());
    }

    #[test]
    fn test_service_tag_keeps_typed_members() {
        let mut docs = ServiceDocs::default();
        docs.extra
            .insert("name".to_string(), serde_json::json!("Widget store"));
        docs.extra
            .insert("externalDocs".to_string(), serde_json::json!({"url": "x"}));
        docs.extra.insert("x-a".to_string(), serde_json::json!(1));

        let tag = service_tag("widgets", &docs);
        assert_eq!(tag.name, "widgets");
        assert!(tag.external_docs.is_none());
        assert_eq!(tag.extensions.len(), 1);
        assert_eq!(tag.extensions.get("x-a"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn test_docs_definition_feeds_list_definition() {
        let definition = Schema {
            schema_type: Some("object".to_string()),
            title: Some("Widget".to_string()),
            ..Default::default()
        };
        let service = ServiceDescriptor::new("widgets", Capabilities::none())
            .with_docs(ServiceDocs {
                definition: Some(definition.clone()),
                ..Default::default()
            });

        let mut doc = root();
        synthesize_paths(
            &service,
            "widgets",
            &mut doc,
            &CompiledConfig::default(),
            &SchemaFragment::default(),
        );

        assert_eq!(doc.definitions["widgets"], definition);
        assert_eq!(doc.definitions["widgetsList"], Schema::array_of(definition));
        assert!(doc.paths.is_empty());
        assert_eq!(doc.tags.len(), 1);
    }

    #[test]
    fn test_generated_definitions_win_over_manual_bulk() {
        let mut manual = IndexMap::new();
        manual.insert(
            "widgets".to_string(),
            Schema {
                description: Some("manual".to_string()),
                title: Some("Manual".to_string()),
                ..Default::default()
            },
        );
        let service = ServiceDescriptor::new("widgets", Capabilities::none())
            .with_docs(ServiceDocs {
                definitions: manual,
                ..Default::default()
            });

        let mut fragment = SchemaFragment::default();
        fragment.definitions.insert(
            "widgets".to_string(),
            Schema {
                schema_type: Some("object".to_string()),
                ..Default::default()
            },
        );

        let mut doc = root();
        synthesize_paths(&service, "widgets", &mut doc, &CompiledConfig::default(), &fragment);

        let widgets = &doc.definitions["widgets"];
        assert_eq!(widgets.schema_type.as_deref(), Some("object"));
        assert!(widgets.title.is_none());
    }
}
