use crate::{config::PaginateConfig, model::DataModel, specification::Schema};
use indexmap::IndexMap;

/// Definitions and associations derived from a service's model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaFragment {
    /// `{name}` object schema and `{name}List` list schema
    pub definitions: IndexMap<String, Schema>,
    /// Association names, de-duplicated, in model order
    pub associations: Vec<String>,
}

/// Suffix of the list definition derived for every model
pub const LIST_SUFFIX: &str = "List";

/// Derive the definitions fragment for a service's model.
///
/// Without a model the fragment is empty. Field schemas are taken from the
/// model as they are; only the object and list wrappers are built here.
pub fn derive_schema(
    name: &str,
    model: Option<&dyn DataModel>,
    paginate: Option<&PaginateConfig>,
) -> SchemaFragment {
    let Some(model) = model else {
        return SchemaFragment::default();
    };

    let item = Schema {
        schema_type: Some("object".to_string()),
        properties: model.properties(),
        required: model.required(),
        ..Default::default()
    };

    let mut definitions = IndexMap::new();
    definitions.insert(name.to_string(), item);
    definitions.insert(
        format!("{}{}", name, LIST_SUFFIX),
        list_schema(name, paginate),
    );

    SchemaFragment {
        definitions,
        associations: association_names(model),
    }
}

/// List shape for `name`: a paginated envelope or a bare array
pub fn list_schema(name: &str, paginate: Option<&PaginateConfig>) -> Schema {
    let items = Schema::array_of(Schema::reference(name));

    let Some(paginate) = paginate else {
        return items;
    };

    let mut limit = Schema::of_type("integer");
    limit.default = Some(paginate.default.into());
    limit.maximum = Some(f64::from(paginate.max));

    let mut properties = IndexMap::new();
    properties.insert("total".to_string(), Schema::of_type("integer"));
    properties.insert("limit".to_string(), limit);
    properties.insert("skip".to_string(), Schema::of_type("integer"));
    properties.insert("data".to_string(), items);

    Schema {
        schema_type: Some("object".to_string()),
        properties,
        ..Default::default()
    }
}

fn association_names(model: &dyn DataModel) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in model.associations() {
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
