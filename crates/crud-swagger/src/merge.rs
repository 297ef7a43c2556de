/*!
Merge rules for the shared members of a root document.

Every registration accretes into the same `definitions`, `paths` and `tags`.
Nothing is ever removed: incoming members overwrite same-named existing members
and everything else is left as it was.
*/

use crate::specification::{HttpMethod, Operation, PathItem, Schema, Tag};
use indexmap::IndexMap;

/// Shallow merge of one schema into another.
///
/// Top-level members present on `incoming` replace the same members on
/// `existing`; members `incoming` leaves unset persist.
pub fn merge_schema(existing: &mut Schema, incoming: Schema) {
    let Schema {
        reference,
        title,
        schema_type,
        format,
        description,
        default,
        example,
        properties,
        required,
        additional_properties,
        items,
        enum_values,
        all_of,
        minimum,
        maximum,
        read_only,
        extensions,
    } = incoming;

    overwrite(&mut existing.reference, reference);
    overwrite(&mut existing.title, title);
    overwrite(&mut existing.schema_type, schema_type);
    overwrite(&mut existing.format, format);
    overwrite(&mut existing.description, description);
    overwrite(&mut existing.default, default);
    overwrite(&mut existing.example, example);
    overwrite(&mut existing.additional_properties, additional_properties);
    overwrite(&mut existing.items, items);
    overwrite(&mut existing.minimum, minimum);
    overwrite(&mut existing.maximum, maximum);
    overwrite(&mut existing.read_only, read_only);

    if !properties.is_empty() {
        existing.properties = properties;
    }
    if !required.is_empty() {
        existing.required = required;
    }
    if !enum_values.is_empty() {
        existing.enum_values = enum_values;
    }
    if !all_of.is_empty() {
        existing.all_of = all_of;
    }

    existing.extensions.extend(extensions);
}

/// Merge a batch of named definitions into `definitions`.
///
/// New names are appended; names already present are merged with
/// [`merge_schema`].
pub fn merge_definitions(
    definitions: &mut IndexMap<String, Schema>,
    incoming: IndexMap<String, Schema>,
) {
    for (name, schema) in incoming {
        merge_definition(definitions, name, schema);
    }
}

/// Merge a single named definition into `definitions`
pub fn merge_definition(definitions: &mut IndexMap<String, Schema>, name: String, schema: Schema) {
    match definitions.get_mut(&name) {
        Some(existing) => merge_schema(existing, schema),
        None => {
            definitions.insert(name, schema);
        }
    }
}

/// Attach an operation at `path` + `method`.
///
/// The path item is fetched or created; only the slot for `method` is
/// replaced, sibling methods on the same item are kept.
pub fn attach_operation(
    paths: &mut IndexMap<String, PathItem>,
    path: &str,
    method: HttpMethod,
    operation: Operation,
) {
    paths
        .entry(path.to_string())
        .or_default()
        .set_operation(method, operation);
}

/// Merge every operation of `incoming` into the item stored at `path`.
///
/// For hosts merging whole hand-written path items; registration attaches
/// operations one at a time through [`attach_operation`].
pub fn merge_path_item(paths: &mut IndexMap<String, PathItem>, path: &str, incoming: PathItem) {
    let PathItem {
        get,
        put,
        post,
        delete,
        options,
        head,
        patch,
        parameters,
    } = incoming;

    let item = paths.entry(path.to_string()).or_default();
    let slots = [
        (HttpMethod::Get, get),
        (HttpMethod::Put, put),
        (HttpMethod::Post, post),
        (HttpMethod::Delete, delete),
        (HttpMethod::Options, options),
        (HttpMethod::Head, head),
        (HttpMethod::Patch, patch),
    ];
    for (method, operation) in slots {
        if let Some(operation) = operation {
            item.set_operation(method, operation);
        }
    }
    if !parameters.is_empty() {
        item.parameters = parameters;
    }
}

/// Register a tag, keeping names unique.
///
/// An unknown tag is appended. A known tag keeps its position and has the
/// fields set on `incoming` written over it.
pub fn merge_tag(tags: &mut Vec<Tag>, incoming: Tag) {
    match tags.iter_mut().find(|tag| tag.name == incoming.name) {
        Some(existing) => {
            let Tag {
                name: _,
                description,
                external_docs,
                extensions,
            } = incoming;
            overwrite(&mut existing.description, description);
            overwrite(&mut existing.external_docs, external_docs);
            existing.extensions.extend(extensions);
        }
        None => tags.push(incoming),
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
