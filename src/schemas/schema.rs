use schemars::{gen::SchemaSettings, JsonSchema};
use serde_json::{json, Value};

/// JSON Schema describing a tool's argument type.
///
/// Generated with draft-07 settings and stripped of the `$schema` marker so it
/// can be embedded directly into a tool definition.
pub fn parameters_schema<T: JsonSchema>() -> Value {
    let generator = SchemaSettings::draft07()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator();
    let root = generator.into_root_schema_for::<T>();

    let mut schema = serde_json::to_value(root).unwrap_or_else(|_| json!({ "type": "object" }));
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
    }
    schema
}
