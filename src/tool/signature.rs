// ABOUTME: Signature inspection - derives (name, type label) pairs from a tool's
// ABOUTME: positional JSON Schema without invoking the tool.

use serde::Serialize;
use serde_json::Value;

use super::Tool;

/// One declared positional parameter, as shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
        }
    }
}

/// Declared type of a positional parameter. Advisory only: nothing coerces
/// or rejects arguments against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Int,
    Float,
    Str,
    Bool,
    List,
    Object,
    Any,
}

impl ParamType {
    /// The display label used in tool descriptions.
    pub fn label(self) -> &'static str {
        match self {
            ParamType::Int => "int",
            ParamType::Float => "float",
            ParamType::Str => "str",
            ParamType::Bool => "bool",
            ParamType::List => "list",
            ParamType::Object => "dict",
            ParamType::Any => "any",
        }
    }

    /// The JSON Schema `type` keyword, if any.
    pub fn json_type(self) -> Option<&'static str> {
        match self {
            ParamType::Int => Some("integer"),
            ParamType::Float => Some("number"),
            ParamType::Str => Some("string"),
            ParamType::Bool => Some("boolean"),
            ParamType::List => Some("array"),
            ParamType::Object => Some("object"),
            ParamType::Any => None,
        }
    }

    fn from_json_type(name: &str) -> Option<Self> {
        match name {
            "integer" => Some(ParamType::Int),
            "number" => Some(ParamType::Float),
            "string" => Some(ParamType::Str),
            "boolean" => Some(ParamType::Bool),
            "array" => Some(ParamType::List),
            "object" => Some(ParamType::Object),
            _ => None,
        }
    }
}

/// Build the positional schema for an ordered parameter list.
pub fn positional_schema<'a>(params: impl IntoIterator<Item = (&'a str, ParamType)>) -> Value {
    let items: Vec<Value> = params
        .into_iter()
        .map(|(name, ty)| {
            let mut item = serde_json::Map::new();
            item.insert("title".to_string(), Value::from(name));
            if let Some(json_type) = ty.json_type() {
                item.insert("type".to_string(), Value::from(json_type));
            }
            Value::Object(item)
        })
        .collect();
    let count = items.len();

    serde_json::json!({
        "type": "array",
        "prefixItems": items,
        "minItems": count,
        "maxItems": count,
    })
}

/// Derive the ordered parameter list of a tool from its schema.
pub fn inspect(tool: &dyn Tool) -> Vec<Parameter> {
    inspect_schema(&tool.schema())
}

/// Derive the ordered parameter list from a positional schema.
///
/// Accepts `prefixItems` or a draft-04 tuple `items` array. Any other shape
/// yields no parameters.
pub fn inspect_schema(schema: &Value) -> Vec<Parameter> {
    let items = schema
        .get("prefixItems")
        .and_then(Value::as_array)
        .or_else(|| schema.get("items").and_then(Value::as_array));

    let Some(items) = items else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let name = item
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("arg{}", index));
            Parameter::new(name, type_label(item.get("type")))
        })
        .collect()
}

fn type_label(ty: Option<&Value>) -> String {
    match ty {
        Some(Value::String(name)) => label_for(name),
        Some(Value::Array(names)) => {
            let labels: Vec<String> = names
                .iter()
                .filter_map(Value::as_str)
                .filter(|name| *name != "null")
                .map(label_for)
                .collect();
            if labels.is_empty() {
                ParamType::Any.label().to_string()
            } else {
                labels.join(" | ")
            }
        }
        _ => ParamType::Any.label().to_string(),
    }
}

fn label_for(json_type: &str) -> String {
    match ParamType::from_json_type(json_type) {
        Some(ty) => ty.label().to_string(),
        None => json_type.to_string(),
    }
}
