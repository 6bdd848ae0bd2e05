// ABOUTME: Args - decoded positional arguments bound to one tool invocation.
// ABOUTME: Provides validated extraction helpers that fail with descriptive errors.

use anyhow::{anyhow, bail};
use serde_json::Value;

use super::Parameter;

/// Positional arguments for a single call, plus the callee's declared signature.
#[derive(Debug, Clone)]
pub struct Args {
    tool: String,
    params: Vec<Parameter>,
    values: Vec<Value>,
}

impl Args {
    /// Bind decoded values to a tool's declared parameters.
    pub fn new(tool: impl Into<String>, params: Vec<Parameter>, values: Vec<Value>) -> Self {
        Self {
            tool: tool.into(),
            params,
            values,
        }
    }

    /// Name of the tool these arguments were bound to.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Declared parameters of the tool.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values, in call order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Fail unless exactly `expected` positional arguments were given.
    pub fn expect_arity(&self, expected: usize) -> anyhow::Result<()> {
        let given = self.values.len();
        if given == expected {
            return Ok(());
        }
        let noun = if expected == 1 { "argument" } else { "arguments" };
        let verb = if given == 1 { "was" } else { "were" };
        bail!(
            "{}() takes {} positional {} but {} {} given",
            self.tool,
            expected,
            noun,
            given,
            verb
        )
    }

    /// The raw value at `index`.
    pub fn value(&self, index: usize) -> anyhow::Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            anyhow!(
                "{}() missing required positional argument: '{}'",
                self.tool,
                self.param_name(index)
            )
        })
    }

    /// An integer argument. Floats with a fractional part are rejected.
    pub fn int(&self, index: usize) -> anyhow::Result<i64> {
        let value = self.value(index)?;
        value
            .as_i64()
            .ok_or_else(|| self.type_error(index, "int", value))
    }

    /// Any numeric argument, widened to f64.
    pub fn number(&self, index: usize) -> anyhow::Result<f64> {
        let value = self.value(index)?;
        value
            .as_f64()
            .ok_or_else(|| self.type_error(index, "number", value))
    }

    pub fn str(&self, index: usize) -> anyhow::Result<&str> {
        let value = self.value(index)?;
        value
            .as_str()
            .ok_or_else(|| self.type_error(index, "str", value))
    }

    pub fn bool(&self, index: usize) -> anyhow::Result<bool> {
        let value = self.value(index)?;
        value
            .as_bool()
            .ok_or_else(|| self.type_error(index, "bool", value))
    }

    fn param_name(&self, index: usize) -> String {
        self.params
            .get(index)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("arg{}", index))
    }

    fn type_error(&self, index: usize, expected: &str, got: &Value) -> anyhow::Error {
        anyhow!(
            "{}() argument '{}' must be {}, not {}",
            self.tool,
            self.param_name(index),
            expected,
            json_kind(got)
        )
    }
}

/// Short name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
