// ABOUTME: Arithmetic example tools - add and subtract over JSON numbers.
// ABOUTME: Integer inputs give integer results; any float input gives a float.

use anyhow::anyhow;
use serde_json::Value;

use crate::tool::{Args, FnTool, ParamType};

/// `add(a: int, b: int)`
pub fn add() -> FnTool {
    FnTool::builder("add")
        .description("Adds two numbers together. Usage: add(a, b).")
        .param("a", ParamType::Int)
        .param("b", ParamType::Int)
        .handler(|args| binary(&args, i128::checked_add, |a, b| a + b))
}

/// `subtract(a: int, b: int)`
pub fn subtract() -> FnTool {
    FnTool::builder("subtract")
        .description("Subtracts the second number from the first. Usage: subtract(a, b).")
        .param("a", ParamType::Int)
        .param("b", ParamType::Int)
        .handler(|args| binary(&args, i128::checked_sub, |a, b| a - b))
}

fn binary(
    args: &Args,
    int_op: fn(i128, i128) -> Option<i128>,
    float_op: fn(f64, f64) -> f64,
) -> anyhow::Result<Value> {
    if let (Some(a), Some(b)) = (integer(args.value(0)?), integer(args.value(1)?)) {
        let overflow = || anyhow!("{}() integer overflow", args.tool());
        let result = int_op(a, b).ok_or_else(overflow)?;
        return i64::try_from(result)
            .map(Value::from)
            .or_else(|_| u64::try_from(result).map(Value::from))
            .map_err(|_| overflow());
    }

    let a = args.number(0)?;
    let b = args.number(1)?;
    let result = float_op(a, b);
    serde_json::Number::from_f64(result)
        .map(Value::Number)
        .ok_or_else(|| anyhow!("{}() result is not a finite number", args.tool()))
}

/// A JSON integer in either the signed or unsigned 64-bit range.
fn integer(value: &Value) -> Option<i128> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
}
