use query_builder::value::Value;
use tracing::trace;

/// Infers the numeric kind of an integer literal.
///
/// Tries `i64`, then `u64`, then `f64`. Text that fits none of them is kept
/// verbatim as a string value so the database can decide how to compare it.
pub fn integer_value(raw: &str) -> Value {
    let value = if let Ok(v) = raw.parse::<i64>() {
        Value::Int(v)
    } else if let Ok(v) = raw.parse::<u64>() {
        Value::UInt(v)
    } else if let Ok(v) = raw.parse::<f64>() {
        Value::Float(v)
    } else {
        Value::String(raw.to_string())
    };

    trace!("Integer literal {raw} bound as {}", value.kind());
    value
}
