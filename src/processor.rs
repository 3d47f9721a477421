use crate::error::{FetcherError, Result};
use serde_json::Value;

/// Downstream transformation applied to a successfully decoded body.
pub trait Processor: Send + Sync {
    fn process(&self, data: Value) -> Result<Value>;
}

impl<F> Processor for F
where
    F: Fn(Value) -> Result<Value> + Send + Sync,
{
    fn process(&self, data: Value) -> Result<Value> {
        self(data)
    }
}

/// Hands the body back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Processor for Passthrough {
    fn process(&self, data: Value) -> Result<Value> {
        Ok(data)
    }
}

/// Selects a sub-value by JSON pointer (`/items/0/id`). Absent paths yield `null`.
#[derive(Debug, Clone)]
pub struct Pointer(String);

impl Pointer {
    pub fn new(pointer: impl Into<String>) -> Result<Self> {
        let pointer = pointer.into();
        if !pointer.is_empty() && !pointer.starts_with('/') {
            return Err(FetcherError::Input(format!(
                "JSON pointer must be empty or start with '/': {pointer}"
            )));
        }
        Ok(Self(pointer))
    }
}

impl Processor for Pointer {
    fn process(&self, mut data: Value) -> Result<Value> {
        Ok(data.pointer_mut(&self.0).map(Value::take).unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pointer_selects_nested_value() {
        let p = Pointer::new("/items/1/id").unwrap();
        let data = json!({"items": [{"id": 1}, {"id": 2}]});
        assert_eq!(p.process(data).unwrap(), json!(2));
    }

    #[test]
    fn pointer_missing_path_is_null() {
        let p = Pointer::new("/nope").unwrap();
        assert_eq!(p.process(json!({"x": 1})).unwrap(), Value::Null);
    }

    #[test]
    fn empty_pointer_is_whole_document() {
        let p = Pointer::new("").unwrap();
        assert_eq!(p.process(json!({"x": 1})).unwrap(), json!({"x": 1}));
    }

    #[test]
    fn pointer_rejects_relative_path() {
        assert!(matches!(Pointer::new("items"), Err(FetcherError::Input(_))));
    }

    #[test]
    fn closures_are_processors() {
        let double = |v: Value| -> Result<Value> { Ok(json!(v.as_i64().unwrap_or(0) * 2)) };
        assert_eq!(double.process(json!(21)).unwrap(), json!(42));
    }
}
