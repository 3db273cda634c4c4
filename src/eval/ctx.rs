use super::{error::EvalError, EResult};
use crate::common::Float;
use log::debug;
use std::collections::HashMap;

/// Variable bindings consulted while evaluating a [`Term`](super::Term).
///
/// Each context owns its own table; there is no shared or global state.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Context {
    bindings: HashMap<String, Float>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn bind(&mut self, name: impl Into<String>, value: Float) -> EResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(EvalError::EmptyName("bind"));
        }
        debug!("bind {} = {}", name, value);
        self.bindings.insert(name, value);
        Ok(())
    }

    pub fn get_value(&self, name: &str) -> EResult<Float> {
        if name.is_empty() {
            return Err(EvalError::EmptyName("get_value"));
        }
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::NotBound(name.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
