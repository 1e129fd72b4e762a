// Handler registries for match dispatch

use std::collections::HashMap;
use std::fmt;

use crate::union::TaggedUnion;
use crate::variant::Variant;

type Handler<'a, R> = Box<dyn FnOnce(&Variant) -> R + 'a>;

/// Label-to-handler mapping for one dispatch, with an optional default
/// case. Handlers receive the full variant value; the default case does
/// too, since it can be reached from any unhandled label.
///
/// A `Cases` is consumed by a single `match_on`/`match_partial` call, so
/// each handler runs at most once.
pub struct Cases<'a, R> {
    handlers: HashMap<String, Handler<'a, R>>,
    default: Option<Handler<'a, R>>,
}

impl<'a, R> Cases<'a, R> {
    pub fn new() -> Cases<'a, R> {
        Cases {
            handlers: HashMap::new(),
            default: None,
        }
    }

    /// Register the handler for one label. Registering the same label
    /// again replaces the earlier handler.
    pub fn on<F>(mut self, label: impl Into<String>, handler: F) -> Self
    where
        F: FnOnce(&Variant) -> R + 'a,
    {
        self.handlers.insert(label.into(), Box::new(handler));
        self
    }

    /// Supply the default case, switching dispatch from exhaustive mode
    /// to default-case mode.
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(&Variant) -> R + 'a,
    {
        self.default = Some(Box::new(handler));
        self
    }

    /// True iff a handler is registered for `label` (the default case
    /// does not count).
    pub fn handles(&self, label: &str) -> bool {
        self.handlers.contains_key(label)
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// True iff every label of `union` either has a handler or falls
    /// through to a default case.
    pub fn is_exhaustive_for(&self, union: &TaggedUnion) -> bool {
        self.default.is_some()
            || union
                .labels()
                .iter()
                .all(|label| self.handlers.contains_key(label.as_str()))
    }

    /// Single-probe lookup of the value's label, falling back to the
    /// default case. `None` means neither exists.
    pub(crate) fn dispatch(mut self, value: &Variant) -> Option<R> {
        match self.handlers.remove(value.label()) {
            Some(handler) => Some(handler(value)),
            None => self.default.map(|default| default(value)),
        }
    }
}

impl<'a, R> Default for Cases<'a, R> {
    fn default() -> Self {
        Cases::new()
    }
}

impl<'a, R> fmt::Debug for Cases<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        labels.sort_unstable();
        f.debug_struct("Cases")
            .field("labels", &labels)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}
