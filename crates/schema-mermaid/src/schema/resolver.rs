//! Display-name resolution for roles and targets
//!
//! A schema may name entities by a concrete type path (`App\Entity\User`)
//! instead of a plain role. Whether a string names a type is a question only
//! the caller can answer, so it is injected as a [`NameResolver`].

use std::collections::HashSet;

/// Decides whether an identity names a type, and if so its simple name
pub trait NameResolver: Send + Sync {
    /// Simple type name for `identity`, or `None` for a plain label
    fn short_name(&self, identity: &str) -> Option<String>;

    /// Label to display for `identity`
    ///
    /// Resolved type names have their first character lower-cased.
    fn display_name(&self, identity: &str) -> String {
        match self.short_name(identity) {
            Some(name) => lower_first(&name),
            None => identity.to_string(),
        }
    }
}

/// Resolver that treats every identity as a plain label
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNames;

impl NameResolver for PlainNames {
    fn short_name(&self, _identity: &str) -> Option<String> {
        None
    }
}

/// Resolver backed by a set of known, fully qualified type identities
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashSet<String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, identity: impl Into<String>) -> Self {
        self.register(identity);
        self
    }

    pub fn register(&mut self, identity: impl Into<String>) {
        self.types.insert(identity.into());
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.types.contains(identity)
    }
}

impl NameResolver for TypeRegistry {
    fn short_name(&self, identity: &str) -> Option<String> {
        self.contains(identity)
            .then(|| simple_name(identity).to_string())
    }
}

impl<F> NameResolver for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn short_name(&self, identity: &str) -> Option<String> {
        self(identity)
    }
}

/// Last segment of a type path separated by `\`, `::` or `.`
pub fn simple_name(path: &str) -> &str {
    let tail = path.rsplit("::").next().unwrap_or(path);
    tail.rsplit(['\\', '.']).next().unwrap_or(tail)
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
