//! Per-module template namespaces.
//!
//! # Responsibilities
//! - Let each module declare its own templates by unqualified name
//! - Qualify names at mount time (`module/name`) so modules cannot shadow
//!   each other
//! - Resolve qualified names at request time
//!
//! # Design Decisions
//! - Template bodies are compiled into the binary with `include_str!`; no
//!   template engine dependency and no filesystem access at request time
//! - The registry is built once during host construction and is read-only
//!   afterwards, so it can be shared across workers without locks

use std::collections::HashMap;

/// Templates owned by a single module, keyed by unqualified name.
#[derive(Debug, Clone, Default)]
pub struct TemplateNamespace {
    entries: Vec<(&'static str, &'static str)>,
}

impl TemplateNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template under an unqualified name.
    pub fn with(mut self, name: &'static str, body: &'static str) -> Self {
        self.entries.push((name, body));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// Host-wide template lookup, built once at mount time.
///
/// Module templates live under `module/name`; host templates keep their
/// unqualified name since the host owns the root namespace.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, &'static str>,
}

impl TemplateRegistry {
    /// Register a host-level template under its unqualified name.
    pub fn insert_host(&mut self, name: &str, body: &'static str) {
        self.templates.insert(name.to_string(), body);
    }

    /// Fold a module's namespace in under qualified names.
    pub fn insert_namespace(&mut self, module: &str, namespace: &TemplateNamespace) {
        for (name, body) in namespace.entries() {
            self.templates.insert(format!("{module}/{name}"), body);
        }
    }

    /// Resolve a template body by (possibly qualified) name.
    pub fn render(&self, name: &str) -> Option<&'static str> {
        self.templates.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces_do_not_shadow_each_other() {
        let first = TemplateNamespace::new().with("index", "<p>first</p>");
        let second = TemplateNamespace::new().with("index", "<p>second</p>");

        let mut registry = TemplateRegistry::default();
        registry.insert_namespace("first", &first);
        registry.insert_namespace("second", &second);

        assert_eq!(registry.render("first/index"), Some("<p>first</p>"));
        assert_eq!(registry.render("second/index"), Some("<p>second</p>"));
        assert_eq!(registry.render("index"), None);
    }

    #[test]
    fn test_host_templates_stay_unqualified() {
        let mut registry = TemplateRegistry::default();
        registry.insert_host("home", "<p>home</p>");
        assert_eq!(registry.render("home"), Some("<p>home</p>"));
        assert_eq!(registry.render("missing"), None);
    }
}
