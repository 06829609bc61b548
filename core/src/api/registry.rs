//! Type registry.

use super::{Error, Options};
use crate::types::Type;
use crate::values::{Behavior, Name};
use hashbrown::HashMap;
use std::rc::Rc;

/// Owner of a root type and an index of named types derived from it.
///
/// All types derived from the registry's root share its [`Options`].
pub struct Registry {
    root: Type,
    named: HashMap<Name, Type>,
}

impl Registry {
    /// Create a registry with a fresh root type named `Type`.
    pub fn new(options: Options) -> Self {
        Self {
            root: Type::new_root(Rc::new(options), Some(Name::from("Type"))),
            named: HashMap::new(),
        }
    }

    /// The root every registered type descends from.
    pub fn root(&self) -> &Type {
        &self.root
    }

    pub fn options(&self) -> &Options {
        self.root.options()
    }

    /// Extend the root with `behavior`, name the result and register it.
    ///
    /// The reserved `init` entry selects the constructor, as in
    /// [`Type::extend`].
    pub fn define(&mut self, name: &str, behavior: Behavior) -> Result<Type, Error> {
        let ty = self.root.builder_from(behavior)?.name(name).build()?;
        self.register(ty.clone())?;
        Ok(ty)
    }

    /// Index a named type under its name.
    ///
    /// The type must descend from this registry's root and its name must not
    /// be taken.
    pub fn register(&mut self, ty: Type) -> Result<(), Error> {
        let Some(name) = ty.name().map(Name::from) else {
            return Err(Error::Api("cannot register an anonymous type".into()));
        };
        if !ty.is(&self.root) {
            return Err(Error::Api(format!(
                "type {} does not derive from this registry's root",
                name
            )));
        }
        if self.named.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }
        tracing::debug!(name = %name, id = ty.id(), "Registered type");
        self.named.insert(name, ty);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.named.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.named.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
