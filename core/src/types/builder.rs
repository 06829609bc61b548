//! Extension: deriving a new type from a base.

use super::descriptor::{Construct, Type, TypeData, next_id};
use crate::api::Error;
use crate::values::{Behavior, Method, Name, Object, Value};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Builder for a sub-type of `base`.
///
/// This is the explicit call shape of extension: the constructor, instance
/// behavior and static behavior are given separately. [`Type::extend`] is the
/// shorthand that takes a single behavior map.
///
/// # Example
///
/// ```
/// use lighter_core::types::Type;
/// use lighter_core::values::Value;
///
/// let rated = Type::root()
///     .builder()
///     .name("Rated")
///     .construct(|this, _| {
///         this.set("rating", Value::Null);
///         Ok(())
///     })
///     .method("rate", |this, args| {
///         this.set("rating", args[0].clone());
///         Ok(Value::Null)
///     })
///     .static_property("maxStars", 5)
///     .build()
///     .unwrap();
///
/// let mut product = rated.instantiate(&[]).unwrap();
/// product.call("rate", &[Value::Int(4)]).unwrap();
/// assert_eq!(product.get("rating"), Some(Value::Int(4)));
/// assert_eq!(rated.static_property("maxStars"), Some(&Value::Int(5)));
/// ```
#[must_use]
pub struct TypeBuilder<'a> {
    base: &'a Type,
    name: Option<Name>,
    construct: Option<Method>,
    instance: Behavior,
    statics: Behavior,
}

impl<'a> TypeBuilder<'a> {
    pub fn new(base: &'a Type) -> Self {
        Self {
            base,
            name: None,
            construct: None,
            instance: Behavior::new(),
            statics: Behavior::new(),
        }
    }

    pub fn name(mut self, name: impl Into<Name>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the constructor from a closure that initializes its receiver.
    pub fn construct(
        self,
        func: impl Fn(&mut Object, &[Value]) -> Result<(), Error> + 'static,
    ) -> Self {
        self.construct_method(Method::constructor(func))
    }

    /// Set the constructor; its return value is ignored.
    pub fn construct_method(mut self, method: Method) -> Self {
        self.construct = Some(method);
        self
    }

    /// Add an instance method.
    pub fn method(
        mut self,
        name: impl Into<Name>,
        func: impl Fn(&mut Object, &[Value]) -> Result<Value, Error> + 'static,
    ) -> Self {
        let name = name.into();
        self.instance.insert(name.clone(), Method::named(name, func));
        self
    }

    /// Add an instance property shared by every instance.
    pub fn property(mut self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.instance.insert(name, value);
        self
    }

    /// Overlay a whole instance-behavior map.
    ///
    /// The reserved `init` entry is never copied into instance behavior.
    pub fn behavior(mut self, behavior: &Behavior) -> Self {
        self.instance.overlay(behavior);
        self
    }

    /// Overlay a static-behavior map.
    pub fn statics(mut self, statics: &Behavior) -> Self {
        self.statics.overlay(statics);
        self
    }

    pub fn static_property(mut self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.statics.insert(name, value);
        self
    }

    /// Create the new type.
    ///
    /// The base's behavior maps are copied, the builder's maps are overlaid on
    /// the copies and the base is recorded as parent. The base itself is not
    /// modified.
    pub fn build(self) -> Result<Type, Error> {
        let base = self.base;
        let options = base.0.options.clone();

        let depth = base.depth() + 1;
        if depth > options.max_depth {
            return Err(Error::ResourceExceeded(format!(
                "inheritance depth {} exceeds the limit of {}",
                depth, options.max_depth
            )));
        }

        let mut instance = base.instance()?.clone();
        for (key, value) in self.instance.iter() {
            if *key != options.init_key {
                instance.insert(key.clone(), value.clone());
            }
        }

        let mut statics = base.0.statics.clone();
        statics.overlay(&self.statics);

        let construct = match self.construct {
            Some(method) => Construct::Explicit(method),
            None => Construct::Inherit,
        };

        let ty = Type(Rc::new(TypeData {
            id: next_id(),
            name: self.name,
            construct,
            instance: RefCell::new(instance),
            statics,
            parent: Some(base.clone()),
            mixins: RefCell::new(SmallVec::new()),
            options,
            depth,
        }));
        tracing::debug!(
            ty = %ty,
            parent = %base,
            own_construct = ty.has_own_construct(),
            "Extended type"
        );
        Ok(ty)
    }
}

impl Type {
    /// Start building a sub-type of this type.
    pub fn builder(&self) -> TypeBuilder<'_> {
        TypeBuilder::new(self)
    }

    /// Builder pre-filled from a single behavior map whose `init` entry (if
    /// any) is the constructor.
    pub(crate) fn builder_from(&self, behavior: Behavior) -> Result<TypeBuilder<'_>, Error> {
        let options = self.options();
        let mut builder = self.builder();
        match behavior.get(&options.init_key) {
            Some(Value::Method(method)) => builder = builder.construct_method(method.clone()),
            Some(other) if options.strict_init => {
                return Err(Error::InitNotCallable {
                    key: options.init_key.clone(),
                    found: other.kind_name(),
                });
            }
            Some(_) | None => {}
        }
        builder.instance = behavior;
        Ok(builder)
    }

    /// Derive a sub-type from a single instance-behavior map.
    ///
    /// The map's `init` entry becomes the constructor and is not copied into
    /// instance behavior. Without it, the sub-type's constructor forwards its
    /// arguments to this type's.
    pub fn extend(&self, behavior: Behavior) -> Result<Type, Error> {
        self.builder_from(behavior)?.build()
    }
}
