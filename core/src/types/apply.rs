//! Construction, application onto foreign objects, and mixin inclusion.

use super::descriptor::{Construct, Type};
use crate::api::Error;
use crate::values::{Object, Overwrite, Value, decorate};

/// Whether [`Type::init`] runs the constructor after decorating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitArgs<'a> {
    /// Only decorate; the constructor does not run.
    Skip,
    /// Run the constructor with these arguments.
    Args(&'a [Value]),
}

impl Default for InitArgs<'_> {
    fn default() -> Self {
        InitArgs::Args(&[])
    }
}

impl Type {
    /// Construct a new instance.
    ///
    /// The instance's members fall back to this type's instance behavior, and
    /// the constructor runs with the instance as receiver.
    pub fn instantiate(&self, args: &[Value]) -> Result<Object, Error> {
        let mut object = Object::with_prototype(self.clone());
        self.construct(&mut object, args)?;
        Ok(object)
    }

    /// Run this type's constructor on an existing object.
    ///
    /// A type without a constructor of its own delegates to the nearest
    /// ancestor that has one, passing the arguments through unchanged. This is
    /// also how a constructor chains to another type's constructor.
    pub fn construct(&self, this: &mut Object, args: &[Value]) -> Result<(), Error> {
        let mut current = Some(self);
        while let Some(ty) = current {
            match &ty.0.construct {
                Construct::Explicit(method) => {
                    if ty != self {
                        tracing::trace!(ty = %self, ancestor = %ty, "Delegating construct");
                    }
                    method.call(this, args)?;
                    return Ok(());
                }
                Construct::Inherit => current = ty.parent(),
            }
        }
        Ok(())
    }

    /// Give `object` this type's instance behavior, then optionally construct
    /// it.
    ///
    /// This retrofits the type onto an object that was not constructed by it.
    pub fn init(
        &self,
        object: &mut Object,
        overwrite: Overwrite,
        args: InitArgs<'_>,
    ) -> Result<(), Error> {
        let behavior = self.instance()?.clone();
        decorate(object, &behavior, overwrite);
        if let InitArgs::Args(args) = args {
            self.construct(object, args)?;
        }
        Ok(())
    }

    /// Decorate without replacing existing members, then construct with `args`.
    pub fn init_with_args(&self, object: &mut Object, args: &[Value]) -> Result<(), Error> {
        self.init(object, Overwrite::Preserve, InitArgs::Args(args))
    }

    /// Decorate replacing existing members, then construct with `args`.
    pub fn init_overwriting(&self, object: &mut Object, args: &[Value]) -> Result<(), Error> {
        self.init(object, Overwrite::Replace, InitArgs::Args(args))
    }

    /// Decorate only; the constructor is skipped.
    pub fn apply(&self, object: &mut Object, overwrite: Overwrite) -> Result<(), Error> {
        self.init(object, overwrite, InitArgs::Skip)
    }

    /// Mix `other`'s current instance behavior into this type.
    ///
    /// Members this type already has are kept unless `overwrite` is
    /// [`Overwrite::Replace`]. `other` is recorded as a mixin, which
    /// [`has`](Self::has) reports but [`is`](Self::is) does not. `other` is not
    /// modified, and types already derived from this one are not affected.
    ///
    /// Fails with [`Error::CyclicInclude`] if `other` already has this type,
    /// including when `other` is this type, and with
    /// [`Error::ResourceExceeded`] if `other`'s
    /// [mixin nesting](Self::mixin_nesting) already reaches
    /// [`Options::max_depth`](crate::api::Options::max_depth).
    pub fn include(&self, other: &Type, overwrite: Overwrite) -> Result<(), Error> {
        if other.has(self) {
            return Err(Error::CyclicInclude {
                target: self.label(),
                mixin: other.label(),
            });
        }

        let max_depth = self.options().max_depth;
        let nesting = other.mixin_nesting() + 1;
        if nesting > max_depth {
            return Err(Error::ResourceExceeded(format!(
                "mixin nesting {} exceeds the limit of {}",
                nesting, max_depth
            )));
        }

        let source = other.instance()?.clone();
        decorate(&mut *self.instance_mut()?, &source, overwrite);

        self.0
            .mixins
            .try_borrow_mut()
            .map_err(|_| Error::Busy(self.label()))?
            .push(other.clone());
        tracing::debug!(ty = %self, mixin = %other, ?overwrite, "Included mixin");
        Ok(())
    }

    /// [`include`](Self::include) for a dynamically typed candidate.
    ///
    /// Fails with [`Error::NotAType`] unless `value` holds a type.
    pub fn include_value(&self, value: &Value, overwrite: Overwrite) -> Result<(), Error> {
        match value.as_type() {
            Some(other) => self.include(other, overwrite),
            None => Err(Error::NotAType(value.kind_name())),
        }
    }
}
