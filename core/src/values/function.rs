//! Native methods.
//!
//! A [`Method`] is the only callable value. It receives the object it was
//! invoked on as its receiver, the way a prototype method sees `this`.

use super::{Name, Object, Value};
use crate::api::Error;
use std::fmt;
use std::rc::Rc;

/// Signature of the closures wrapped by [`Method`].
///
/// # Example
///
/// ```
/// use lighter_core::values::{Method, Object, Value};
///
/// let add = Method::new(|_this: &mut Object, args: &[Value]| {
///     let a = args[0].as_int()?;
///     let b = args[1].as_int()?;
///     Ok(Value::Int(a + b))
/// });
/// let mut calculator = Object::new();
/// let sum = add.call(&mut calculator, &[Value::Int(1), Value::Int(2)]).unwrap();
/// assert_eq!(sum, Value::Int(3));
/// ```
pub type NativeFn = dyn Fn(&mut Object, &[Value]) -> Result<Value, Error>;

/// A shareable native method.
///
/// Cloning a method shares the underlying closure; two methods are equal only
/// if they share it.
#[derive(Clone)]
pub struct Method {
    name: Option<Name>,
    func: Rc<NativeFn>,
}

impl Method {
    /// Wrap an anonymous closure.
    pub fn new(func: impl Fn(&mut Object, &[Value]) -> Result<Value, Error> + 'static) -> Self {
        Self {
            name: None,
            func: Rc::new(func),
        }
    }

    /// Wrap a closure and give it a name used in diagnostics.
    pub fn named(
        name: impl Into<Name>,
        func: impl Fn(&mut Object, &[Value]) -> Result<Value, Error> + 'static,
    ) -> Self {
        Self {
            name: Some(name.into()),
            func: Rc::new(func),
        }
    }

    /// Wrap a closure that only initializes its receiver.
    ///
    /// The resulting method returns [`Value::Null`].
    pub fn constructor(
        func: impl Fn(&mut Object, &[Value]) -> Result<(), Error> + 'static,
    ) -> Self {
        Self::new(move |this, args| {
            func(this, args)?;
            Ok(Value::Null)
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the method with `this` as its receiver.
    pub fn call(&self, this: &mut Object, args: &[Value]) -> Result<Value, Error> {
        (self.func)(this, args)
    }

    /// Whether both handles share the same closure.
    pub fn ptr_eq(&self, other: &Method) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "<method {}>", name),
            None => write!(f, "<method>"),
        }
    }
}
