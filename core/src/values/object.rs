//! Plain data objects.

use super::{Behavior, Decoratable, Name, Value};
use crate::api::Error;
use crate::types::Type;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// A plain data object.
///
/// Members are looked up in three places, in order: enumerable own fields,
/// hidden own fields, then the instance behavior of the prototype type (if
/// the object was constructed by a type). Nothing else links an object to the
/// type it came from.
#[derive(Clone, Default)]
pub struct Object {
    fields: Behavior,
    hidden: Behavior,
    prototype: Option<Type>,
}

impl Object {
    /// An empty object with no prototype.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Behavior) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// An empty object whose members fall back to `ty`'s instance behavior.
    ///
    /// Does not run any constructor; see [`Type::instantiate`].
    pub fn with_prototype(ty: Type) -> Self {
        Self {
            prototype: Some(ty),
            ..Self::default()
        }
    }

    pub fn prototype(&self) -> Option<&Type> {
        self.prototype.as_ref()
    }

    /// Whether the object was constructed by `ty` or one of its sub-types.
    pub fn is_instance_of(&self, ty: &Type) -> bool {
        self.prototype.as_ref().is_some_and(|proto| proto.is(ty))
    }

    /// Look up a member.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.fields.get(key).or_else(|| self.hidden.get(key)) {
            return Some(value.clone());
        }
        self.prototype.as_ref().and_then(|proto| proto.behavior(key))
    }

    /// Whether a member is visible, either own or through the prototype.
    pub fn has(&self, key: &str) -> bool {
        self.has_own(key)
            || self
                .prototype
                .as_ref()
                .is_some_and(|proto| proto.has_behavior(key))
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.fields.contains_key(key) || self.hidden.contains_key(key)
    }

    /// Assign an own member.
    ///
    /// A hidden member stays hidden when reassigned.
    pub fn set(&mut self, key: impl Into<Name>, value: impl Into<Value>) {
        let key = key.into();
        if self.hidden.contains_key(&key) {
            self.hidden.insert(key, value);
        } else {
            self.fields.insert(key, value);
        }
    }

    /// Define a member that is readable and writable but left out of
    /// [`keys`](Self::keys).
    ///
    /// An existing enumerable member with the same name becomes hidden.
    ///
    /// # Example
    ///
    /// ```
    /// use lighter_core::values::{Behavior, Object, Value};
    ///
    /// let mut object = Object::from_fields(Behavior::new().with("a", 1));
    /// object.hide("b", 2);
    /// assert_eq!(object.get("b"), Some(Value::Int(2)));
    /// let keys: Vec<_> = object.keys().iter().map(|k| k.to_string()).collect();
    /// assert_eq!(keys, ["a"]);
    /// ```
    pub fn hide(&mut self, key: impl Into<Name>, value: impl Into<Value>) {
        let key = key.into();
        self.fields.remove(&key);
        self.hidden.insert(key, value);
    }

    /// Remove an own member, hidden or not.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key).or_else(|| self.hidden.remove(key))
    }

    /// Enumerable own member names, sorted.
    pub fn keys(&self) -> Vec<Name> {
        self.fields.keys()
    }

    /// Enumerable own members.
    pub fn fields(&self) -> &Behavior {
        &self.fields
    }

    /// Invoke the method named `key` with this object as its receiver.
    pub fn call(&mut self, key: &str, args: &[Value]) -> Result<Value, Error> {
        match self.get(key) {
            Some(Value::Method(method)) => method.call(self, args),
            Some(other) => Err(Error::NotCallable {
                name: key.into(),
                found: other.kind_name(),
            }),
            None => Err(Error::UnknownMember(key.into())),
        }
    }

    /// Wrap the object in a shared reference.
    pub fn into_ref(self) -> ObjectRef {
        ObjectRef::new(self)
    }
}

impl Decoratable for Object {
    fn has_member(&self, key: &str) -> bool {
        self.has(key)
    }

    fn put_member(&mut self, key: Name, value: Value) {
        self.set(key, value);
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(proto) = &self.prototype {
            write!(f, "{} ", proto)?;
        }
        write!(f, "{:?}", self.fields)
    }
}

/// Define a hidden member on `object`.
///
/// Equivalent to [`Object::hide`].
pub fn hide(object: &mut Object, key: impl Into<Name>, value: impl Into<Value>) {
    object.hide(key, value);
}

/// A shared, mutable reference to an [`Object`].
///
/// This is how objects nest inside values: copying a behavior map that holds
/// an object shares the object instead of cloning it.
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<Object>>);

impl ObjectRef {
    pub fn new(object: Object) -> Self {
        Self(Rc::new(RefCell::new(object)))
    }

    /// Borrow the object, failing if it is currently being mutated.
    pub fn borrow(&self) -> Result<Ref<'_, Object>, Error> {
        self.0
            .try_borrow()
            .map_err(|_| Error::Busy("shared object".into()))
    }

    /// Mutably borrow the object, failing if it is currently borrowed.
    pub fn borrow_mut(&self) -> Result<RefMut<'_, Object>, Error> {
        self.0
            .try_borrow_mut()
            .map_err(|_| Error::Busy("shared object".into()))
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(object) => write!(f, "{:?}", *object),
            Err(_) => write!(f, "{{...}}"),
        }
    }
}
