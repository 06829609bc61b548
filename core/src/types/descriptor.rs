use crate::api::{Error, Options};
use crate::values::{Behavior, Method, Name, Value};
use smallvec::SmallVec;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of a type descriptor.
pub type TypeId = u64;

static NEXT_TYPE_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_id() -> TypeId {
    NEXT_TYPE_ID.fetch_add(1, Ordering::Relaxed)
}

/// How a type initializes new instances.
#[derive(Clone)]
pub(crate) enum Construct {
    /// Forward the arguments to the parent's constructor; a root does nothing.
    Inherit,
    Explicit(Method),
}

pub(crate) struct TypeData {
    pub(crate) id: TypeId,
    pub(crate) name: Option<Name>,
    pub(crate) construct: Construct,
    // Only written by `include`.
    pub(crate) instance: RefCell<Behavior>,
    pub(crate) statics: Behavior,
    // Set once at creation.
    pub(crate) parent: Option<Type>,
    // Append-only.
    pub(crate) mixins: RefCell<SmallVec<[Type; 2]>>,
    pub(crate) options: Rc<Options>,
    pub(crate) depth: usize,
}

impl Drop for TypeData {
    // Unlinks chains of otherwise unreferenced descriptors one at a time
    // instead of recursively.
    fn drop(&mut self) {
        let mut pending: Vec<Type> = self.mixins.get_mut().drain(..).collect();
        pending.extend(self.parent.take());
        while let Some(ty) = pending.pop() {
            if let Ok(mut data) = Rc::try_unwrap(ty.0) {
                pending.extend(data.mixins.get_mut().drain(..));
                pending.extend(data.parent.take());
            }
        }
    }
}

/// A type descriptor: the blueprint of a kind of object.
///
/// `Type` is a cheap handle; clones refer to the same descriptor and compare
/// equal. Descriptors are created by [`Type::root`], [`Type::extend`] or a
/// [`TypeBuilder`](super::TypeBuilder) and are never destroyed while a handle,
/// a descendant or an instance refers to them.
#[derive(Clone)]
pub struct Type(pub(crate) Rc<TypeData>);

static_assertions::assert_not_impl_any!(Type: Send, Sync);

impl Type {
    /// Create a standalone root type with default [`Options`].
    ///
    /// A root has no parent, no behavior and a constructor that does nothing.
    pub fn root() -> Type {
        Type::new_root(Rc::new(Options::default()), None)
    }

    pub(crate) fn new_root(options: Rc<Options>, name: Option<Name>) -> Type {
        Type(Rc::new(TypeData {
            id: next_id(),
            name,
            construct: Construct::Inherit,
            instance: RefCell::new(Behavior::new()),
            statics: Behavior::new(),
            parent: None,
            mixins: RefCell::new(SmallVec::new()),
            options,
            depth: 0,
        }))
    }

    pub fn id(&self) -> TypeId {
        self.0.id
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// The type this one was derived from; `None` for a root.
    pub fn parent(&self) -> Option<&Type> {
        self.0.parent.as_ref()
    }

    /// Number of parent links between this type and its root.
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    pub fn options(&self) -> &Options {
        &self.0.options
    }

    /// Whether the type has its own constructor rather than delegating to its
    /// parent's.
    pub fn has_own_construct(&self) -> bool {
        matches!(self.0.construct, Construct::Explicit(_))
    }

    /// Types mixed in with [`include`](Self::include), in inclusion order.
    pub fn mixins(&self) -> Vec<Type> {
        self.0.mixins.borrow().to_vec()
    }

    /// Look up an instance-behavior member.
    pub fn behavior(&self, key: &str) -> Option<Value> {
        self.0.instance.borrow().get(key).cloned()
    }

    pub fn has_behavior(&self, key: &str) -> bool {
        self.0.instance.borrow().contains_key(key)
    }

    /// Instance-behavior member names, sorted.
    pub fn behavior_keys(&self) -> Vec<Name> {
        self.0.instance.borrow().keys()
    }

    /// A snapshot of the full instance behavior.
    pub fn prototype(&self) -> Behavior {
        self.0.instance.borrow().clone()
    }

    /// Look up a static-behavior member.
    pub fn static_property(&self, key: &str) -> Option<&Value> {
        self.0.statics.get(key)
    }

    pub fn statics(&self) -> &Behavior {
        &self.0.statics
    }

    /// Diagnostic label: the name, or `<anonymous #id>`.
    pub fn label(&self) -> String {
        self.to_string()
    }

    pub(crate) fn instance(&self) -> Result<Ref<'_, Behavior>, Error> {
        self.0
            .instance
            .try_borrow()
            .map_err(|_| Error::Busy(self.label()))
    }

    pub(crate) fn instance_mut(&self) -> Result<RefMut<'_, Behavior>, Error> {
        self.0
            .instance
            .try_borrow_mut()
            .map_err(|_| Error::Busy(self.label()))
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Type {}

impl hash::Hash for Type {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "<anonymous #{}>", self.0.id),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Type");
        s.field("id", &self.0.id).field("name", &self.0.name);
        if let Some(parent) = &self.0.parent {
            s.field("parent", &parent.label());
        }
        s.finish_non_exhaustive()
    }
}
