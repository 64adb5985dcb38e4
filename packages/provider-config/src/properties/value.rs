//! Type-erased property values

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value stored in the [`PropertyStore`](super::PropertyStore).
///
/// Wraps an `Arc<dyn Any + Send + Sync>` so values of any type can share one
/// map, and remembers the concrete type name for diagnostics. Cloning only
/// bumps the reference count.
#[derive(Clone)]
pub struct PropertyValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl PropertyValue {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wrap a value that is already shared, without copying it
    pub fn from_arc<T>(value: Arc<T>) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            inner: value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the value as `T` when the stored runtime type is exactly `T`
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Clone out the shared value as `Arc<T>` when the runtime type matches
    #[must_use]
    pub fn downcast_arc<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Name of the concrete type this value was created from
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True when both handles point at the same stored allocation
    #[must_use]
    pub fn ptr_eq(&self, other: &PropertyValue) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyValue")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}
