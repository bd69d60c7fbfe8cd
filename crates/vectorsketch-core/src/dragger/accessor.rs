//! Typed getter/setter pairs over a shape property.

use crate::shapes::Shape;
use std::fmt;
use std::sync::Arc;

type Getter<V> = Arc<dyn Fn(&Shape) -> Option<V> + Send + Sync>;
type Setter<V> = Arc<dyn Fn(&mut Shape, V) + Send + Sync>;

/// Reads and writes one property of a [`Shape`].
///
/// The getter returns `None` when the shape is not of the kind the accessor was
/// built for; the setter is then a no-op.
pub struct Accessor<V> {
    get: Getter<V>,
    set: Setter<V>,
}

impl<V> Accessor<V> {
    pub fn new(
        get: impl Fn(&Shape) -> Option<V> + Send + Sync + 'static,
        set: impl Fn(&mut Shape, V) + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    pub fn get(&self, shape: &Shape) -> Option<V> {
        (self.get)(shape)
    }

    pub fn set(&self, shape: &mut Shape, value: V) {
        (self.set)(shape, value)
    }
}

impl<V> Clone for Accessor<V> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<V> fmt::Debug for Accessor<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").finish_non_exhaustive()
    }
}
