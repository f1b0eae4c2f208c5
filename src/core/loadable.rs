/// An asynchronously loaded value. Consumers match on readiness instead of
/// assuming load order relative to the first frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Pending,
    Ready(T),
    Failed,
}

impl<T> Loadable<T> {
    /// Resolve a pending load. Returns `false` (and drops `value`) if the
    /// slot was already resolved or failed; loads populate state only once.
    pub fn resolve(&mut self, value: T) -> bool {
        match self {
            Loadable::Pending => {
                *self = Loadable::Ready(value);
                true
            }
            _ => false,
        }
    }

    pub fn fail(&mut self) {
        if matches!(self, Loadable::Pending) {
            *self = Loadable::Failed;
        }
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        match self {
            Loadable::Ready(v) => Some(v),
            _ => None,
        }
    }
}
