use super::*;

/// Slice storage that starts out aliasing a shared array and only becomes privately owned
/// when detach() is called. Once owned, it stays owned until replaced.
#[derive(Debug)]
pub enum CowSlice<T> {
    /// Backed by storage that other owners may be reading
    Aliased(Arc<[T]>),
    /// Backed by storage only this value can reach
    Owned(Vec<T>),
}

impl<T> Default for CowSlice<T> {
    fn default() -> Self {
        Self::Owned(Vec::new())
    }
}

impl<T> From<&Arc<[T]>> for CowSlice<T> {
    fn from(shared: &Arc<[T]>) -> Self {
        Self::Aliased(Arc::clone(shared))
    }
}

impl<T: Clone> CowSlice<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Aliased(shared) => &**shared,
            Self::Owned(owned) => owned.as_slice(),
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Makes sure the storage is privately owned, duplicating it if it is still aliased, and
    /// returns it for writing. Does not allocate if already detached.
    pub fn detach(&mut self) -> &mut [T] {
        if let Self::Aliased(shared) = self {
            trace!("detaching {} shared elements", shared.len());
            *self = Self::Owned(shared.to_vec());
        }
        match self {
            Self::Owned(owned) => owned.as_mut_slice(),
            Self::Aliased(_) => unreachable!("storage was detached above"),
        }
    }
}
