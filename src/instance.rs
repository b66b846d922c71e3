use std::{
    fmt,
    marker::PhantomData,
    sync::atomic::{
        AtomicUsize,
        Ordering,
    },
};

use crate::{
    File,
    Folder,
    Partition,
    Shortcut,
};

// =============================================================================
// Counted
// =============================================================================

/// A type whose live instances are counted by embedding an [`Instance`].
pub trait Counted {
    fn counter() -> &'static AtomicUsize;
}

macro_rules! counted {
    ($($counted:ty),+ $(,)?) => {
        $(
            impl Counted for $counted {
                fn counter() -> &'static AtomicUsize {
                    static COUNT: AtomicUsize = AtomicUsize::new(0);

                    &COUNT
                }
            }
        )+
    };
}

counted!(File, Folder, Partition, Shortcut);

/// Number of live instances of `T`.
#[must_use]
pub fn live<T>() -> usize
where
    T: Counted,
{
    T::counter().load(Ordering::SeqCst)
}

// =============================================================================
// Instance
// =============================================================================

/// Counts one live `T` for as long as it exists.
pub(crate) struct Instance<T>(PhantomData<fn() -> T>)
where
    T: Counted;

// -----------------------------------------------------------------------------
// Instance - Traits
// -----------------------------------------------------------------------------

impl<T> fmt::Debug for Instance<T>
where
    T: Counted,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Instance")
    }
}

impl<T> Default for Instance<T>
where
    T: Counted,
{
    fn default() -> Self {
        T::counter().fetch_add(1, Ordering::SeqCst);

        Self(PhantomData)
    }
}

impl<T> Drop for Instance<T>
where
    T: Counted,
{
    fn drop(&mut self) {
        T::counter().fetch_sub(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Census
// =============================================================================

/// Snapshot of the live instance counts of every element type.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Census {
    pub files: usize,
    pub folders: usize,
    pub partitions: usize,
    pub shortcuts: usize,
}

// -----------------------------------------------------------------------------
// Census - Traits
// -----------------------------------------------------------------------------

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} partition(s), {} folder(s), {} file(s), {} shortcut(s)",
            self.partitions, self.folders, self.files, self.shortcuts
        )
    }
}

// -----------------------------------------------------------------------------
// Census - Methods
// -----------------------------------------------------------------------------

impl Census {
    #[must_use]
    pub fn take() -> Self {
        Self {
            files: live::<File>(),
            folders: live::<Folder>(),
            partitions: live::<Partition>(),
            shortcuts: live::<Shortcut>(),
        }
    }

    /// Total live elements. Partition roots are counted as folders.
    #[must_use]
    pub const fn elements(&self) -> usize {
        self.files + self.folders + self.shortcuts
    }
}
