use std::{
    ops::Deref,
    sync::OnceLock,
};

use log::debug;

use crate::{
    instance::Instance,
    Error,
    Folder,
    Measured,
    Result,
    Size,
};

pub const DEFAULT_CAPACITY: Size = 10_000;

pub const DEFAULT_NAME: &str = "/";

// =============================================================================
// PartitionOptions
// =============================================================================

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartitionOptions {
    pub name: String,
    pub capacity: Size,
}

// -----------------------------------------------------------------------------
// PartitionOptions - Traits
// -----------------------------------------------------------------------------

impl Default for PartitionOptions {
    fn default() -> Self {
        Self::create(DEFAULT_NAME, DEFAULT_CAPACITY)
    }
}

// -----------------------------------------------------------------------------
// PartitionOptions - Methods
// -----------------------------------------------------------------------------

impl PartitionOptions {
    #[must_use]
    pub fn create(name: impl Into<String>, capacity: Size) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

// =============================================================================
// Partition
// =============================================================================

/// The root folder of a tree, limiting the total size of the files in it.
#[derive(Debug)]
pub struct Partition {
    _instance: Instance<Partition>,
    capacity: Size,
    root: Folder,
}

// -----------------------------------------------------------------------------
// Partition - Traits
// -----------------------------------------------------------------------------

impl Deref for Partition {
    type Target = Folder;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

// -----------------------------------------------------------------------------
// Partition - Methods
// -----------------------------------------------------------------------------

// Partition - Methods - New

impl Partition {
    pub fn new(options: PartitionOptions) -> Result<Self> {
        if options.name.is_empty() {
            return Err(Error::InvalidName { name: options.name });
        }

        Ok(Self::create(&options))
    }

    /// The process-wide partition, created on first use with
    /// [`PartitionOptions::default`].
    pub fn instance() -> &'static Self {
        static INSTANCE: OnceLock<Partition> = OnceLock::new();

        INSTANCE.get_or_init(|| Self::create(&PartitionOptions::default()))
    }

    fn create(options: &PartitionOptions) -> Self {
        debug!(
            "creating partition {} with capacity {} bytes",
            options.name, options.capacity
        );

        Self {
            _instance: Instance::default(),
            capacity: options.capacity,
            root: Folder::create_partition(&options.name, options.capacity),
        }
    }
}

// Partition - Methods - Capacity

impl Partition {
    #[must_use]
    pub const fn capacity(&self) -> Size {
        self.capacity
    }

    /// Bytes still available for new files.
    pub async fn remaining(&self) -> Size {
        self.capacity.saturating_sub(self.root.size().await)
    }

    #[must_use]
    pub fn root(&self) -> Folder {
        self.root.clone()
    }
}
