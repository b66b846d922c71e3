use std::sync::{
    Arc,
    Weak,
};

use async_lock::{
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard,
};
use async_trait::async_trait;
use futures::FutureExt;

use crate::{
    folder::FolderWeak,
    instance::Instance,
    Child,
    Folder,
    Measured,
    Named,
    Render,
    Size,
};

// =============================================================================
// File
// =============================================================================

#[derive(Clone, Debug)]
pub struct File(Arc<RwLock<FileInternal>>);

// -----------------------------------------------------------------------------
// File - Traits
// -----------------------------------------------------------------------------

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for File {}

#[async_trait]
impl Child for File {
    async fn parent(&self) -> Option<Folder> {
        self.read_lock(|this| this.parent.as_ref().and_then(FolderWeak::upgrade))
            .await
    }
}

#[async_trait]
impl Measured for File {
    async fn size(&self) -> Size {
        self.read_lock(|this| this.size).await
    }
}

#[async_trait]
impl Named for File {
    async fn name(&self) -> String {
        self.read_lock(|this| this.name.clone()).await
    }
}

#[async_trait]
impl Render for File {
    async fn describe(&self) -> String {
        let size = self.size().await;

        format!(" ({size} bytes)")
    }
}

// -----------------------------------------------------------------------------
// File - Read/Write (Internal)
// -----------------------------------------------------------------------------

impl File {
    async fn read_lock<T>(&self, f: impl FnOnce(RwLockReadGuard<'_, FileInternal>) -> T) -> T {
        self.0.read().map(f).await
    }

    async fn write_lock<T>(&self, f: impl FnOnce(RwLockWriteGuard<'_, FileInternal>) -> T) -> T {
        self.0.write().map(f).await
    }
}

// -----------------------------------------------------------------------------
// File - Methods
// -----------------------------------------------------------------------------

impl File {
    pub(crate) fn create(name: &str, size: Size, parent: FolderWeak) -> Self {
        Self(Arc::new(RwLock::new(FileInternal {
            _instance: Instance::default(),
            name: name.to_owned(),
            parent: Some(parent),
            size,
        })))
    }

    pub(crate) async fn detach(&self) {
        self.write_lock(|mut this| this.parent = None).await;
    }

    #[must_use]
    pub fn downgrade(&self) -> FileWeak {
        FileWeak(Arc::downgrade(&self.0))
    }
}

// =============================================================================
// FileWeak
// =============================================================================

#[derive(Clone, Debug)]
pub struct FileWeak(Weak<RwLock<FileInternal>>);

// -----------------------------------------------------------------------------
// FileWeak - Methods
// -----------------------------------------------------------------------------

impl FileWeak {
    #[must_use]
    pub fn upgrade(&self) -> Option<File> {
        self.0.upgrade().map(File)
    }
}

// =============================================================================
// FileInternal
// =============================================================================

#[derive(Debug)]
struct FileInternal {
    _instance: Instance<File>,
    name: String,
    parent: Option<FolderWeak>,
    size: Size,
}
