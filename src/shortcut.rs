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
    Located,
    Measured,
    Named,
    Node,
    Render,
    Size,
    WeakNode,
};

// =============================================================================
// Shortcut
// =============================================================================

/// A named, non-owning link to another element.
///
/// The target is held weakly: removing it from its partition leaves the
/// shortcut in place but dangling, and [`Shortcut::target`] then returns
/// `None`.
#[derive(Clone, Debug)]
pub struct Shortcut(Arc<RwLock<ShortcutInternal>>);

// -----------------------------------------------------------------------------
// Shortcut - Traits
// -----------------------------------------------------------------------------

impl PartialEq for Shortcut {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Shortcut {}

#[async_trait]
impl Child for Shortcut {
    async fn parent(&self) -> Option<Folder> {
        self.read_lock(|this| this.parent.as_ref().and_then(FolderWeak::upgrade))
            .await
    }
}

#[async_trait]
impl Measured for Shortcut {
    async fn size(&self) -> Size {
        0
    }
}

#[async_trait]
impl Named for Shortcut {
    async fn name(&self) -> String {
        self.read_lock(|this| this.name.clone()).await
    }
}

#[async_trait]
impl Render for Shortcut {
    async fn describe(&self) -> String {
        match self.target().await {
            Some(target) => {
                let path = target.path().await;

                format!(" -> {}", path.display())
            }
            _ => String::from(" -> nonexistent"),
        }
    }
}

// -----------------------------------------------------------------------------
// Shortcut - Read/Write (Internal)
// -----------------------------------------------------------------------------

impl Shortcut {
    async fn read_lock<T>(&self, f: impl FnOnce(RwLockReadGuard<'_, ShortcutInternal>) -> T) -> T {
        self.0.read().map(f).await
    }

    async fn write_lock<T>(
        &self,
        f: impl FnOnce(RwLockWriteGuard<'_, ShortcutInternal>) -> T,
    ) -> T {
        self.0.write().map(f).await
    }
}

// -----------------------------------------------------------------------------
// Shortcut - Methods
// -----------------------------------------------------------------------------

impl Shortcut {
    pub(crate) fn create(name: &str, target: WeakNode, parent: FolderWeak) -> Self {
        Self(Arc::new(RwLock::new(ShortcutInternal {
            _instance: Instance::default(),
            name: name.to_owned(),
            parent: Some(parent),
            target,
        })))
    }

    pub(crate) async fn detach(&self) {
        self.write_lock(|mut this| this.parent = None).await;
    }

    #[must_use]
    pub fn downgrade(&self) -> ShortcutWeak {
        ShortcutWeak(Arc::downgrade(&self.0))
    }

    /// The linked element, while it is alive and still within a partition.
    pub async fn target(&self) -> Option<Node> {
        let target = self.read_lock(|this| this.target.upgrade()).await?;

        target.is_attached().await.then_some(target)
    }
}

// =============================================================================
// ShortcutWeak
// =============================================================================

#[derive(Clone, Debug)]
pub struct ShortcutWeak(Weak<RwLock<ShortcutInternal>>);

// -----------------------------------------------------------------------------
// ShortcutWeak - Methods
// -----------------------------------------------------------------------------

impl ShortcutWeak {
    #[must_use]
    pub fn upgrade(&self) -> Option<Shortcut> {
        self.0.upgrade().map(Shortcut)
    }
}

// =============================================================================
// ShortcutInternal
// =============================================================================

#[derive(Debug)]
struct ShortcutInternal {
    _instance: Instance<Shortcut>,
    name: String,
    parent: Option<FolderWeak>,
    target: WeakNode,
}
