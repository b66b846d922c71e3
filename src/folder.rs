pub mod count;
pub mod get;
pub(crate) mod key;

use std::{
    collections::{
        btree_map::Entry,
        BTreeMap,
    },
    sync::{
        Arc,
        Weak,
    },
};

use async_lock::{
    Mutex,
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard,
};
use async_trait::async_trait;
use futures::FutureExt;
use log::{
    debug,
    trace,
    warn,
};

use self::{
    count::Count,
    key::Key,
};
use crate::{
    instance::Instance,
    Child,
    Error,
    File,
    Located,
    Measured,
    Named,
    Node,
    Render,
    Result,
    Shortcut,
    Size,
};

// =============================================================================
// Folder
// =============================================================================

/// A container owning its children by case-insensitive name.
///
/// The total size of a folder is computed lazily and cached. Inserting or
/// removing a child clears the cache of the folder and of every ancestor, so
/// the next read of any of them recomputes from the leaves.
///
/// Inserts and removals anywhere in one tree are serialised by a mutex shared
/// by all of its folders, so a capacity check and the insert it admits happen
/// without another mutation in between.
#[derive(Clone, Debug)]
pub struct Folder(Arc<RwLock<FolderInternal>>);

// -----------------------------------------------------------------------------
// Folder - Traits
// -----------------------------------------------------------------------------

impl PartialEq for Folder {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Folder {}

#[async_trait]
impl Child for Folder {
    async fn parent(&self) -> Option<Folder> {
        self.read_lock(|this| this.parent.as_ref().and_then(FolderWeak::upgrade))
            .await
    }

    async fn is_attached(&self) -> bool {
        let mut current = self.clone();

        loop {
            let (partition, parent) = current
                .read_lock(|this| {
                    let parent = this.parent.as_ref().and_then(FolderWeak::upgrade);

                    (this.capacity.is_some(), parent)
                })
                .await;

            match parent {
                Some(parent) => current = parent,
                _ => return partition,
            }
        }
    }
}

#[async_trait]
impl Count for Folder {
    async fn count(&self) -> usize {
        self.count_predicate(|_| true).await
    }

    async fn count_files(&self) -> usize {
        self.count_predicate(|child| matches!(child, Node::File(_)))
            .await
    }

    async fn count_folders(&self) -> usize {
        self.count_predicate(|child| matches!(child, Node::Folder(_)))
            .await
    }

    async fn count_shortcuts(&self) -> usize {
        self.count_predicate(|child| matches!(child, Node::Shortcut(_)))
            .await
    }
}

#[async_trait]
impl Measured for Folder {
    async fn size(&self) -> Size {
        let (cached, generation) = self
            .read_lock(|this| (this.size, this.generation))
            .await;

        if let Some(size) = cached {
            return size;
        }

        let mut size = 0;

        for child in self.children().await {
            size += child.size().await;
        }

        let name = self.name().await;

        trace!("recomputed size of {name}: {size} bytes");

        self.cache_size(size, generation).await;

        size
    }
}

#[async_trait]
impl Named for Folder {
    async fn name(&self) -> String {
        self.read_lock(|this| this.name.clone()).await
    }
}

#[async_trait]
impl Render for Folder {
    async fn describe(&self) -> String {
        let size = self.size().await;

        match self.read_lock(|this| this.capacity).await {
            Some(capacity) => format!(" [partition, {size}/{capacity} bytes]"),
            _ => format!("/ ({size} bytes)"),
        }
    }

    async fn nested(&self) -> Vec<Node> {
        self.children().await
    }
}

// -----------------------------------------------------------------------------
// Folder - Read/Write (Internal)
// -----------------------------------------------------------------------------

impl Folder {
    async fn read_lock<T>(&self, f: impl FnOnce(RwLockReadGuard<'_, FolderInternal>) -> T) -> T {
        self.0.read().map(f).await
    }

    async fn write_lock<T>(&self, f: impl FnOnce(RwLockWriteGuard<'_, FolderInternal>) -> T) -> T {
        self.0.write().map(f).await
    }
}

// -----------------------------------------------------------------------------
// Folder - Create
// -----------------------------------------------------------------------------

impl Folder {
    fn create(
        name: &str,
        capacity: Option<Size>,
        parent: Option<FolderWeak>,
        mutation: Arc<Mutex<()>>,
    ) -> Self {
        Self(Arc::new(RwLock::new(FolderInternal {
            _instance: Instance::default(),
            capacity,
            children: BTreeMap::new(),
            generation: 0,
            mutation,
            name: name.to_owned(),
            parent,
            size: None,
        })))
    }

    pub(crate) fn create_partition(name: &str, capacity: Size) -> Self {
        Self::create(name, Some(capacity), None, Arc::default())
    }
}

// -----------------------------------------------------------------------------
// Folder - Children
// -----------------------------------------------------------------------------

impl Folder {
    /// Children ordered by their case-insensitive name.
    pub async fn children(&self) -> Vec<Node> {
        self.read_lock(|this| this.children.values().cloned().collect())
            .await
    }

    pub async fn get_child(&self, name: &str) -> Option<Node> {
        let key = Key::from_name(name);

        self.read_lock(|this| this.children.get(&key).cloned())
            .await
    }

    pub async fn contains(&self, name: &str) -> bool {
        let key = Key::from_name(name);

        self.read_lock(|this| this.children.contains_key(&key))
            .await
    }

    async fn count_predicate<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&&Node) -> bool + Send,
    {
        self.read_lock(|this| this.children.values().filter(predicate).count())
            .await
    }
}

// -----------------------------------------------------------------------------
// Folder - Insert/Remove
// -----------------------------------------------------------------------------

impl Folder {
    pub async fn create_file(&self, name: &str, size: Size) -> Result<File> {
        let mutation = self.mutation().await;
        let _guard = mutation.lock().await;
        let key = self.admit(name).await?;

        self.check_capacity(size).await?;

        let file = File::create(name, size, self.downgrade());

        self.insert(key, name, Node::File(file.clone())).await?;

        let path = file.path().await;

        debug!("created file {} ({size} bytes)", path.display());

        Ok(file)
    }

    pub async fn create_folder(&self, name: &str) -> Result<Self> {
        let mutation = self.mutation().await;
        let _guard = mutation.lock().await;
        let key = self.admit(name).await?;
        let parent = Some(self.downgrade());
        let folder = Self::create(name, None, parent, mutation.clone());

        self.insert(key, name, Node::Folder(folder.clone())).await?;

        let path = folder.path().await;

        debug!("created folder {}", path.display());

        Ok(folder)
    }

    pub async fn create_shortcut<T>(&self, name: &str, target: T) -> Result<Shortcut>
    where
        T: Into<Node> + Send,
    {
        let mutation = self.mutation().await;
        let _guard = mutation.lock().await;
        let key = self.admit(name).await?;
        let target = target.into();

        if !target.is_attached().await {
            return Err(Error::Detached);
        }

        let shortcut = Shortcut::create(name, target.downgrade(), self.downgrade());

        self.insert(key, name, Node::Shortcut(shortcut.clone()))
            .await?;

        let (path, target) = (shortcut.path().await, target.path().await);

        debug!("created shortcut {} -> {}", path.display(), target.display());

        Ok(shortcut)
    }

    /// Removes the named child, detaching it (and so everything beneath it)
    /// from the partition.
    pub async fn remove(&self, name: &str) -> Result<Node> {
        let mutation = self.mutation().await;
        let _guard = mutation.lock().await;
        let key = Key::from_name(name);
        let node = self
            .write_lock(|mut this| this.children.remove(&key))
            .await
            .ok_or_else(|| Error::NotFound {
                name: name.to_owned(),
            })?;

        let (name, path) = (node.name().await, self.path().await);

        debug!("removing {name} from {}", path.display());

        node.detach().await;
        self.invalidate().await;

        Ok(node)
    }

    async fn admit(&self, name: &str) -> Result<Key> {
        let key = Key::parse(name)?;

        if !self.is_attached().await {
            return Err(Error::Detached);
        }

        if self.read_lock(|this| this.children.contains_key(&key)).await {
            return Err(Error::AlreadyExists {
                name: name.to_owned(),
            });
        }

        Ok(key)
    }

    async fn check_capacity(&self, requested: Size) -> Result<()> {
        let top = self.top().await;
        let capacity = top
            .read_lock(|this| this.capacity)
            .await
            .ok_or(Error::Detached)?;
        let available = capacity.saturating_sub(top.size().await);

        if requested > available {
            let name = top.name().await;

            warn!("refused {requested} bytes in {name}, {available} bytes available");

            return Err(Error::CapacityOverflow {
                requested,
                available,
            });
        }

        Ok(())
    }

    async fn insert(&self, key: Key, name: &str, node: Node) -> Result<()> {
        self.write_lock(|mut this| match this.children.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(node);

                Ok(())
            }
            Entry::Occupied(_) => Err(Error::AlreadyExists {
                name: name.to_owned(),
            }),
        })
        .await?;

        self.invalidate().await;

        Ok(())
    }

    /// Stores a computed size unless the folder was invalidated after
    /// `generation` was read.
    async fn cache_size(&self, size: Size, generation: u64) -> bool {
        self.write_lock(|mut this| {
            let current = this.generation == generation;

            if current {
                this.size = Some(size);
            }

            current
        })
        .await
    }

    async fn mutation(&self) -> Arc<Mutex<()>> {
        self.read_lock(|this| this.mutation.clone()).await
    }

    /// Clears the cached size of this folder and of every ancestor.
    async fn invalidate(&self) {
        let mut current = Some(self.clone());

        while let Some(folder) = current {
            current = folder
                .write_lock(|mut this| {
                    this.size = None;
                    this.generation = this.generation.wrapping_add(1);
                    this.parent.as_ref().and_then(FolderWeak::upgrade)
                })
                .await;
        }

        let name = self.name().await;

        trace!("invalidated cached sizes from {name}");
    }
}

// -----------------------------------------------------------------------------
// Folder - Methods
// -----------------------------------------------------------------------------

impl Folder {
    pub(crate) async fn detach(&self) {
        self.write_lock(|mut this| this.parent = None).await;
    }

    #[must_use]
    pub fn downgrade(&self) -> FolderWeak {
        FolderWeak(Arc::downgrade(&self.0))
    }

    pub async fn is_partition(&self) -> bool {
        self.read_lock(|this| this.capacity.is_some()).await
    }

    /// The outermost folder reachable through parents: the partition root
    /// while attached.
    pub async fn top(&self) -> Self {
        let mut current = self.clone();

        loop {
            let parent = current.parent().await;

            match parent {
                Some(parent) => current = parent,
                _ => return current,
            }
        }
    }
}

// =============================================================================
// FolderWeak
// =============================================================================

#[derive(Clone, Debug)]
pub struct FolderWeak(Weak<RwLock<FolderInternal>>);

// -----------------------------------------------------------------------------
// FolderWeak - Methods
// -----------------------------------------------------------------------------

impl FolderWeak {
    #[must_use]
    pub fn upgrade(&self) -> Option<Folder> {
        self.0.upgrade().map(Folder)
    }
}

// =============================================================================
// FolderInternal
// =============================================================================

#[derive(Debug)]
struct FolderInternal {
    _instance: Instance<Folder>,
    capacity: Option<Size>,
    children: BTreeMap<Key, Node>,
    generation: u64,
    mutation: Arc<Mutex<()>>,
    name: String,
    parent: Option<FolderWeak>,
    size: Option<Size>,
}


#[cfg(test)]
mod remove_tests {
    use crate::{
        Count,
        Error,
        Partition,
        PartitionOptions,
    };

    #[tokio::test]
    async fn remove_missing() {
        let partition = Partition::new(PartitionOptions::default()).unwrap();

        assert_eq!(
            partition.remove("f1").await.unwrap_err(),
            Error::NotFound {
                name: String::from("f1")
            }
        );
    }

    #[tokio::test]
    async fn remove_case_insensitive() {
        let partition = Partition::new(PartitionOptions::default()).unwrap();

        partition.create_file("f1", 1).await.unwrap();
        partition.remove("F1").await.unwrap();

        assert_eq!(partition.count().await, 0);
        assert!(partition.create_file("F1", 1).await.is_ok());
    }

    #[tokio::test]
    async fn detached_folder_refuses_children() {
        let partition = Partition::new(PartitionOptions::default()).unwrap();
        let folder = partition.create_folder("r2").await.unwrap();

        partition.remove("r2").await.unwrap();

        assert_eq!(folder.create_folder("r3").await.unwrap_err(), Error::Detached);
        assert_eq!(folder.create_file("f3", 1).await.unwrap_err(), Error::Detached);
    }

    #[tokio::test]
    async fn shortcut_to_detached() {
        let partition = Partition::new(PartitionOptions::default()).unwrap();
        let file = partition.create_file("f1", 1).await.unwrap();

        partition.remove("f1").await.unwrap();

        assert_eq!(
            partition.create_shortcut("s1", file).await.unwrap_err(),
            Error::Detached
        );
    }
}
