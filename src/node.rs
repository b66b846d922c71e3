pub mod child;
pub mod located;
pub mod measured;
pub mod named;
pub mod render;

use async_trait::async_trait;

use self::{
    child::Child,
    measured::{
        Measured,
        Size,
    },
    named::Named,
    render::Render,
};
use crate::{
    file::FileWeak,
    folder::FolderWeak,
    shortcut::ShortcutWeak,
    File,
    Folder,
    Shortcut,
};

// =============================================================================
// Node
// =============================================================================

#[derive(Clone, Debug)]
pub enum Node {
    File(File),
    Folder(Folder),
    Shortcut(Shortcut),
}

// -----------------------------------------------------------------------------
// Node - Traits
// -----------------------------------------------------------------------------

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::File(a), Self::File(b)) => a == b,
            (Self::Folder(a), Self::Folder(b)) => a == b,
            (Self::Shortcut(a), Self::Shortcut(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Node {}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Self::File(file)
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Self::Folder(folder)
    }
}

impl From<Shortcut> for Node {
    fn from(shortcut: Shortcut) -> Self {
        Self::Shortcut(shortcut)
    }
}

#[async_trait]
impl Child for Node {
    async fn parent(&self) -> Option<Folder> {
        match self {
            Self::File(file) => file.parent().await,
            Self::Folder(folder) => folder.parent().await,
            Self::Shortcut(shortcut) => shortcut.parent().await,
        }
    }

    async fn is_attached(&self) -> bool {
        match self {
            Self::File(file) => file.is_attached().await,
            Self::Folder(folder) => folder.is_attached().await,
            Self::Shortcut(shortcut) => shortcut.is_attached().await,
        }
    }
}

#[async_trait]
impl Measured for Node {
    async fn size(&self) -> Size {
        match self {
            Self::File(file) => file.size().await,
            Self::Folder(folder) => folder.size().await,
            Self::Shortcut(shortcut) => shortcut.size().await,
        }
    }
}

#[async_trait]
impl Named for Node {
    async fn name(&self) -> String {
        match self {
            Self::File(file) => file.name().await,
            Self::Folder(folder) => folder.name().await,
            Self::Shortcut(shortcut) => shortcut.name().await,
        }
    }
}

#[async_trait]
impl Render for Node {
    async fn describe(&self) -> String {
        match self {
            Self::File(file) => file.describe().await,
            Self::Folder(folder) => folder.describe().await,
            Self::Shortcut(shortcut) => shortcut.describe().await,
        }
    }

    async fn nested(&self) -> Vec<Node> {
        match self {
            Self::Folder(folder) => folder.nested().await,
            _ => Vec::new(),
        }
    }
}

// -----------------------------------------------------------------------------
// Node - Methods
// -----------------------------------------------------------------------------

impl Node {
    #[must_use]
    pub fn downgrade(&self) -> WeakNode {
        match self {
            Self::File(file) => WeakNode::File(file.downgrade()),
            Self::Folder(folder) => WeakNode::Folder(folder.downgrade()),
            Self::Shortcut(shortcut) => WeakNode::Shortcut(shortcut.downgrade()),
        }
    }

    pub(crate) async fn detach(&self) {
        match self {
            Self::File(file) => file.detach().await,
            Self::Folder(folder) => folder.detach().await,
            Self::Shortcut(shortcut) => shortcut.detach().await,
        }
    }
}

// =============================================================================
// WeakNode
// =============================================================================

/// A non-owning [`Node`].
#[derive(Clone, Debug)]
pub enum WeakNode {
    File(FileWeak),
    Folder(FolderWeak),
    Shortcut(ShortcutWeak),
}

// -----------------------------------------------------------------------------
// WeakNode - Methods
// -----------------------------------------------------------------------------

impl WeakNode {
    /// The node, if any strong handle to it still exists.
    #[must_use]
    pub fn upgrade(&self) -> Option<Node> {
        match self {
            Self::File(file) => file.upgrade().map(Node::File),
            Self::Folder(folder) => folder.upgrade().map(Node::Folder),
            Self::Shortcut(shortcut) => shortcut.upgrade().map(Node::Shortcut),
        }
    }
}
