use async_trait::async_trait;

use crate::Folder;

// Child

#[async_trait]
pub trait Child {
    async fn parent(&self) -> Option<Folder>;

    /// Whether the chain of parents still ends at a partition.
    async fn is_attached(&self) -> bool {
        match self.parent().await {
            Some(parent) => parent.is_attached().await,
            _ => false,
        }
    }
}
