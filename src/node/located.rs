use std::path::PathBuf;

use async_trait::async_trait;

use super::{
    child::Child,
    named::Named,
};

// Located

#[async_trait]
pub trait Located {
    async fn path(&self) -> PathBuf;
}

// Located - Blanket Implementation

#[async_trait]
impl<N> Located for N
where
    N: Child + Named + Sync,
{
    async fn path(&self) -> PathBuf {
        match self.parent().await {
            Some(parent) => parent.path().await.join(self.name().await),
            _ => PathBuf::from(self.name().await),
        }
    }
}
