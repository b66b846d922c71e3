use async_trait::async_trait;

// Count

#[async_trait]
pub trait Count {
    async fn count(&self) -> usize;

    async fn count_files(&self) -> usize;

    async fn count_folders(&self) -> usize;

    async fn count_shortcuts(&self) -> usize;
}
