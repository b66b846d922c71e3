use async_trait::async_trait;

pub type Size = u64;

// Measured

#[async_trait]
pub trait Measured {
    /// Total bytes held by the element and everything it owns.
    async fn size(&self) -> Size;
}
