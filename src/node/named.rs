use async_trait::async_trait;

// Named

#[async_trait]
pub trait Named {
    /// The name as given at creation, in its original case.
    async fn name(&self) -> String;
}
