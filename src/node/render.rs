use async_trait::async_trait;

use super::{
    named::Named,
    Node,
};

const INDENT: &str = "  ";

// Render

/// Text display of an element and everything below it, one line per element.
///
/// Implementors provide the type-specific parts through [`Render::describe`]
/// and [`Render::nested`]; the layout itself is fixed by [`Render::render_at`].
#[async_trait]
pub trait Render: Named + Sync {
    /// Text following the element's name on its line.
    async fn describe(&self) -> String;

    /// Elements rendered beneath this one, one level deeper.
    async fn nested(&self) -> Vec<Node> {
        Vec::new()
    }

    async fn render(&self) -> String {
        self.render_at(0).await
    }

    async fn render_at(&self, depth: usize) -> String {
        let name = self.name().await;
        let description = self.describe().await;
        let mut out = format!("{}{name}{description}\n", INDENT.repeat(depth));

        for node in self.nested().await {
            out.push_str(&node.render_at(depth + 1).await);
        }

        out
    }
}

#[cfg(test)]
mod render_tests {
    use super::Render;
    use crate::{
        Partition,
        PartitionOptions,
    };

    #[tokio::test]
    async fn render_tree() {
        let partition = Partition::new(PartitionOptions::default()).unwrap();
        let r2 = partition.create_folder("r2").await.unwrap();
        let _f1 = partition.create_file("f1", 899).await.unwrap();
        let f2 = r2.create_file("f2", 1234).await.unwrap();
        let _s1 = partition.create_shortcut("s1", f2).await.unwrap();

        assert_eq!(
            partition.render().await,
            "/ [partition, 2133/10000 bytes]\n\
             \x20 f1 (899 bytes)\n\
             \x20 r2/ (1234 bytes)\n\
             \x20   f2 (1234 bytes)\n\
             \x20 s1 -> /r2/f2\n"
        );
    }

    #[tokio::test]
    async fn render_dangling_shortcut() {
        let partition = Partition::new(PartitionOptions::default()).unwrap();
        let file = partition.create_file("f1", 1).await.unwrap();
        let shortcut = partition.create_shortcut("s1", file).await.unwrap();

        partition.remove("F1").await.unwrap();

        assert_eq!(shortcut.render().await, "s1 -> nonexistent\n");
    }
}
