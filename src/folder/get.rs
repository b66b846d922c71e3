use std::path::{
    Component,
    Path,
};

use crate::{
    Child,
    Error,
    Folder,
    Named,
    Node,
    Result,
};

// =============================================================================
// Folder - Get
// =============================================================================

impl Folder {
    /// Looks up a node by path, relative to this folder or, for absolute
    /// paths, to the top of its tree.
    ///
    /// Shortcuts met before the final component are followed when they link to
    /// a folder. Returns `Ok(None)` when any component does not exist or a
    /// followed shortcut is dangling.
    pub async fn get<P>(&self, path: P) -> Result<Option<Node>>
    where
        P: AsRef<Path> + Send,
    {
        let mut current = Node::Folder(self.clone());

        for component in path.as_ref().components() {
            let folder = match Self::enter(current).await? {
                Some(folder) => folder,
                _ => return Ok(None),
            };

            current = match component {
                Component::CurDir => Node::Folder(folder),
                Component::Prefix(_) => return Err(Error::UnexpectedPrefix),
                Component::RootDir => Node::Folder(folder.top().await),
                Component::ParentDir => match folder.parent().await {
                    Some(parent) => Node::Folder(parent),
                    _ => return Err(Error::UnexpectedOrphan),
                },
                Component::Normal(name) => match folder.get_child(&name.to_string_lossy()).await {
                    Some(node) => node,
                    _ => return Ok(None),
                },
            };
        }

        Ok(Some(current))
    }

    /// The folder a path continues through from `node`.
    async fn enter(node: Node) -> Result<Option<Self>> {
        match node {
            Node::Folder(folder) => Ok(Some(folder)),
            Node::File(file) => Err(Error::UnexpectedFile {
                name: file.name().await,
            }),
            Node::Shortcut(shortcut) => match shortcut.target().await {
                Some(Node::Folder(folder)) => Ok(Some(folder)),
                Some(_) => Err(Error::UnexpectedFile {
                    name: shortcut.name().await,
                }),
                _ => Ok(None),
            },
        }
    }
}

#[cfg(test)]
mod get_tests {
    use crate::{
        Error,
        Node,
        Partition,
        PartitionOptions,
    };

    #[tokio::test]
    async fn get_nested() {
        let partition = Partition::new(PartitionOptions::default()).unwrap();
        let r2 = partition.create_folder("r2").await.unwrap();
        let f2 = r2.create_file("f2", 1234).await.unwrap();

        assert_eq!(
            partition.get("/r2/f2").await.unwrap(),
            Some(Node::File(f2.clone()))
        );
        assert_eq!(
            partition.get("R2/F2").await.unwrap(),
            Some(Node::File(f2.clone()))
        );
        assert_eq!(
            r2.get("../r2/./f2").await.unwrap(),
            Some(Node::File(f2))
        );
        assert_eq!(
            r2.get("/").await.unwrap(),
            Some(Node::Folder(partition.root()))
        );
        assert_eq!(partition.get("r2/f3").await.unwrap(), None);
        assert_eq!(partition.get("r3/f3").await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_errors() {
        let partition = Partition::new(PartitionOptions::default()).unwrap();

        partition.create_file("f1", 1).await.unwrap();

        assert_eq!(
            partition.get("f1/f2").await.unwrap_err(),
            Error::UnexpectedFile {
                name: String::from("f1")
            }
        );
        assert_eq!(
            partition.get("..").await.unwrap_err(),
            Error::UnexpectedOrphan
        );
    }

    #[tokio::test]
    async fn get_through_shortcut() {
        let partition = Partition::new(PartitionOptions::default()).unwrap();
        let r2 = partition.create_folder("r2").await.unwrap();
        let f2 = r2.create_file("f2", 1).await.unwrap();
        let shortcut = partition
            .create_shortcut("s2", r2.clone())
            .await
            .unwrap();

        assert_eq!(
            partition.get("s2").await.unwrap(),
            Some(Node::Shortcut(shortcut))
        );
        assert_eq!(
            partition.get("s2/f2").await.unwrap(),
            Some(Node::File(f2))
        );

        partition.remove("r2").await.unwrap();

        assert_eq!(partition.get("s2/f2").await.unwrap(), None);
    }
}
