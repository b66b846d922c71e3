use memtree::{
    Count,
    Folder,
    Error,
    Measured,
    Node,
    Partition,
    PartitionOptions,
    Render,
};

#[tokio::test]
async fn empty_partition() -> anyhow::Result<()> {
    let partition = Partition::new(PartitionOptions::default())?;

    assert_eq!(partition.count().await, 0);
    assert_eq!(partition.size().await, 0);

    Ok(())
}

#[tokio::test]
async fn capacity_overflow() -> anyhow::Result<()> {
    let partition = Partition::new(PartitionOptions::create("/", 1000))?;
    let docs = partition.create_folder("docs").await?;

    docs.create_file("a", 600).await?;

    let result = docs.create_file("b", 401).await;

    assert!(matches!(result, Err(Error::CapacityOverflow { .. })));
    assert!(docs.create_file("b", 400).await.is_ok());

    Ok(())
}

#[tokio::test]
async fn case_insensitive_siblings() -> anyhow::Result<()> {
    let partition = Partition::new(PartitionOptions::default())?;

    partition.create_file("readme", 10).await?;

    let result = partition.create_file("README", 10).await;

    assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    assert_eq!(partition.count_files().await, 1);

    Ok(())
}

#[tokio::test]
async fn remove_and_re_add() -> anyhow::Result<()> {
    let partition = Partition::new(PartitionOptions::default())?;
    let a = partition.create_folder("a").await?;
    let b = a.create_folder("b").await?;

    b.create_file("f", 300).await?;

    assert_eq!(partition.size().await, 300);

    b.remove("f").await?;

    assert_eq!(a.size().await, 0);
    assert_eq!(partition.size().await, 0);

    b.create_file("F", 500).await?;

    assert_eq!(a.size().await, 500);
    assert_eq!(partition.size().await, 500);
    assert_eq!(partition.remaining().await, 9500);

    Ok(())
}

#[tokio::test]
async fn dangling_shortcut() -> anyhow::Result<()> {
    let partition = Partition::new(PartitionOptions::default())?;
    let r2 = partition.create_folder("r2").await?;
    let f2 = r2.create_file("f2", 1234).await?;
    let s1 = partition.create_shortcut("s1", f2).await?;

    assert!(matches!(s1.target().await, Some(Node::File(_))));

    r2.remove("f2").await?;

    assert_eq!(s1.target().await, None);
    assert_eq!(s1.render().await, "s1 -> nonexistent\n");
    assert!(matches!(
        partition.get("s1").await?,
        Some(Node::Shortcut(_))
    ));

    Ok(())
}

#[tokio::test]
async fn render_after_changes() -> anyhow::Result<()> {
    let partition = Partition::new(PartitionOptions::create("C", 500))?;
    let music = partition.create_folder("Music").await?;

    music.create_file("song", 120).await?;
    partition.create_file("boot", 30).await?;
    partition.create_shortcut("fav", music.clone()).await?;

    assert_eq!(
        partition.render().await,
        "C [partition, 150/500 bytes]\n\
         \x20 boot (30 bytes)\n\
         \x20 fav -> C/Music\n\
         \x20 Music/ (120 bytes)\n\
         \x20   song (120 bytes)\n"
    );

    Ok(())
}

async fn fill(root: Folder, writers: usize) -> anyhow::Result<usize> {
    let mut tasks = Vec::new();

    for i in 0..writers {
        let root = root.clone();

        tasks.push(tokio::spawn(async move {
            root.create_file(&format!("f{i}"), 10).await.is_ok()
        }));
    }

    for _ in 0..writers {
        let root = root.clone();

        tasks.push(tokio::spawn(async move {
            root.size().await;

            false
        }));
    }

    let mut created = 0;

    for task in tasks {
        if task.await? {
            created += 1;
        }
    }

    Ok(created)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_creates_respect_capacity() -> anyhow::Result<()> {
    for _ in 0..100 {
        let partition = Partition::new(PartitionOptions::create("/", 100))?;
        let created = fill(partition.root(), 32).await?;

        assert_eq!(created, 10);
        assert_eq!(partition.count_files().await, 10);
        assert_eq!(partition.size().await, 100);
        assert_eq!(partition.remaining().await, 0);
    }

    Ok(())
}
