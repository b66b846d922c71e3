use memtree::{
    live,
    Census,
    File,
    Folder,
    Partition,
    PartitionOptions,
    Shortcut,
};

// Instance counters are process-wide, so every assertion on them lives in
// this single test.

#[tokio::test]
async fn instance_counts() -> anyhow::Result<()> {
    assert_eq!(Census::take(), Census::default());

    let partition = Partition::new(PartitionOptions::default())?;
    let r2 = partition.create_folder("r2").await?;
    let f1 = partition.create_file("f1", 899).await?;
    let f2 = r2.create_file("f2", 1234).await?;
    let s1 = partition.create_shortcut("s1", f2.clone()).await?;

    assert_eq!(
        Census::take(),
        Census {
            files: 2,
            folders: 2,
            partitions: 1,
            shortcuts: 1,
        }
    );
    assert_eq!(Census::take().elements(), 5);

    partition.remove("r2").await?;
    drop(r2);

    assert_eq!(live::<Folder>(), 1);
    assert_eq!(live::<File>(), 2);

    drop(f2);

    assert_eq!(live::<File>(), 1);
    assert_eq!(s1.target().await, None);

    drop((f1, s1));

    assert_eq!(live::<Shortcut>(), 1);

    drop(partition);

    assert_eq!(Census::take(), Census::default());
    assert_eq!(live::<Partition>(), 0);

    Ok(())
}
