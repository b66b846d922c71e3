use futures::executor::block_on;
use log::info;
use memtree::{
    Census,
    Located,
    Measured,
    Partition,
    Render,
    Result,
};
use miette::Report;

fn main() -> miette::Result<()> {
    env_logger::init();

    block_on(run())?;

    Ok(())
}

async fn run() -> Result<()> {
    let partition = Partition::instance();
    let r2 = partition.create_folder("r2").await?;
    let f1 = partition.create_file("f1", 899).await?;
    let f2 = r2.create_file("f2", 1234).await?;
    let _s1 = partition.create_shortcut("s1", f2.clone()).await?;

    println!("{} bytes", partition.size().await);
    println!("{}", f1.path().await.display());
    println!("{}", f2.path().await.display());
    println!("{}", partition.path().await.display());
    print!("{}", partition.render().await);
    println!("{}", Census::take());

    info!("attempting operations expected to fail");

    report(partition.create_folder("R2").await);
    report(partition.create_file("F1", 899).await);
    report(partition.create_file("", 899).await);
    report(r2.create_file("f3", 12_340).await);
    report(r2.remove("f4").await);

    r2.remove("f2").await?;
    drop(f2);

    println!("{} bytes", partition.size().await);
    print!("{}", partition.render().await);
    println!("{}", Census::take());

    Ok(())
}

fn report<T>(result: Result<T>) {
    if let Err(err) = result {
        println!("{:?}", Report::new(err));
    }
}
