#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sermon_meta_server::start().await
}
