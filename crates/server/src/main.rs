#[tokio::main]
async fn main() -> anyhow::Result<()> {
    supportrag_server::start().await
}
