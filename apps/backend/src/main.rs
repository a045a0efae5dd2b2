#[tokio::main]
async fn main() -> anyhow::Result<()> {
    daily_train_backend::run().await
}
