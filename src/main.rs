#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ocvbot_cli::cli::app::run().await
}
