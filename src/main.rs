#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ecotrip::bootstrapper::run().await
}
