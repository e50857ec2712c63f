use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    verdict::cli::run().await
}
