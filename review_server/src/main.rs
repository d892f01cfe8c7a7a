#[tokio::main]
async fn main() -> std::io::Result<()> {
    review_server::run_with_config().await
}
