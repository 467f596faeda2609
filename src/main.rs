#[tokio::main]
async fn main() {
    if let Err(err) = studio_site::run().await {
        eprintln!("studio-site failed to start: {err}");
        std::process::exit(1);
    }
}
