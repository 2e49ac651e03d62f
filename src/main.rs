use notary::application::NotaryContract;
use notary::config::Config;
use notary::handlers::{handle_request, open_store};
use json::object;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("notary=info".parse()?))
        .init();

    let config = Config::from_env()?;
    info!(
        db_path = %config.db_path,
        min_document_hash_len = config.policy.min_document_hash_len,
        "starting notary"
    );

    let store = open_store(&config.db_path)?;
    info!(records = store.count().unwrap_or(0), "record store ready");
    let contract = NotaryContract::new(store, config.policy);

    let client = hyper::Client::new();
    let server_addr = config.rollup_server_url;
    info!(%server_addr, "connected to rollup server");

    let mut status = "accept";
    loop {
        let response = object! {"status" => status};
        let request = hyper::Request::builder()
            .method(hyper::Method::POST)
            .header(hyper::header::CONTENT_TYPE, "application/json")
            .uri(format!("{}/finish", &server_addr))
            .body(hyper::Body::from(response.dump()))?;
        let response = client.request(request).await?;

        if response.status() == hyper::StatusCode::ACCEPTED {
            info!("no pending rollup request, trying again");
            continue;
        }

        let body = hyper::body::to_bytes(response).await?;
        let req = json::parse(std::str::from_utf8(&body)?)?;

        status = match handle_request(&client, &server_addr, &contract, req).await {
            Ok(status) => status,
            Err(e) => {
                error!(error = %e, "failed to process rollup request");
                "reject"
            }
        };
    }
}
