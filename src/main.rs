use adaptica_gateway::config::Args;
use adaptica_gateway::rate_limit::RateLimiter;
use adaptica_gateway::router;
use adaptica_gateway::state::AppState;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

// this is main async function with tokio
#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();

    // creating shared state
    let state = Arc::new(AppState {
        client: reqwest::Client::new(),
        webhook_url: args.webhook_url.clone(),
        upstream_timeout: Duration::from_secs(args.upstream_timeout),
        rate_limiter: RateLimiter::new(args.rate_limit, (args.rate_window * 1000) as i64),
    });

    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("Test-call gateway running on http://localhost:{}", args.port);
    println!("Forwarding to webhook at {}", args.webhook_url);
    println!(
        "Rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );

    // connect info gives the handlers the peer address for rate limiting
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
