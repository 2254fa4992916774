use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "adaptica-gateway")]
#[command(about = "Test-call relay for the Adaptica landing page")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Automation webhook that places the outbound call
    #[arg(
        short,
        long,
        default_value = "https://hook.eu2.make.com/adaptica-test-call"
    )]
    pub webhook_url: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 2)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 300)]
    pub rate_window: u64,

    // Upstream request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub upstream_timeout: u64,
}
