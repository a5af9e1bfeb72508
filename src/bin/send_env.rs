//! Environment Forwarder Binary
//!
//! One-shot client: POSTs prefixed environment variables as JSON to an
//! instrumentation endpoint, prints the reported log lines and signals,
//! and exits 1 on a "fail" verdict (2 if the response is malformed).

use clap::Parser;
use logtail::client::EnvForwarder;
use tracing::error;

#[derive(Parser)]
#[command(name = "send-env")]
#[command(about = "Send prefixed environment variables over HTTP/JSON and map the verdict to an exit code")]
#[command(version)]
struct Args {
    /// Endpoint URL, e.g. http://server:8000/
    url: String,

    /// Environment variable name prefix to forward
    #[arg(long, default_value = "CODE_")]
    prefix: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(if args.verbose {
            "logtail=debug,info"
        } else {
            "logtail=info,warn,error"
        })
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if !args.url.starts_with("http") {
        error!("URL must start with http, got {:?}", args.url);
        std::process::exit(2);
    }

    let forwarder = EnvForwarder::new(args.url, args.prefix);
    match forwarder.run().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Forwarding failed: {}", e);
            std::process::exit(2);
        }
    }
}
