use std::io::Write;

use clap::Parser;
use load_test::send_request;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Sends one graph to the shortest-path server and prints the answer.
#[derive(Debug, Parser)]
#[command(name = "bf_client", version)]
struct Args {
    /// Server address.
    #[arg(long, env = "BF_ADDR", default_value = "127.0.0.1:8080")]
    addr: String,

    /// Request as `V start src,dest,weight ...`; read from stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    request: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let request = if args.request.is_empty() {
        print!("Enter graph data (V start src1,dest1,weight1 ...): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
        line
    } else {
        args.request.join(" ")
    };

    let response = send_request(&args.addr, &request).await?;
    println!("Server response: {}", response);
    Ok(())
}
