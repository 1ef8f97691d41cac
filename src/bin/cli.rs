//! Boxer CLI Client
//!
//! Interactive shell that sends each typed line to a Boxer server.

use std::io::{self, BufRead, Write};

use boxer::network::Client;
use boxer::protocol::Response;
use boxer::Config;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Boxer CLI
#[derive(Parser, Debug)]
#[command(name = "boxer-cli")]
#[command(about = "Interactive client for the Boxer key-value store")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:6380")]
    address: String,

    /// Read timeout in milliseconds (0 = none)
    #[arg(long, default_value = "5000")]
    read_timeout_ms: u64,

    /// Write timeout in milliseconds (0 = none)
    #[arg(long, default_value = "5000")]
    write_timeout_ms: u64,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,boxer=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .server_addr(&args.address)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    let client = Client::from_config(&config);
    if let Err(e) = repl(&client) {
        tracing::error!("Input error: {}", e);
        std::process::exit(1);
    }
}

/// Read lines until `.exit` or end of input
fn repl(client: &Client) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!("'.exit' to quit");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let line = line.trim();
        if line == ".exit" {
            return Ok(());
        }

        let parts: Vec<&str> = line.split(' ').collect();
        match client.send(&parts) {
            Ok(reply) => match Response::parse(&reply) {
                Ok(response) => println!("{}\n", response),
                Err(_) => println!("{}\n", reply.trim_end()),
            },
            Err(e) => tracing::warn!("Request to {} failed: {}", client.addr(), e),
        }
    }
}
