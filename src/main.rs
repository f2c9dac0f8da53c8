//! Entry point for `udp-stamp`.
//!
//! Parses CLI arguments and starts one responder task per configured port.
//! All actual reply work is delegated to library modules; `main.rs` owns only
//! process setup (logging, argument parsing) and the shutdown policy: the
//! first bind or I/O failure on any port ends the whole process with exit
//! status 1.

use clap::Parser;

use udp_stamp::config::{self, ListenerConfig};
use udp_stamp::error::guru_meditation;
use udp_stamp::{PortResponder, SystemClock};

/// UDP daemon replying with the sender's IP and the current UNIX timestamp.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Legacy switch: a bare "DEBUG" token (any case) enables debug output.
    token: Option<String>,

    /// Enable debug output for every receive/send cycle.
    #[arg(long)]
    debug: bool,

    /// Inclusive port interval to listen on (START-END, or a single port).
    #[arg(long, value_parser = config::parse_port_range, default_value = "2600-2610")]
    ports: (u16, u16),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Debug lines go out at info level, so default the filter to info.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let debug = cli.debug || cli.token.as_deref().is_some_and(config::is_debug_token);
    let (port_start, port_end) = cli.ports;
    let config = ListenerConfig::new(port_start, port_end, debug)?;

    // Bind every port before serving so an occupied port is caught at startup.
    let mut responders = Vec::with_capacity(config.port_count());
    for port in config.ports() {
        let responder = match PortResponder::bind(port, config, SystemClock).await {
            Ok(responder) => responder,
            Err(e) => fatal(&e),
        };
        if config.debug {
            log::info!("responder started on port {port}");
        }
        responders.push(responder);
    }

    let mut tasks = tokio::task::JoinSet::new();
    for responder in responders {
        tasks.spawn(responder.run());
    }

    // A responder never finishes cleanly, so the first task to complete has
    // failed; take the whole process down with it (fail-fast, no per-port
    // isolation).
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(never)) => match never {},
            Ok(Err(e)) => fatal(&e),
            Err(e) => fatal(&e),
        }
    }
    Ok(())
}

/// Report `err` through the log sink and end the process.
fn fatal(err: &(dyn std::error::Error + 'static)) -> ! {
    log::error!("{}", guru_meditation(err));
    std::process::exit(1);
}
