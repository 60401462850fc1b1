use std::process;

use anyhow::Context;
use docopt::Docopt;
use human_panic::setup_panic;
use log::debug;
use serde_derive::Deserialize;

use traindelay::{lookup, Config, HspClient, JourneyRequest, Outcome};

const USAGE: &str = "
Report the scheduled and actual arrival of a past train journey.

Usage:
  traindelay [options] <journey>...
  traindelay (-h | --help)
  traindelay --version

The journey is: <origin> <destination> <HHMM> <YYYY-MM-DD>
for example:    traindelay yrk shf 1731 2020-10-09

Credentials for the HSP API are read from DAWIN_EMAIL and DAWIN_PASS.

Options:
  -h --help           Show this screen.
  --version           Show version.
  --window=<minutes>  Width of the departure search window [default: 60].
";

#[derive(Debug, Deserialize)]
struct Args {
    arg_journey: Vec<String>,
    flag_window: u32,
}

#[tokio::main]
async fn main() {
    setup_panic!();
    env_logger::init();

    let args: Args = Docopt::new(USAGE)
        .and_then(|d| {
            d.version(Some(env!("CARGO_PKG_VERSION").to_string()))
                .deserialize()
        })
        .unwrap_or_else(|e| e.exit());
    debug!("{:?}", args);

    match run(args).await {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => {
            eprintln!("traindelay: {:#}", e);
            let code = e
                .downcast_ref::<traindelay::Error>()
                .map(traindelay::Error::exit_code)
                .unwrap_or(1);
            process::exit(code);
        }
    }
}

async fn run(args: Args) -> anyhow::Result<Outcome> {
    let config = Config::from_env()
        .context("reading HSP credentials")?
        .with_window(args.flag_window)?;
    let request = JourneyRequest::parse(args.arg_journey.as_slice())?;
    let client = HspClient::new(config.clone()).context("building HTTP client")?;

    let outcome = lookup(&client, &request, config.window_minutes).await?;
    Ok(outcome)
}
