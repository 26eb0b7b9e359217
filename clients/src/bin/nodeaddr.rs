//! `nodeaddr` — inspect and convert 40-bit node addresses.
//!
//! **Usage:**
//! ```text
//! nodeaddr [--json] [--debug] inspect <ADDRESS>
//! nodeaddr [--json] [--debug] from-int <INTEGER>
//! nodeaddr [--json] [--debug] decode [--lenient] <WIRE_HEX>
//! ```
//!
//! Every command prints the canonical hex form, the integer value, the
//! five wire bytes, and whether the address is reserved. Log verbosity
//! follows `RUST_LOG`, defaulting to `nodeaddr=info`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use node_address::{Address, ADDRESS_LENGTH};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Inspect and convert 40-bit node addresses.
#[derive(Parser)]
#[command(name = "nodeaddr", about = "Inspect and convert 40-bit node addresses")]
struct Cli {
    /// Print a JSON object instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an address from hex text (1 to 10 digits).
    Inspect {
        /// Address in hex, e.g. `89e92ceee5`.
        address: String,
    },
    /// Build an address from an integer; bits above 40 are dropped.
    FromInt {
        /// Decimal, or hex with a `0x` prefix.
        value: String,
    },
    /// Decode an address from hex-encoded wire bytes.
    Decode {
        /// At least five bytes as hex, e.g. `89e92ceee5`.
        wire: String,

        /// Map input shorter than five bytes to the null address.
        #[arg(long)]
        lenient: bool,
    },
}

/// Everything the tool reports about one address.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct Report {
    address: Address,
    integer: u64,
    wire: String,
    reserved: bool,
}

impl Report {
    fn new(address: Address) -> Self {
        Self {
            address,
            integer: address.to_u64(),
            wire: hex::encode(address.to_bytes()),
            reserved: address.is_reserved(),
        }
    }

    fn render_text(&self) -> String {
        format!(
            "address:  {}\ninteger:  {}\nwire:     {}\nreserved: {}",
            self.address, self.integer, self.wire, self.reserved
        )
    }
}

fn parse_integer(s: &str) -> Result<u64> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => s.parse::<u64>(),
    };
    parsed.with_context(|| format!("invalid integer '{s}'"))
}

fn run(command: &Command) -> Result<Address> {
    match command {
        Command::Inspect { address } => {
            debug!(input = %address, "parsing address text");
            address
                .parse::<Address>()
                .with_context(|| format!("invalid address '{address}'"))
        }
        Command::FromInt { value } => {
            let raw = parse_integer(value)?;
            let address = Address::new(raw);
            if raw != address.to_u64() {
                warn!(raw, kept = address.to_u64(), "bits above 40 dropped");
            }
            Ok(address)
        }
        Command::Decode { wire, lenient } => {
            let bytes =
                hex::decode(wire.trim()).with_context(|| format!("invalid wire hex '{wire}'"))?;
            debug!(len = bytes.len(), "decoding wire bytes");
            if bytes.len() > ADDRESS_LENGTH {
                debug!(extra = bytes.len() - ADDRESS_LENGTH, "ignoring trailing bytes");
            }
            match Address::decode(&bytes) {
                Ok(address) => Ok(address),
                Err(err) if *lenient => {
                    warn!(%err, "using null address");
                    Ok(Address::NULL)
                }
                Err(err) => Err(anyhow!(err)).context("cannot decode address"),
            }
        }
    }
}

fn init_logging(debug: bool) -> Result<()> {
    let default = if debug { "nodeaddr=debug" } else { "nodeaddr=info" };
    let filter = EnvFilter::builder()
        .with_default_directive(default.parse()?)
        .from_env()?;
    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let address = run(&cli.command)?;
    let report = Report::new(address);
    if report.reserved {
        warn!(%address, "address is reserved and not a valid peer identity");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect() {
        let cmd = Command::Inspect {
            address: "89E92CEEE5".into(),
        };
        assert_eq!(run(&cmd).unwrap(), Address::new(0x89e92ceee5));
    }

    #[test]
    fn test_inspect_rejects_bad_text() {
        let cmd = Command::Inspect {
            address: "not-hex".into(),
        };
        assert!(run(&cmd).is_err());
    }

    #[test]
    fn test_from_int_masks() {
        let cmd = Command::FromInt {
            value: "0x10000000001".into(),
        };
        assert_eq!(run(&cmd).unwrap(), Address::new(1));
        let cmd = Command::FromInt {
            value: "255".into(),
        };
        assert_eq!(run(&cmd).unwrap(), Address::new(0xff));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("0xff").unwrap(), 255);
        assert_eq!(parse_integer("0XFF").unwrap(), 255);
        assert_eq!(parse_integer("42").unwrap(), 42);
        assert!(parse_integer("0xzz").is_err());
        assert!(parse_integer("-1").is_err());
    }

    #[test]
    fn test_decode_strict_and_lenient() {
        let strict = Command::Decode {
            wire: "0102".into(),
            lenient: false,
        };
        assert!(run(&strict).is_err());

        let lenient = Command::Decode {
            wire: "0102".into(),
            lenient: true,
        };
        assert_eq!(run(&lenient).unwrap(), Address::NULL);

        let long = Command::Decode {
            wire: "0102030405ffff".into(),
            lenient: false,
        };
        assert_eq!(run(&long).unwrap(), Address::new(0x0102030405));
    }

    #[test]
    fn test_report() {
        let report = Report::new(Address::new(0xff00000001));
        assert_eq!(report.wire, "ff00000001");
        assert!(report.reserved);
        assert_eq!(
            report.render_text(),
            "address:  ff00000001\ninteger:  1095216660481\nwire:     ff00000001\nreserved: true"
        );
    }

    #[test]
    fn test_report_json() {
        let report = Report::new(Address::new(0x0123456789));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["address"], "0123456789");
        assert_eq!(json["integer"], 0x0123456789u64);
        assert_eq!(json["wire"], "0123456789");
        assert_eq!(json["reserved"], false);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["nodeaddr", "--json", "decode", "--lenient", "01"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Decode { lenient: true, .. }));
    }
}
