//! Entrypoint.

use clap::Parser;
use config::{Command, Opts};
use dotenvy::dotenv;
use eyre::WrapErr;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use units::Wei;

fn main() -> eyre::Result<()> {
    if let Ok(custom_env_file) = std::env::var("ENV_FILE") {
        dotenvy::from_filename(custom_env_file)?;
    } else {
        // Try the default .env file, and ignore if it doesn't exist.
        dotenv().ok();
    }

    let opts = Opts::parse();
    let filter = EnvFilter::try_new(&opts.log_level)
        .wrap_err_with(|| format!("invalid log level {:?}", opts.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    debug!(command = ?opts.command, "running conversion");

    let (input, output) = run(&opts.command)?;
    if opts.json {
        println!("{}", serde_json::json!({ "input": input, "output": output }));
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Runs one conversion, returning the input it was given and its result.
fn run(command: &Command) -> eyre::Result<(&str, String)> {
    match command {
        Command::Parse { value, gwei: false } => {
            let wei = units::parse_wei(value).wrap_err_with(|| format!("cannot parse {value:?}"))?;
            Ok((value.as_str(), wei.to_string()))
        }
        Command::Parse { value, gwei: true } => {
            let gwei =
                units::parse_gwei(value).wrap_err_with(|| format!("cannot parse {value:?}"))?;
            Ok((value.as_str(), gwei.to_string()))
        }
        Command::Format { amount, standard, from_gwei: false } => {
            let wei = read_amount(amount)?;
            Ok((amount.as_str(), units::format_wei(Some(&wei), *standard)))
        }
        Command::Format { amount, standard, from_gwei: true } => {
            let gwei: u64 =
                amount.parse().wrap_err_with(|| format!("{amount:?} is not a GWei amount"))?;
            Ok((amount.as_str(), units::format_gwei(gwei, *standard)))
        }
        Command::Gwei { amount } => {
            let wei = read_amount(amount)?;
            Ok((amount.as_str(), units::format_wei_as_gwei(Some(&wei))))
        }
        Command::Multiplier { unit } => {
            let multiplier = units::unit_multiplier(unit)?;
            Ok((unit.as_str(), multiplier.to_string()))
        }
    }
}

/// Reads a plain base-10 number of Wei.
fn read_amount(amount: &str) -> eyre::Result<Wei> {
    amount.parse().wrap_err_with(|| format!("{amount:?} is not a Wei amount"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_each_command() {
        let parse = Command::Parse { value: "21 gwei".to_owned(), gwei: false };
        assert_eq!(run(&parse).unwrap(), ("21 gwei", "21000000000".to_owned()));

        let parse_gwei = Command::Parse { value: "1.5 ether".to_owned(), gwei: true };
        assert_eq!(run(&parse_gwei).unwrap().1, "1500000000");

        let format =
            Command::Format { amount: "1000000000000".to_owned(), standard: true, from_gwei: false };
        assert_eq!(run(&format).unwrap().1, "1000 GWei");

        let from_gwei =
            Command::Format { amount: "1000000".to_owned(), standard: true, from_gwei: true };
        assert_eq!(run(&from_gwei).unwrap().1, "0.001 Ether");

        let gwei = Command::Gwei { amount: "999000050000".to_owned() };
        assert_eq!(run(&gwei).unwrap().1, "999.00005 GWei");

        let multiplier = Command::Multiplier { unit: "finney".to_owned() };
        assert_eq!(run(&multiplier).unwrap().1, "1000000000000000");
    }

    #[test]
    fn reports_bad_input() {
        let err = run(&Command::Parse { value: "0.1 wei".to_owned(), gwei: false }).unwrap_err();
        assert_eq!(err.to_string(), "cannot parse \"0.1 wei\"");
        assert!(format!("{err:?}").contains("fractional number of Wei"));

        assert!(run(&Command::Gwei { amount: "1 ether".to_owned() }).is_err());
        assert!(run(&Command::Multiplier { unit: "foo".to_owned() }).is_err());
    }
}
