use clap::{Parser, ValueEnum};
use number_plate_generator::{DateCheck, GeneratorConfig, PlateGenerator, SuffixMode};
use tracing_subscriber::EnvFilter;

/// Requests used when none are passed on the command line.
const DEMO_REQUESTS: [&str; 3] = ["YC:04/07/2019", "LT:23/01/2003", "FF:30/05/2032"];

#[derive(Parser)]
#[command(name = "number-plate-generator")]
#[command(about = "Generates vehicle number plates from a regional code and registration date")]
#[command(version)]
struct Args {
    /// Plates to generate, as CODE:dd/mm/yyyy
    #[arg(value_parser = parse_request)]
    requests: Vec<Request>,

    /// Seed for reproducible suffixes
    #[arg(long, env = "PLATEGEN_SEED")]
    seed: Option<u64>,

    /// How the three suffix letters are drawn
    #[arg(long, value_enum, default_value_t = SuffixArg::Consecutive, env = "PLATEGEN_SUFFIX_MODE")]
    suffix_mode: SuffixArg,

    /// Reject dates that are not real calendar dates
    #[arg(long, env = "PLATEGEN_STRICT_DATES")]
    strict_dates: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SuffixArg {
    Consecutive,
    Independent,
}

impl From<SuffixArg> for SuffixMode {
    fn from(arg: SuffixArg) -> Self {
        match arg {
            SuffixArg::Consecutive => SuffixMode::Consecutive,
            SuffixArg::Independent => SuffixMode::Independent,
        }
    }
}

#[derive(Debug, Clone)]
struct Request {
    code: String,
    date: String,
}

fn parse_request(value: &str) -> Result<Request, String> {
    let (code, date) = value
        .split_once(':')
        .ok_or_else(|| format!("expected CODE:dd/mm/yyyy, got '{value}'"))?;

    Ok(Request {
        code: code.to_string(),
        date: date.to_string(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = GeneratorConfig {
        suffix_mode: args.suffix_mode.into(),
        date_check: if args.strict_dates {
            DateCheck::Strict
        } else {
            DateCheck::Lenient
        },
    };

    let mut generator = match args.seed {
        Some(seed) => PlateGenerator::seeded(config, seed),
        None => PlateGenerator::new(config),
    };

    let requests = if args.requests.is_empty() {
        DEMO_REQUESTS
            .into_iter()
            .map(parse_request)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        args.requests
    };

    for request in &requests {
        match generator.generate_plate(&request.code, &request.date) {
            Ok(plate) => println!(
                "Generated number plate for {}:{} -> {}",
                request.code, request.date, plate
            ),
            Err(err) => println!(
                "Generated number plate for {}:{} -> none ({})",
                request.code, request.date, err
            ),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        let request = parse_request("YC:04/07/2019").unwrap();
        insta::assert_debug_snapshot!(request, @r#"
        Request {
            code: "YC",
            date: "04/07/2019",
        }
        "#);

        // Validation is left to the generator
        let request = parse_request("y1:").unwrap();
        assert_eq!(request.code, "y1");
        assert_eq!(request.date, "");

        let result = parse_request("YC 04/07/2019");
        insta::assert_snapshot!(result.unwrap_err(), @"expected CODE:dd/mm/yyyy, got 'YC 04/07/2019'");
    }

    #[test]
    fn test_demo_requests_parse() {
        for request in DEMO_REQUESTS {
            assert!(parse_request(request).is_ok(), "{request}");
        }
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from([
            "number-plate-generator",
            "--seed",
            "7",
            "--suffix-mode",
            "independent",
            "--strict-dates",
            "YC:04/07/2019",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(SuffixMode::from(args.suffix_mode), SuffixMode::Independent);
        assert!(args.strict_dates);
        assert_eq!(args.requests.len(), 1);

        assert!(Args::try_parse_from(["number-plate-generator", "bogus"]).is_err());
    }
}
