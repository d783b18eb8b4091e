use anyhow::{bail, Result};
use std::env;
use std::process;

// Use library instead of local modules
use poll_tally::{compute_votes, is_well_formed, TallyReport};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("check") => run_check(&args[1..]),
        Some(_) => run_tally(&args),
        None => {
            print_usage();
            process::exit(64);
        }
    }
}

fn run_tally(args: &[String]) -> Result<()> {
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    if positional.len() != 2 {
        print_usage();
        bail!("expected <PREDICTIONS> <PARTY>, got {} arguments", positional.len());
    }

    let predictions = positional[0].as_str();
    let party = parse_party(positional[1])?;

    let result = compute_votes(predictions, party);

    if json {
        let report = TallyReport::from_result(predictions, party, result);
        println!("{}", report.to_json()?);
    } else {
        match &result {
            Ok(total) => {
                println!("✓ Tally complete");
                println!("  Party '{}': {} votes", party, total);
            }
            Err(err) => {
                eprintln!("❌ Tally failed: {}", err);
            }
        }
    }

    // Exit code mirrors the result code (0/1/2/3)
    process::exit(result.map_or_else(|err| err.code(), |_| 0));
}

fn run_check(args: &[String]) -> Result<()> {
    let predictions = match args.first() {
        Some(p) => p.as_str(),
        None => bail!("check needs a <PREDICTIONS> argument (use \"\" for the empty string)"),
    };

    if is_well_formed(predictions) {
        println!("✓ Well-formed prediction string ({} characters)", predictions.len());
        Ok(())
    } else {
        eprintln!("❌ Not a well-formed prediction string");
        process::exit(1);
    }
}

/// The party argument must be exactly one character; validity of that
/// character (letter or not) is the tally's job, not an argument error.
fn parse_party(arg: &str) -> Result<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("party must be a single character, got {:?}", arg),
    }
}

fn print_usage() {
    eprintln!("poll-tally v{}", poll_tally::VERSION);
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  poll-tally <PREDICTIONS> <PARTY> [--json]   tally votes for one party");
    eprintln!("  poll-tally check <PREDICTIONS>              validate syntax only");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  poll-tally R40TXD54CAr6MS R");
    eprintln!();
    eprintln!("Exit code is the result code: 0 success, 1 invalid syntax,");
    eprintln!("2 zero-vote record, 3 invalid party.");
}
