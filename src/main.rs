//! formatify - reformat a string into a well-known textual convention.

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatify::{
    EncodeSpaces, LeetPick, LowerCase, Normalizer, PirateConfig, PirateTranslator,
    StripNonDigits, StripNonWordChars, pirate::DEFAULT_ENDPOINT, to_irsa, to_isbn, to_leet_with,
    to_lock_combo, to_morse_code, to_phone, to_ssn, to_url,
};
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "formatify", version, about = "Reformat strings into common conventions")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// US phone number: (AAA) BBB-CCCC or A (BBB) CCC-DDDD
    Phone {
        input: String,
        #[arg(short, long, default_value = "-")]
        delimiter: String,
    },

    /// http(s) URL with an optional subdomain
    Url {
        input: String,
        #[arg(short, long, default_value = "")]
        subdomain: String,
        /// Use https
        #[arg(long)]
        secure: bool,
    },

    /// Social Security Number (9 digits)
    Ssn {
        input: String,
        #[arg(short, long, default_value = "-")]
        delimiter: String,
    },

    /// Lock combination (6 digits)
    LockCombo {
        input: String,
        #[arg(short, long, default_value = "-")]
        delimiter: String,
    },

    /// ISBN-13
    Isbn {
        input: String,
        #[arg(short, long, default_value = "-")]
        delimiter: String,
    },

    /// Morse code
    Morse { input: String },

    /// NATO phonetic alphabet
    Irsa { input: String },

    /// Leet speak
    Leet {
        input: String,
        /// Pick a random candidate instead of the first
        #[arg(long)]
        random: bool,
    },

    /// Pirate speak via the remote translation endpoint
    Pirate {
        input: String,
        #[arg(long, env = "FORMATIFY_PIRATE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Apply cleaning steps in the order lower, digits, word, spaces
    Clean {
        input: String,
        #[arg(long)]
        lower: bool,
        /// Keep only 0-9
        #[arg(long)]
        digits: bool,
        /// Keep only A-Z, a-z, 0-9
        #[arg(long)]
        word: bool,
        /// Encode whitespace runs as %20
        #[arg(long)]
        spaces: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let output = run(cli.command)?;
    println!("{output}");
    Ok(())
}

fn run(command: Command) -> Result<String> {
    debug!("{command:?}");
    let output = match command {
        Command::Phone { input, delimiter } => to_phone(&input, &delimiter)?,
        Command::Url {
            input,
            subdomain,
            secure,
        } => to_url(&input, &subdomain, secure)?,
        Command::Ssn { input, delimiter } => to_ssn(&input, &delimiter)?,
        Command::LockCombo { input, delimiter } => to_lock_combo(&input, &delimiter)?,
        Command::Isbn { input, delimiter } => to_isbn(&input, &delimiter)?,
        Command::Morse { input } => to_morse_code(&input)?,
        Command::Irsa { input } => to_irsa(&input)?,
        Command::Leet { input, random } => {
            let pick = if random { LeetPick::Random } else { LeetPick::First };
            to_leet_with(&input, pick)?
        }
        Command::Pirate { input, endpoint } => {
            PirateTranslator::new(PirateConfig::new(endpoint)).translate(&input)?
        }
        Command::Clean {
            input,
            lower,
            digits,
            word,
            spaces,
        } => {
            let mut builder = Normalizer::builder();
            if lower {
                builder = builder.add_stage(LowerCase);
            }
            if digits {
                builder = builder.add_stage(StripNonDigits);
            }
            if word {
                builder = builder.add_stage(StripNonWordChars);
            }
            if spaces {
                builder = builder.add_stage(EncodeSpaces);
            }
            builder.build().normalize(&input).into_owned()
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::thread::{self, JoinHandle};
    use tiny_http::{Response, Server};

    const ENDPOINT_VAR: &str = "FORMATIFY_PIRATE_ENDPOINT";

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("formatify").chain(args.iter().copied()))?;
        run(cli.command)
    }

    #[test]
    fn phone_with_default_delimiter() {
        assert_eq!(run_args(&["phone", "2155551212"]).unwrap(), "(215) 555-1212");
    }

    #[test]
    fn url_flags() {
        assert_eq!(
            run_args(&["url", "GitHub.com", "-s", "www", "--secure"]).unwrap(),
            "https://www.github.com"
        );
    }

    #[test]
    fn isbn_custom_delimiter() {
        assert_eq!(
            run_args(&["isbn", "6517106483096", "-d", " "]).unwrap(),
            "651 7 10 648309 6"
        );
    }

    #[test]
    fn clean_applies_selected_stages() {
        assert_eq!(
            run_args(&["clean", "Ahoy, Matey 42", "--lower", "--word"]).unwrap(),
            "ahoymatey42"
        );
        assert_eq!(
            run_args(&["clean", "Ahoy Matey", "--spaces"]).unwrap(),
            "Ahoy%20Matey"
        );
    }

    /// Answer one request with `body`; the handle yields the requested path.
    fn serve_once(body: &'static str) -> (String, JoinHandle<String>) {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let handle = thread::spawn(move || {
            let request = server.recv().unwrap();
            let url = request.url().to_string();
            request.respond(Response::from_string(body)).unwrap();
            url
        });
        (format!("http://{addr}/arrpi.php"), handle)
    }

    #[test]
    fn leet_random_picks_a_candidate() {
        for _ in 0..16 {
            let out = run_args(&["leet", "a cool", "--random"]).unwrap();
            assert!(out == "4 kewl " || out == "@ kewl ", "unexpected {out:?}");
        }
        assert_eq!(run_args(&["leet", "a cool"]).unwrap(), "4 kewl ");
    }

    #[test]
    #[serial]
    fn pirate_endpoint_flag() {
        let (endpoint, server) = serve_once("Arr, ahoy");
        let out = run_args(&["pirate", "hello there", "--endpoint", endpoint.as_str()]).unwrap();
        assert_eq!(out, "Arr, ahoy");
        assert_eq!(server.join().unwrap(), "/arrpi.php?text=hello%20there");
    }

    #[test]
    #[serial]
    fn pirate_endpoint_from_env() {
        let (endpoint, server) = serve_once("Yo ho");
        // SAFETY: every test touching this variable runs under `#[serial]`.
        unsafe { std::env::set_var(ENDPOINT_VAR, &endpoint) };
        let out = run_args(&["pirate", "rum & grog"]);
        unsafe { std::env::remove_var(ENDPOINT_VAR) };
        assert_eq!(out.unwrap(), "Yo ho");
        assert_eq!(server.join().unwrap(), "/arrpi.php?text=rum%20%26%20grog");
    }

    #[test]
    fn formatter_errors_propagate() {
        let err = run_args(&["lock-combo", "12345"]).unwrap_err();
        assert!(err.to_string().contains("expected 6 digits"));
    }
}
