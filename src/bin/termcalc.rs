use clap::Parser as _;
use env_logger::Env;
use log::info;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use termcalc::parse::{Parser, ParserConfig, TermBuilder, TokenTrace};
use termcalc::{Context, Error};

/// Evaluate fully parenthesized arithmetic expressions over single digits.
#[derive(clap::Parser, Debug)]
#[command(version)]
struct Args {
    /// Expression to evaluate; read one per line from stdin when omitted
    expr: Option<String>,

    /// Print the parsed tokens instead of the result
    #[arg(long)]
    tokens: bool,

    /// Maximum parenthesis nesting depth
    #[arg(long, conflicts_with = "unbounded")]
    max_depth: Option<usize>,

    /// Do not limit parenthesis nesting
    #[arg(long)]
    unbounded: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> ParserConfig {
        if self.unbounded {
            ParserConfig { max_depth: None }
        } else {
            self.max_depth
                .map(|max| ParserConfig {
                    max_depth: Some(max),
                })
                .unwrap_or_default()
        }
    }
}

/// Evaluates or traces `s`, writing the result or the failure message to `out`.
fn run(s: &str, config: ParserConfig, tokens: bool, out: &mut impl Write) -> io::Result<bool> {
    if tokens {
        let mut trace = TokenTrace::new();
        let result = Parser::with_config(s, config).parse(&mut trace);
        for token in trace.tokens() {
            writeln!(out, "{}", token)?;
        }
        return match result {
            Ok(()) => Ok(true),
            Err(why) => {
                writeln!(out, "Error: {}", why)?;
                Ok(false)
            }
        };
    }

    let ctx = Context::new();
    let result = Parser::with_config(s, config)
        .parse(&mut TermBuilder)
        .map_err(Error::from)
        .and_then(|term| term.eval(&ctx).map_err(Error::from));
    match result {
        Ok(value) => {
            writeln!(out, "{}", value)?;
            Ok(true)
        }
        Err(why) => {
            writeln!(out, "Error: {}", why)?;
            Ok(false)
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = args.config();
    info!("parser config: {:?}", config);

    if let Some(expr) = &args.expr {
        let ok = run(expr.trim(), config, args.tokens, &mut io::stdout())?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let stdin = io::stdin();
    let mut all_ok = true;
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            all_ok &= run(line, config, args.tokens, &mut io::stdout())?;
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(s: &str, tokens: bool, expected: &str, expected_ok: bool) {
        let mut out = Vec::new();
        let ok = run(s, ParserConfig::default(), tokens, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(ok, expected_ok);
    }

    #[test]
    fn test_run_eval() {
        check("((2+3)*4)", false, "20\n", true);
    }

    #[test]
    fn test_run_errors_go_to_output() {
        check("(1/0)", false, "Error: cannot divide by zero\n", false);
        check(
            "(((3)+(5))*(4)))",
            false,
            "Error: error at position 15 ()): parenthesis not balanced\n",
            false,
        );
    }

    #[test]
    fn test_run_tokens() {
        check("(2*5)", true, "(\n2\n*\n5\n)\n", true);
        check(
            "(2+)",
            true,
            "(\n2\n+\nError: error at position 3 ()): left parenthesis or constant expected\n",
            false,
        );
    }
}
