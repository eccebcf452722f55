use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use flagutil_core::{tokenize, FlagContents, FlagError, FlagValue, StringList, StringMap};
use serde::Serialize;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Which flag value type to parse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum ValueKind {
    /// Comma-separated list (a,b\,c)
    List,
    /// Comma-separated key:value pairs (k:v,k2:v2)
    Map,
}

impl ValueKind {
    fn empty_value(self) -> Box<dyn FlagValue> {
        match self {
            ValueKind::List => Box::new(StringList::default()),
            ValueKind::Map => Box::new(StringMap::default()),
        }
    }
}

/// Parse and render escaped list and map flag values.
#[derive(Parser)]
#[command(
    name = "flagutil",
    version,
    about = "Parse and render escaped list and map flag values"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse text as a flag value and print its canonical form
    Parse {
        /// Value type to parse into
        #[arg(value_enum)]
        kind: ValueKind,
        /// Flag text, e.g. "a,b\,c" or "k:v,k2:v2"
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Split text on a delimiter, honoring backslash escapes
    Split {
        /// Text to split
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Single delimiter character
        #[arg(long, short, default_value = ",")]
        delimiter: char,
    },

    /// Show how typed list and map flags are re-serialized
    Show {
        /// List flag value
        #[arg(long, default_value = "")]
        list: StringList,
        /// Map flag value
        #[arg(long, default_value = "")]
        map: StringMap,
    },
}

#[derive(Serialize)]
struct ParseReport {
    kind: ValueKind,
    value: FlagContents,
    canonical: String,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { kind, text } => {
            cmd_parse(kind, &text, cli.output, cli.quiet);
        }
        Commands::Split { text, delimiter } => {
            cmd_split(&text, delimiter, cli.output);
        }
        Commands::Show { list, map } => {
            cmd_show(&list, &map, cli.output);
        }
    }
}

fn cmd_parse(kind: ValueKind, text: &str, output: OutputFormat, quiet: bool) {
    let mut value = kind.empty_value();
    if let Err(e) = value.set(text) {
        report_flag_error(&e, output, quiet);
        process::exit(1);
    }

    match output {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            let report = ParseReport {
                kind,
                value: value.get(),
                canonical: value.to_string(),
            };
            print_json(&report, output);
        }
    }
}

fn cmd_split(text: &str, delimiter: char, output: OutputFormat) {
    let tokens = tokenize(text, delimiter);
    match output {
        OutputFormat::Text => {
            for token in &tokens {
                println!("{}", token);
            }
        }
        OutputFormat::Json => print_json(&tokens, output),
    }
}

fn cmd_show(list: &StringList, map: &StringMap, output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            println!("--list={}", list);
            println!("--map={}", map);
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "list": list.get(),
                "map":  map.get(),
            });
            print_json(&json, output);
        }
    }
}

fn print_json<T: Serialize>(value: &T, output: OutputFormat) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            report_error(&format!("serialization error: {}", e), output, false);
            process::exit(1);
        }
    }
}

/// In JSON mode the error object is printed even with `--quiet`.
fn report_flag_error(e: &FlagError, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Json => {
            let err_json = serde_json::to_string_pretty(&e.to_json_value())
                .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", e));
            eprintln!("{}", err_json);
        }
        OutputFormat::Text => report_error(&format!("error: {}", e), output, quiet),
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}
