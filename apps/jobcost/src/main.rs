use anyhow::{Context, Result, anyhow, bail};
use clap::{ArgAction, Parser};
use jobcost_logging::{LogFormat, LogLevel, LoggingConfig};
use jobcost_samples::{SAMPLE_COUNT, Sample};
use jobcost_schema::CostSuggestionResponse;
use jobcost_suggest::{CostSuggestionGenerator, LlmConfig, MockLlmBackend};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "jobcost")]
#[command(about = "Suggest cost groups and cost categories for a job.", long_about = None)]
struct Cli {
    /// Canned example to run (1-3). Prompts on stdin when omitted.
    #[arg(long, value_name = "N")]
    example: Option<usize>,

    /// List the canned examples and exit.
    #[arg(long)]
    list: bool,

    /// Answer from the recorded response instead of calling the service.
    #[arg(long)]
    replay: bool,

    /// Pretty-print the suggestion JSON.
    #[arg(long)]
    pretty: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Diagnostic format on stderr: plain, compact or json.
    #[arg(long, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Disable ANSI colors in diagnostics.
    #[arg(long)]
    no_color: bool,

    /// Omit timestamps from diagnostics.
    #[arg(long)]
    no_timestamps: bool,
}

impl Cli {
    fn logging(&self) -> LoggingConfig {
        LoggingConfig::new()
            .with_level(LogLevel::from_verbosity(self.verbose))
            .with_format(self.log_format)
            .with_colors(!self.no_color)
            .with_timestamps(!self.no_timestamps)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    jobcost_logging::init(&cli.logging())?;

    if cli.list {
        for sample in jobcost_samples::samples() {
            println!("{}", sample.label);
        }
        return Ok(());
    }

    // Credentials are checked before anything is selected.
    let config = if cli.replay {
        None
    } else {
        Some(LlmConfig::from_env().context("completion service is not configured")?)
    };

    let sample = match cli.example {
        Some(number) => lookup_sample(number)?,
        None => {
            let stdin = io::stdin();
            prompt_for_sample(&mut stdin.lock(), &mut io::stderr())?
        }
    };
    tracing::info!(example = sample.number, label = sample.label, "selected example");

    let generator = match config {
        Some(config) => CostSuggestionGenerator::from_config(&config),
        None => {
            let recorded = jobcost_samples::recorded_response(sample.number)
                .ok_or_else(|| anyhow!("no recorded response for example {}", sample.number))?;
            CostSuggestionGenerator::new(Box::new(MockLlmBackend {
                response: recorded.to_string(),
            }))
        }
    };

    let response = generator
        .generate(&sample.request)
        .with_context(|| format!("generating suggestions for {:?}", sample.label))?;

    println!("{}", render(&response, cli.pretty)?);
    Ok(())
}

fn lookup_sample(number: usize) -> Result<Sample> {
    match jobcost_samples::sample(number) {
        Some(sample) => Ok(sample),
        None => bail!("example must be between 1 and {SAMPLE_COUNT}, got {number}"),
    }
}

fn prompt_for_sample(input: &mut impl BufRead, menu: &mut impl Write) -> Result<Sample> {
    writeln!(menu, "Select an example:")?;
    for sample in jobcost_samples::samples() {
        writeln!(menu, "  {}) {}", sample.number, sample.label)?;
    }
    write!(menu, "> ")?;
    menu.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_selection(&line)
        .and_then(jobcost_samples::sample)
        .ok_or_else(|| anyhow!("no example selected"))
}

/// Menu answer as a sample number. Accepts `2` as well as `E2`.
fn parse_selection(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    let digits = trimmed
        .strip_prefix('E')
        .or_else(|| trimmed.strip_prefix('e'))
        .unwrap_or(trimmed);
    digits.parse().ok()
}

fn render(response: &CostSuggestionResponse, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn example_flag_accepts_equals_form() {
        let cli = Cli::try_parse_from(["jobcost", "--example=2"]).unwrap();
        assert_eq!(cli.example, Some(2));
        assert_eq!(cli.log_format, LogFormat::Plain);
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::try_parse_from(["jobcost", "-vv", "--log-format", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn logging_flags_map_onto_config() {
        let cli = Cli::try_parse_from(["jobcost", "-v", "--no-color", "--no-timestamps"]).unwrap();
        let logging = cli.logging();
        assert_eq!(logging.level, LogLevel::Info);
        assert!(!logging.colors);
        assert!(!logging.timestamps);

        let defaults = Cli::try_parse_from(["jobcost"]).unwrap().logging();
        assert_eq!(defaults, LoggingConfig::default());
    }

    #[test]
    fn selection_parsing() {
        assert_eq!(parse_selection("1\n"), Some(1));
        assert_eq!(parse_selection("  E3 "), Some(3));
        assert_eq!(parse_selection("e2"), Some(2));
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("two"), None);
    }

    #[test]
    fn out_of_range_example_is_rejected() {
        let err = lookup_sample(4).unwrap_err();
        assert!(err.to_string().contains("between 1 and 3"));
        assert!(lookup_sample(0).is_err());
    }

    #[test]
    fn menu_lists_samples_and_reads_choice() {
        let mut input = io::Cursor::new("2\n");
        let mut menu = Vec::new();
        let sample = prompt_for_sample(&mut input, &mut menu).unwrap();
        assert_eq!(sample.number, 2);

        let menu = String::from_utf8(menu).unwrap();
        assert!(menu.contains("1) E1: Job Name and Notes"));
        assert!(menu.contains("3) E3: Job Name, Notes, and Existing Cost Groups"));
    }

    #[test]
    fn menu_eof_means_no_selection() {
        let mut input = io::Cursor::new("");
        let err = prompt_for_sample(&mut input, &mut io::sink()).unwrap_err();
        assert_eq!(err.to_string(), "no example selected");
    }

    #[test]
    fn menu_rejects_unknown_choice() {
        let mut input = io::Cursor::new("9\n");
        assert!(prompt_for_sample(&mut input, &mut io::sink()).is_err());
    }

    #[test]
    fn render_compact_and_pretty() {
        let response: CostSuggestionResponse =
            serde_json::from_str(r#"{"groups":[{"name":"Labor","children":["Crew"]}]}"#).unwrap();
        assert_eq!(
            render(&response, false).unwrap(),
            r#"{"groups":[{"name":"Labor","children":["Crew"]}]}"#
        );
        assert!(render(&response, true).unwrap().contains("\n  \"groups\""));
    }
}
