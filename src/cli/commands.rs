use clap::{Parser, Subcommand, ValueEnum};

/// Ensemble symptom analysis with LLM reasoning and rule-based fallbacks
#[derive(Parser, Debug)]
#[command(
    name = "symtriage",
    about = "Ensemble symptom analysis with LLM reasoning and rule-based fallbacks",
    version,
    long_about = "symtriage analyzes free-text symptom descriptions using a remote \
                  clinical-reasoning service, a local medical NER model and a \
                  deterministic rule-based classifier, merged into one assessment \
                  with an urgency score. Analyzer failures degrade gracefully; the \
                  result always includes a medical disclaimer."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Analyze a symptom description",
        long_about = "Runs the full analysis pipeline on a free-text symptom \
                      description.\n\n\
                      Examples:\n  \
                      symtriage analyze \"persistent headache with nausea for two days\"\n  \
                      symtriage analyze \"chest pain when climbing stairs\" --age 58 --gender male\n  \
                      symtriage analyze \"mild rash on both arms\" --format json"
    )]
    Analyze(AnalyzeArgs),

    #[command(
        about = "Check analyzer availability",
        long_about = "Checks the availability of the configured reasoning service \
                      and NER sidecar.\n\n\
                      Examples:\n  \
                      symtriage health"
    )]
    Health(HealthArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[arg(value_name = "SYMPTOMS", help = "Free-text symptom description (10-1000 characters)")]
    pub symptoms: String,

    #[arg(long, value_name = "YEARS", help = "Patient age (1-120)")]
    pub age: Option<u8>,

    #[arg(long, value_name = "GENDER", help = "Patient gender (free-form)")]
    pub gender: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct HealthArgs {
    #[arg(long, value_name = "SECONDS", default_value = "5", help = "Health check timeout")]
    pub timeout: u64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable report
    Human,
    /// Machine-readable JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_are_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_analyze_parses_demographics() {
        let args = CliArgs::parse_from([
            "symtriage",
            "analyze",
            "persistent headache with nausea",
            "--age",
            "34",
            "--gender",
            "female",
            "--format",
            "json",
        ]);

        match args.command {
            Commands::Analyze(analyze) => {
                assert_eq!(analyze.symptoms, "persistent headache with nausea");
                assert_eq!(analyze.age, Some(34));
                assert_eq!(analyze.gender.as_deref(), Some("female"));
                assert_eq!(analyze.format, OutputFormatArg::Json);
            }
            _ => panic!("Expected analyze command"),
        }
    }

    #[test]
    fn test_health_default_timeout() {
        let args = CliArgs::parse_from(["symtriage", "health"]);
        match args.command {
            Commands::Health(health) => assert_eq!(health.timeout, 5),
            _ => panic!("Expected health command"),
        }
    }
}
