use crate::demo::{run_assess, run_demo, AssessArgs, DemoArgs};
use crate::server;
use case_triage::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Case Triage",
    about = "Triage family law intake narratives from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess one intake document and print the case report
    Assess(AssessArgs),
    /// Assess the built-in sample intakes and print the report and history
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::OutputFormat;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["case-triage"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assess_accepts_sample_with_json_format() {
        let cli = Cli::try_parse_from(["case-triage", "assess", "--sample", "--format", "json"])
            .expect("parses");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert!(args.sample);
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn assess_requires_an_intake_source() {
        assert!(Cli::try_parse_from(["case-triage", "assess"]).is_err());
        assert!(Cli::try_parse_from([
            "case-triage",
            "assess",
            "--sample",
            "--input",
            "intake.json"
        ])
        .is_err());
    }
}
