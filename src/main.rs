use clap::Parser;

use class_responses::cli::{Cli, Commands};
use class_responses::commands::{run_appeal, run_chart, run_config, run_feedback, run_init};
use class_responses::logging::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Chart(args) => run_chart(args, cli.no_config),
        Commands::Feedback(args) => run_feedback(args, cli.no_config),
        Commands::Appeal(args) => run_appeal(args, cli.no_config),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, cli.no_config),
    };

    std::process::exit(exit_code);
}
