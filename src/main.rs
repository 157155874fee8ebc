// src/main.rs

mod cmds;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "endless-gas-estimator")]
#[command(version)]
#[command(about = "Estimate Endless gas costs and compare them with Ethereum", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: cmds::GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[clap(name = "list")]
    List(cmds::list::Opts),

    #[clap(name = "estimate")]
    Estimate(cmds::estimate::Opts),

    #[clap(name = "multipliers")]
    Multipliers(cmds::multipliers::Opts),

    #[clap(name = "export")]
    Export(cmds::export::Opts),

    #[clap(name = "lint")]
    Lint(cmds::lint::Opts),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = cmds::Context::load(&cli.global).and_then(|ctx| match &cli.command {
        Commands::List(opts) => cmds::list::run(&ctx, opts),
        Commands::Estimate(opts) => cmds::estimate::run(&ctx, opts),
        Commands::Multipliers(opts) => cmds::multipliers::run(&ctx, opts),
        Commands::Export(opts) => cmds::export::run(&ctx, opts),
        Commands::Lint(opts) => cmds::lint::run(&ctx, opts),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
