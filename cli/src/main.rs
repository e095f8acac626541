mod commands;
mod terminal;

use commands::{CommandLine, Commands, compute, demo, greet, password, profile, score, stats};
use kata_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Greet { name } => greet::greet(name.as_deref(), &cfg),
        Commands::Area { length, width } => compute::area(&length, width.as_deref(), &cfg),
        Commands::Circle { radius } => compute::circle(&radius, &cfg),
        Commands::Bmi { weight, height } => compute::bmi(&weight, &height, &cfg),
        Commands::Score { points } => score::score(&points, &cfg),
        Commands::Factorial { n } => compute::factorial(&n, &cfg),
        Commands::Stats { numbers } => stats::stats(&numbers, &cfg),
        Commands::Profile {
            name,
            age,
            occupation,
        } => profile::profile(&name, &age, occupation.as_deref(), &cfg),
        Commands::Password { candidate } => password::password(&candidate, &cfg),
        Commands::Demo => demo::demo(&cfg),
    }
}
