use anyhow::Result;
use clap::{Parser, ValueEnum};
use shield_snake::game::GameConfig;
use shield_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "shield_snake")]
#[command(version, about = "Terminal snake: collect defenses, dodge attacks")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Grid width in cells
    #[arg(long, default_value = "40")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "30")]
    height: usize,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=60))]
    tick_rate: u64,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with keyboard controls
    Human,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        tick_interval_ms: 1000 / cli.tick_rate,
        ..GameConfig::new(cli.width, cli.height)
    };

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
    }

    Ok(())
}
