use anyhow::Context;
use tracing_subscriber::EnvFilter;

use lifegrid::app::App;
use lifegrid::config::Config;
use lifegrid::events::Exit;
use lifegrid::events::Interrupt;
use lifegrid::io::Terminal;
use lifegrid::world::World;

/// Signal number of SIGINT
const SIGINT: i32 = 2;

fn main() -> anyhow::Result<()> {
    // logs go to stderr, stdout belongs to the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();

    let interrupt = Interrupt::install().context("Failed to install the Ctrl-C handler")?;

    let mut world = World::new(config.rows, config.cols);
    world
        .seed(config.population)
        .context("Failed to seed the initial population")?;

    let mut terminal = Terminal::stdout();
    let exit = App::new(config)
        .run(&mut world, &mut terminal, &interrupt)
        .context("Failed to draw to the terminal")?;

    if exit == Exit::Interrupted {
        println!("CTRL + C pressed SIGINT: {SIGINT}");
    }

    Ok(())
}
