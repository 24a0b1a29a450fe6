use std::io;

use tracing::info;
use tracing::warn;

use crate::config::Config;
use crate::events::Exit;
use crate::events::Interrupt;
use crate::io::Display;
use crate::render::Frame;
use crate::world::World;

pub struct App {
    config: Config,
    frame: Frame,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            frame: Frame::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run `world` until it dies out or `interrupt` is raised.
    ///
    /// Each generation is shown, left on screen for the configured delay, evaluated, committed,
    /// and then the display is cleared. Once the population reaches zero the last board is shown
    /// one more time.
    pub fn run(
        &mut self,
        world: &mut World,
        display: &mut impl Display,
        interrupt: &Interrupt,
    ) -> io::Result<Exit> {
        while !world.is_extinct() {
            if interrupt.is_raised() {
                return Ok(self.interrupted(world));
            }

            display.show(self.frame.render(world))?;

            if interrupt.wait(self.config.delay) {
                return Ok(self.interrupted(world));
            }

            world.check_neighbors();
            world.update_status();

            display.clear()?;
        }

        display.show(self.frame.render(world))?;

        info!(generation = world.generation(), "population died out");

        Ok(Exit::Extinct)
    }

    fn interrupted(&self, world: &World) -> Exit {
        warn!(
            generation = world.generation(),
            population = world.population(),
            "interrupted"
        );

        Exit::Interrupted
    }
}
