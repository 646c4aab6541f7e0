mod command;
mod heat_grid;
mod logging;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
