mod command;
mod schema;
mod seed;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
