use ipv4_subnet_calc::shell::Shell;
use ipv4_subnet_calc::Config;
use std::error::Error;
use std::io::{self, IsTerminal};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, could not load log4rs.yml: {e}");
    }
    log::info!("#Start main()");

    let config = Config::from_env()?;
    if let Some(color) = config.color {
        colored::control::set_override(color);
    }

    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut shell = Shell::new(io::stdin().lock(), stdout.lock(), config)
        .with_clear_screen(clear_screen);
    shell.run()?;

    log::info!("#End main()");
    Ok(())
}
