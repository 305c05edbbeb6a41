use clap::Parser;
use color_eyre::Result;
use crisis_dashboard::app::App;
use crisis_dashboard::cli::CliArgs;
use crisis_dashboard::config::{init_logger, LogTarget, Settings};
use crisis_dashboard::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Fails fast when the map provider key is missing
    let settings = Settings::from_env()?;
    let debug = debug_enabled();

    if let Some(command) = &args.command {
        init_logger(debug, &LogTarget::Stderr)?;
        return event::run_headless(&settings, command, args.json).await;
    }

    if !is_terminal() {
        println!("stdout is not a terminal; run a command instead.\n");
        println!("{}", CliArgs::help_text());
        return Ok(());
    }

    init_logger(debug, &LogTarget::File(settings.log_file.clone()))?;
    tracing::info!(api_url = %settings.api_url, "starting dashboard");

    let mut app = App::new(&settings)?;
    app.check_backend();

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

fn debug_enabled() -> bool {
    std::env::var("DEBUG").is_ok_and(|value| matches!(value.trim(), "1" | "true" | "yes"))
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
