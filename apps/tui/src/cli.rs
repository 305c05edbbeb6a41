use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "crisis-dashboard",
    version,
    about = "Global supply chain crisis dashboard"
)]
pub struct CliArgs {
    /// Print headless results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Override the backend base URL
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Override the log file used by the interactive dashboard
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Commands that run once without the interactive dashboard
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Analyze the supply chain risk of a product
    Analyze {
        /// Product name, e.g. "Nvidia H100"
        product: String,
    },
    /// Generate a recipe from the configured pantry
    Recipe,
    /// Locate a company's headquarters
    Locate {
        company: String,
        /// Narrow the search to a city
        #[arg(long, default_value = "")]
        city: String,
    },
    /// Check that the backend is reachable
    Ping,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("DASHBOARD_API_URL", url);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
