use clap::{Args, Parser, Subcommand};
use gts_config::GtsConfig;

/// Top-level CLI parser for the `gts` binary.
#[derive(Debug, Parser)]
#[command(name = "gts", version, about = "GTS - graduate thesis registry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the HTTP API.
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overrides `server.bind`
    #[arg(long)]
    pub bind: Option<String>,

    /// Database file, overrides `database.path`
    #[arg(long)]
    pub database: Option<String>,
}

impl ServeArgs {
    /// Flags win over every configuration layer.
    pub fn apply(&self, config: &mut GtsConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind.clone_from(bind);
        }
        if let Some(database) = &self.database {
            config.database.path.clone_from(database);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands};
    use gts_config::GtsConfig;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_override_config() {
        let cli = Cli::try_parse_from([
            "gts",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--database",
            "/tmp/gts.db",
            "--verbose",
        ])
        .expect("cli should parse");
        assert!(cli.verbose);

        let Commands::Serve(args) = cli.command;
        let mut config = GtsConfig::default();
        args.apply(&mut config);
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.database.path, "/tmp/gts.db");
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["gts", "serve"]).expect("cli should parse");
        let Commands::Serve(args) = cli.command;
        let mut config = GtsConfig::default();
        args.apply(&mut config);
        assert_eq!(config.server.bind, "127.0.0.1:3007");
        assert_eq!(config.database.path, "gts.db");
    }
}
