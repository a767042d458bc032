//! Command-line surface

use std::path::PathBuf;

use clap::Parser;
use fidmap_topology::ServiceFamily;

#[derive(Parser, Debug)]
#[command(name = "fidmap", version, about = "Print process fids of cluster services")]
pub struct Cli {
    /// Only report this service family (confd, ioservice, s3server)
    #[arg(long, value_name = "NAME")]
    pub service: Option<ServiceFamily>,

    /// Node to query [default: this machine's hostname]
    #[arg(long, value_name = "NAME")]
    pub node: Option<String>,

    /// Dump every node with all of its services
    #[arg(long, conflicts_with_all = ["service", "node"])]
    pub all: bool,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Key-value snapshot to read [default: from config]
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Configuration file [default: <config dir>/fidmap/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_service_family() {
        let cli = Cli::try_parse_from(["fidmap", "--service", "ioservice", "--node", "n1"]).unwrap();
        assert_eq!(cli.service, Some(ServiceFamily::IoService));
        assert_eq!(cli.node.as_deref(), Some("n1"));
        assert!(!cli.all);
    }

    #[test]
    fn test_rejects_unknown_service() {
        assert!(Cli::try_parse_from(["fidmap", "--service", "ios"]).is_err());
    }

    #[test]
    fn test_all_conflicts_with_filters() {
        assert!(Cli::try_parse_from(["fidmap", "--all", "--node", "n1"]).is_err());
        assert!(Cli::try_parse_from(["fidmap", "--all", "--service", "confd"]).is_err());
        assert!(Cli::try_parse_from(["fidmap", "--all", "--json"]).is_ok());
    }
}
