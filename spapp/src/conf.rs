use spcore::asset::{AssetPrefix, Deployment};

/// The deployment this build targets; identical for the server render and
/// the hydrated client since it is fixed at compile time.
pub fn deployment() -> Deployment {
    Deployment::from_build_env()
}

pub fn asset_prefix() -> AssetPrefix {
    deployment().asset_prefix()
}

/// Base path the router matches against.  The server sees request paths
/// with the base already stripped (axum's `nest`, or the export rendering
/// `/` directly), while the browser sees the full location.
pub fn router_base() -> String {
    if cfg!(feature = "hydrate") {
        asset_prefix().base().to_string()
    } else {
        String::new()
    }
}

#[cfg(feature = "ssr")]
mod cli {
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    pub struct Cli {
        #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        pub verbose: u8,
        #[clap(subcommand)]
        pub command: Option<Command>,
    }

    #[derive(Debug, Default, PartialEq, Subcommand)]
    pub enum Command {
        /// Serve the page on the configured site address.
        #[default]
        Serve,
        /// Render the page and write it with the site assets into a directory.
        Export {
            #[clap(long, value_name = "DIR", env = "SMARTPATH_EXPORT_DIR", default_value = "target/export")]
            out_dir: PathBuf,
        },
    }
}

#[cfg(feature = "ssr")]
pub use cli::{Cli, Command};
