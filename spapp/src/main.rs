#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use leptos::prelude::*;
    use spapp::{
        conf::{deployment, Cli, Command},
        server,
    };

    dotenvy::dotenv().ok();
    let args = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .module("spapp")
        .module("spcore")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    // For deployment these variables are:
    // <https://github.com/leptos-rs/start-axum#executing-a-server-on-a-remote-machine-without-the-toolchain>
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    log::info!("built for {} deployment", deployment());

    match args.command.unwrap_or_default() {
        Command::Serve => server::serve(leptos_options).await?,
        Command::Export { out_dir } => {
            server::export(leptos_options, &out_dir).await?;
        }
    }
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
