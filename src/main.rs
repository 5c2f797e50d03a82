use std::{env, process};

use cystar::{
    cli::{
        args::{parse_args, Cli, Parsed},
        config::BuildConfig,
    },
    display_error,
    errors::errors::Error,
    run, run_hint,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = match parse_args(env::args()) {
        Ok(Parsed::Run(cli)) => cli,
        Ok(Parsed::Info(text)) => {
            print!("{}", text);
            return;
        }
        Err(error) => fail(error),
    };

    init_tracing(&cli);
    info!("cycomp v{}", env!("CARGO_PKG_VERSION"));

    let result = BuildConfig::from_cli(&cli).and_then(|config| run(&config));

    match result {
        Ok(executable) => println!("{}", run_hint(&executable)),
        Err(error) => fail(error),
    }
}

fn init_tracing(cli: &Cli) {
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn fail(error: Error) -> ! {
    display_error(&error);
    process::exit(error.exit_code());
}
