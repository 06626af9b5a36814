use acctview::{cli, config, Error};

fn init_tracing() {
    use tracing_subscriber::{
        filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt as _, Registry,
    };

    Registry::default()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_file(false)
                .with_line_number(false)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::rfc_3339()),
        )
        .with(
            EnvFilter::try_from_env(config::env::LOG_DIRECTIVE)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = cli::parse().run().await {
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &Error) -> i32 {
    if err.is_unauthenticated() {
        eprintln!("unauthenticated");
        2
    } else {
        eprintln!("{}", err);
        1
    }
}
