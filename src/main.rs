use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vietqr::application::encoder::PaymentStringEncoder;
use vietqr::config::{BatchArgs, Cli, Command, EncodeArgs, ServerConfig};
use vietqr::domain::ports::ClockRef;
use vietqr::domain::request::PaymentRequest;
use vietqr::infrastructure::clock::SystemClock;
use vietqr::interfaces::csv::record_writer::RecordWriter;
use vietqr::interfaces::csv::request_reader::RequestReader;
use vietqr::interfaces::http::dto::EncodeResponse;
use vietqr::interfaces::http::{AppState, GENERATE_QR_PATH, app_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vietqr=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse();
    let clock: ClockRef = Arc::new(SystemClock::new());

    match cli.command {
        Command::Serve(config) => serve(config, clock).await,
        Command::Encode(args) => encode(args, clock),
        Command::Batch(args) => batch(args, clock),
    }
}

async fn serve(config: ServerConfig, clock: ClockRef) -> Result<()> {
    let app = app_router(AppState::new(clock));

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .into_diagnostic()?;
    let address = listener.local_addr().into_diagnostic()?;
    tracing::info!(%address, path = GENERATE_QR_PATH, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn encode(args: EncodeArgs, clock: ClockRef) -> Result<()> {
    let encoder = PaymentStringEncoder::new(clock);
    let record = encoder
        .process(&PaymentRequest::from(args))
        .into_diagnostic()?;

    let response = EncodeResponse::from(record);
    let json = serde_json::to_string_pretty(&response).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

fn batch(args: BatchArgs, clock: ClockRef) -> Result<()> {
    let encoder = PaymentStringEncoder::new(clock);
    let file = File::open(&args.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = RecordWriter::new(stdout.lock());

    // Row numbers are 1-based and exclude the header.
    for (index, request_result) in reader.requests().enumerate() {
        let row = index + 1;
        match request_result {
            Ok(request) => match encoder.process(&request) {
                Ok(record) => writer.write_record(&record).into_diagnostic()?,
                Err(error) => {
                    tracing::warn!(row, %error, "Error encoding payment request");
                }
            },
            Err(error) => {
                tracing::warn!(row, %error, "Error reading payment request");
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
