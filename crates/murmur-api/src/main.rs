//! Murmur HTTP server and CLI entry point.
//!
//! Binary name: `murmur`
//!
//! Parses CLI arguments, restores persisted chats, then starts the
//! HTTP server or runs a one-shot command.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn,murmur_api=info,murmur_core=info,murmur_infra=info",
        1 => "info,murmur_api=debug,murmur_core=debug,murmur_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "murmur", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (config, provider, saved chats)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| state.config.host.clone());
            let port = port.unwrap_or(state.config.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Murmur listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Status => {
            let service = state.service.lock().await;
            let info = service.memory_info();
            let (chats, _) = service.list_sessions();

            if cli.json {
                let status = serde_json::json!({
                    "data_dir": state.data_dir,
                    "model": state.config.model,
                    "total_chats": info.total_chats,
                    "total_messages": info.total_messages_all_chats,
                    "current_chat_id": info.current_chat_id,
                    "user_name": info.user_profile.name,
                    "chats": chats,
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!();
                println!(
                    "  {} Murmur status",
                    console::style("💬").bold()
                );
                println!();
                println!("  Data dir:  {}", state.data_dir.display());
                println!("  Model:     {}", state.config.model);
                println!(
                    "  Chats:     {} ({} messages total)",
                    info.total_chats, info.total_messages_all_chats
                );
                match &info.user_profile.name {
                    Some(name) => println!("  User:      {}", console::style(name).cyan()),
                    None => println!("  User:      {}", console::style("unknown").dim()),
                }
                println!();
                for chat in &chats {
                    let marker = if chat.is_current { "→" } else { " " };
                    println!(
                        "  {marker} {}  {}  ({} messages)",
                        console::style(&chat.id).yellow(),
                        chat.title,
                        chat.message_count
                    );
                }
                println!();
            }
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
