//! Editor demo server entrypoint.

use ckeditor_bind::server::{config::Config, serve_router, AppState, DEFAULT_PORT};
use ckeditor_bind::EditorSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CliFlags {
    help: bool,
    check: bool,
}

fn parse_cli_flags(args: &[String]) -> anyhow::Result<CliFlags> {
    let mut flags = CliFlags::default();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" => flags.help = true,
            "--check" => flags.check = true,
            value if value.starts_with('-') => {
                anyhow::bail!(
                    "Unknown option: '{}'. Use --help to see supported options.",
                    value
                );
            }
            value => {
                anyhow::bail!(
                    "Unexpected positional argument: '{}'. Use --help to see supported options.",
                    value
                );
            }
        }
    }
    Ok(flags)
}

fn load_settings(config: &Config) -> anyhow::Result<EditorSettings> {
    match &config.settings_path {
        Some(path) => {
            let settings = EditorSettings::from_path(path).map_err(|err| {
                anyhow::anyhow!("Failed to load settings from {}: {}", path.display(), err)
            })?;
            tracing::info!("Loaded editor settings from {}", path.display());
            Ok(settings)
        }
        None => Ok(EditorSettings::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ckeditor_bind=info,ckeditor_server=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli_flags = parse_cli_flags(&args)?;

    if cli_flags.help {
        print_help();
        return Ok(());
    }

    let config = Config::from_env();
    let settings = load_settings(&config)?;
    let state = AppState::new(config.clone(), settings);

    // Reject bad settings at startup instead of on the first request.
    let behavior = state
        .behavior()
        .map_err(|err| anyhow::anyhow!("Invalid editor settings: {}", err))?;

    if cli_flags.check {
        println!("Settings OK: {}", ckeditor_bind::ToJs::to_js(behavior.options()));
        return Ok(());
    }

    if config.allow_public_access {
        tracing::warn!("Public access enabled - server will accept requests from any origin");
    }

    let bind_addr = ckeditor_bind::server::resolve_bind_address(&config);
    if !bind_addr.ip().is_loopback() {
        tracing::warn!(
            "Binding to non-localhost address: {} - ensure proper security measures are in place",
            bind_addr
        );
    }

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let actual_addr = listener.local_addr().unwrap_or(bind_addr);
    tracing::info!("Editor server running at http://{}", actual_addr);

    serve_router(listener, state, shutdown_signal()).await?;
    tracing::info!("Server stopped");

    Ok(())
}

fn print_help() {
    println!("CKEditor binding server\n");
    println!("Usage: ckeditor-server [OPTIONS]\n");
    println!("Options:");
    println!("  --check           Validate settings, print the options literal and exit");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!(
        "  PORT              Server port (default: {})",
        DEFAULT_PORT
    );
    println!("  EDITOR_SETTINGS   Path to a JSON settings file");
    println!("  CKEDITOR_BASE_PATH  URL prefix of the editor scripts (default: /ckeditor/)");
    println!("  JQUERY_PATH       URL of jQuery (default: /js/jquery.js)");
    println!("  ALLOW_PUBLIC_ACCESS  Allow CORS from any origin");
    println!(
        "  BIND              Override bind address (e.g. 0.0.0.0:{})",
        DEFAULT_PORT
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::{load_settings, parse_cli_flags, CliFlags, Config};
    use std::io::Write;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_cli_flags_accepts_known_flags() {
        let flags = parse_cli_flags(&args(&["ckeditor-server", "--check", "--help"]))
            .expect("flags");
        assert_eq!(
            flags,
            CliFlags {
                help: true,
                check: true
            }
        );
    }

    #[test]
    fn parse_cli_flags_rejects_unknown_and_positional_arguments() {
        let cases = [
            (args(&["ckeditor-server", "--chek"]), "Unknown option"),
            (
                args(&["ckeditor-server", "settings.json"]),
                "Unexpected positional argument",
            ),
        ];
        for (argv, fragment) in cases {
            let err = parse_cli_flags(&argv).expect_err("should reject");
            assert!(err.to_string().contains(fragment), "{}", err);
        }
    }

    #[test]
    fn load_settings_reads_configured_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"language": "it"}}"#).expect("write");
        let config = Config {
            settings_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let settings = load_settings(&config).expect("settings");
        assert_eq!(settings.language.as_deref(), Some("it"));
    }

    #[test]
    fn load_settings_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Config {
            settings_path: Some(dir.path().join("missing.json")),
            ..Config::default()
        };
        let err = load_settings(&config).expect_err("missing file");
        assert!(err.to_string().contains("Failed to load settings"));
    }
}
