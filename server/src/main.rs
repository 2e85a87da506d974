//! Plausch Server – Einstiegspunkt
//!
//! Laedt die Konfiguration, initialisiert das Logging und startet den Server.

use anyhow::Result;
use plausch_observability::logging::{log_format_gueltig, log_level_gueltig};
use plausch_observability::logging_initialisieren;
use plausch_server::{Server, config::ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Konfigurationsdatei-Pfad aus Umgebungsvariable oder Standard
    let config_pfad = std::env::var("PLAUSCH_CONFIG")
        .unwrap_or_else(|_| "config.toml".into());

    // Konfiguration laden (Standardwerte falls Datei fehlt)
    let config = ServerConfig::laden(&config_pfad)?;

    // Logging-Einstellungen pruefen bevor der Subscriber steht
    anyhow::ensure!(
        log_level_gueltig(&config.logging.level),
        "Ungueltiger Log-Level '{}' (erlaubt: trace/debug/info/warn/error)",
        config.logging.level
    );
    anyhow::ensure!(
        log_format_gueltig(&config.logging.format),
        "Ungueltiges Log-Format '{}' (erlaubt: text/json)",
        config.logging.format
    );

    // Logging initialisieren
    logging_initialisieren(&config.logging.level, &config.logging.format);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_pfad,
        "Plausch Server wird initialisiert"
    );

    // Server starten
    let server = Server::neu(config);
    server.starten().await?;

    Ok(())
}
