//! plausch-server – Bibliotheks-Root
//!
//! Verdrahtet Signaling-Kern und Observability-Server und stellt den
//! oeffentlichen Einstiegspunkt fuer Integrationstests bereit.

pub mod config;

use anyhow::{Context, Result};
use config::ServerConfig;
use plausch_observability::Statistik;
use plausch_signaling::server_state::{SignalingConfig, SignalingState};
use plausch_signaling::tcp::SignalingServer;
use std::sync::Arc;
use tokio::sync::watch;

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

/// Adapter der die Client-Zahlen aus dem Signaling-Zustand fuer den
/// Health-Check bereitstellt
struct ServerStatistik {
    state: Arc<SignalingState>,
}

impl Statistik for ServerStatistik {
    fn online_anzahl(&self) -> usize {
        self.state.registry.anzahl()
    }

    fn wartende_anzahl(&self) -> usize {
        self.state.vermittlung.wartende_anzahl()
    }

    fn uptime_sekunden(&self) -> u64 {
        self.state.uptime_sek()
    }
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Startet alle Server-Subsysteme und laeuft bis zum Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Signaling-Zustand aufbauen (Registry, Vermittlung, Router)
    /// 2. TCP-Listener starten (Signaling-Protokoll)
    /// 3. Observability-Server starten (falls aktiviert)
    /// 4. Auf Ctrl-C warten, dann Shutdown an alle Verbindungen signalisieren
    pub async fn starten(self) -> Result<()> {
        tracing::info!(
            server_name = %self.config.server.name,
            tcp = %self.config.tcp_bind_adresse(),
            observability = self.config.observability.aktiviert,
            "Server startet"
        );

        let state = SignalingState::neu(SignalingConfig {
            server_name: self.config.server.name.clone(),
            max_clients: self.config.server.max_clients,
        });

        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let tcp_addr = self
            .config
            .tcp_bind_adresse()
            .parse()
            .context("Ungueltige TCP-Bind-Adresse")?;
        let signaling = SignalingServer::neu(Arc::clone(&state), tcp_addr);
        let signaling_task = tokio::spawn(async move { signaling.starten(shutdown_rx).await });

        if self.config.observability.aktiviert {
            let obs_addr = self
                .config
                .observability_bind_adresse()
                .parse()
                .context("Ungueltige Observability-Bind-Adresse")?;
            let statistik: Arc<dyn Statistik> = Arc::new(ServerStatistik {
                state: Arc::clone(&state),
            });
            tokio::spawn(async move {
                if let Err(e) =
                    plausch_observability::observability_server_starten(obs_addr, statistik).await
                {
                    tracing::error!(fehler = %e, "Observability-Server beendet");
                }
            });
        }

        tracing::info!("Server laeuft. Warte auf Shutdown-Signal (Ctrl-C)...");
        tokio::signal::ctrl_c().await?;
        tracing::info!("Shutdown-Signal empfangen, Server wird beendet");

        // Alle Verbindungs-Tasks ueber den Watch-Kanal beenden
        let _ = shutdown_tx.send(true);
        signaling_task.abort();

        Ok(())
    }
}
