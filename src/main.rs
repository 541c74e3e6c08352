use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::{join_all, try_join_all};
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use retracker::common::common::{check_local_hostname, setup_logging, shutdown_waiting};
use retracker::config::structs::configuration::Configuration;
use retracker::http::http::http_service;
use retracker::structs::Cli;
use retracker::tracker::structs::swarm_registry::SwarmRegistry;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to register the shutdown signal handler: {error}");
                    exit(1);
                }
            };

            check_local_hostname(&config.tracker_config.local_hostname).await;

            let swarm_registry = Arc::new(SwarmRegistry::new(config.clone()));

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[HTTP] Invalid bind address {}: {error}", http_server_object.bind_address);
                        exit(1);
                    }
                };
                match http_service(address, swarm_registry.clone(), Arc::new(http_server_object.clone())).await {
                    Ok((handle, future)) => {
                        http_handles.push(handle);
                        http_futures.push(future);
                    }
                    Err(error) => {
                        error!("[HTTP] Unable to bind to {address}: {error}");
                        exit(1);
                    }
                }
            }

            tokio::spawn(async move {
                if let Err(error) = try_join_all(http_futures).await {
                    error!("[HTTP] Server stopped with an error: {error}");
                    exit(1);
                }
            });

            let cleanup_handler = tokio_shutdown.clone();
            let cleanup_interval = config.tracker_config.peers_cleanup_interval;
            info!("[BOOT] Starting thread for swarm cleanup with {cleanup_interval} seconds delay...");
            tokio::spawn(swarm_registry.clone().cleanup_thread(cleanup_handler));

            let console_interval = config.log_console_interval;
            if console_interval > 0 {
                let stats_handler = tokio_shutdown.clone();
                let registry_spawn_stats = swarm_registry.clone();
                info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                tokio::spawn(async move {
                    loop {
                        if shutdown_waiting(Duration::from_secs(console_interval), stats_handler.clone()).await {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                        let stats = registry_spawn_stats.get_stats();
                        info!(
                            "[STATS] Swarms: {} - Peers: {} - Created: {} - Reclaimed: {} - Evicted: {}",
                            stats.swarms, stats.peers, stats.swarms_created, stats.swarms_reclaimed, stats.peers_evicted
                        );
                        info!(
                            "[STATS TCP] IPv4: A:{} F:{} 404:{} | IPv6: A:{} F:{} 404:{}",
                            stats.tcp4_announces_handled, stats.tcp4_failure, stats.tcp4_not_found,
                            stats.tcp6_announces_handled, stats.tcp6_failure, stats.tcp6_not_found
                        );
                    }
                });
            }

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            join_all(http_handles.iter().map(|handle| handle.stop(true))).await;

            info!("Server shutting down completed");
            Ok(())
        })
}
