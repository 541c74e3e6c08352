use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::common::common::parse_query;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::impls::swarm_registry_handlers::render_peer_list;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds one listener and returns its handle together with the server future.
///
/// Nothing is served until the returned `Server` is polled. Bind failures are
/// returned to the caller instead of terminating the process.
pub async fn http_service(
    addr: SocketAddr,
    swarm_registry: Arc<SwarmRegistry>,
    http_trackers_config: Arc<HttpTrackersConfig>
) -> Result<(ServerHandle, Server), std::io::Error>
{
    info!("[HTTP] Starting server listener on {}", addr);
    let data = Arc::new(HttpServiceData { swarm_registry });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(http_trackers_config.keep_alive))
        .client_request_timeout(Duration::from_secs(http_trackers_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_trackers_config.disconnect_timeout))
        .workers(http_trackers_config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let remote_addr = request.peer_addr();
    let query = parse_query(Some(request.query_string().to_string()));
    let registry = &data.swarm_registry;

    let announce = match registry.validate_announce(&query, remote_addr) {
        Ok(announce) => announce,
        Err(error) => {
            debug!("[HTTP] Rejected announce from {:?}: {}", remote_addr, error);
            http_service_stats_log(remote_addr, registry, StatsEvent::Tcp4Failure, StatsEvent::Tcp6Failure);
            return HttpResponse::BadRequest().content_type(ContentType::plaintext()).body(error.to_string());
        }
    };

    http_service_stats_log(remote_addr, registry, StatsEvent::Tcp4AnnouncesHandled, StatsEvent::Tcp6AnnouncesHandled);
    let peers = registry.handle_announce(announce);
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(render_peer_list(&peers))
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let remote_addr = request.peer_addr();
    debug!("[HTTP] Request from {:?}: 404 Not Found {}", remote_addr, request.path());
    http_service_stats_log(remote_addr, &data.swarm_registry, StatsEvent::Tcp4NotFound, StatsEvent::Tcp6NotFound);
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body("404 page not found")
}

/// Counts the request under the IPv6 event for IPv6 peers, the IPv4 one otherwise.
pub fn http_service_stats_log(remote_addr: Option<SocketAddr>, registry: &SwarmRegistry, ipv4: StatsEvent, ipv6: StatsEvent)
{
    match remote_addr {
        Some(addr) if addr.is_ipv6() => { registry.update_stats(ipv6, 1); }
        _ => { registry.update_stats(ipv4, 1); }
    }
}
