use std::collections::HashMap;
#[cfg(not(unix))]
use std::net::{Ipv4Addr, Ipv6Addr};
use std::net::IpAddr;
use std::time::{Duration, SystemTime};
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, warn};
use tokio_shutdown::Shutdown;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into its percent-decoded key/value pairs.
///
/// Keys are kept case-sensitive. Every occurrence of a key is kept in order,
/// a key without `=` is recorded with an empty value. A `+` decodes to a
/// space, like HTML form encoding.
pub fn parse_query(query: Option<String>) -> HashMap<String, Vec<Vec<u8>>> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw_query) = query else {
        return queries;
    };
    for query_item in raw_query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_name_raw, value_data_raw) = query_item.split_once('=').unwrap_or((query_item, ""));
        let key_name = String::from_utf8_lossy(&query_unescape(key_name_raw)).to_string();
        if key_name.is_empty() {
            continue;
        }
        queries.entry(key_name).or_default().push(query_unescape(value_data_raw));
    }
    queries
}

fn query_unescape(raw: &str) -> Vec<u8> {
    let plus_decoded = raw.replace('+', " ");
    percent_encoding::percent_decode_str(&plus_decoded).collect::<Vec<u8>>()
}

/// Returns the first value given for `field`, if it is present and non-empty.
pub fn query_value<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a [u8]> {
    query.get(field)
        .and_then(|values| values.first())
        .map(|value| value.as_slice())
        .filter(|value| !value.is_empty())
}

/// Extracts the bare host out of a `host:port` or `[host]:port` address.
///
/// The port must be present but is not interpreted. Returns `None` for a
/// missing port, an empty host, unbalanced brackets and an unbracketed host
/// containing a colon.
pub fn split_host_port(address: &str) -> Option<String> {
    let (host_part, port) = address.rsplit_once(':')?;
    let host = match host_part.strip_prefix('[') {
        Some(bracketed) => bracketed.strip_suffix(']')?,
        None => {
            if host_part.contains(':') {
                return None;
            }
            host_part
        }
    };
    if host.is_empty() || host.contains(['[', ']']) || port.contains(['[', ']']) {
        return None;
    }
    Some(host.to_string())
}

/// Renders a member endpoint, bracketing hosts that contain a colon.
pub fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

pub fn current_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or_default()
}

/// Sleeps for `timeout`, returning `true` early if shutdown was requested.
pub async fn shutdown_waiting(timeout: Duration, shutdown_handler: Shutdown) -> bool {
    tokio::select! {
        _ = shutdown_handler.handle() => {
            true
        }
        _ = tokio::time::sleep(timeout) => {
            false
        }
    }
}

pub fn parse_log_level(log_level: &str) -> Option<log::LevelFilter> {
    match log_level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        return Err(CustomError::new(&format!("Failed to initialize logging: {}", err)));
    }
    info!("logging initialized.");
    Ok(())
}

/// Checks whether `hostname` resolves into the network of a local interface.
pub async fn hostname_resolves_to_local(hostname: &str) -> Result<bool, CustomError>
{
    let resolved: Vec<IpAddr> = tokio::net::lookup_host((hostname, 0)).await
        .map_err(|e| CustomError::new(&e.to_string()))?
        .map(|socket_addr| socket_addr.ip())
        .collect();
    let local_networks = local_networks()?;
    Ok(addresses_are_local(&resolved, &local_networks))
}

/// Address and netmask of every configured interface address.
#[cfg(unix)]
pub fn local_networks() -> Result<Vec<(IpAddr, IpAddr)>, CustomError>
{
    let interfaces = nix::ifaddrs::getifaddrs()
        .map_err(|e| CustomError::new(&e.to_string()))?;
    Ok(interfaces.filter_map(|interface| {
        let address = interface.address?;
        let netmask = interface.netmask?;
        if let (Some(address), Some(netmask)) = (address.as_sockaddr_in(), netmask.as_sockaddr_in()) {
            return Some((IpAddr::V4(address.ip()), IpAddr::V4(netmask.ip())));
        }
        if let (Some(address), Some(netmask)) = (address.as_sockaddr_in6(), netmask.as_sockaddr_in6()) {
            return Some((IpAddr::V6(address.ip()), IpAddr::V6(netmask.ip())));
        }
        None
    }).collect())
}

/// Without netmasks available every interface address is its own network.
#[cfg(not(unix))]
pub fn local_networks() -> Result<Vec<(IpAddr, IpAddr)>, CustomError>
{
    Ok(local_ip_address::list_afinet_netifas()
        .map_err(|e| CustomError::new(&e.to_string()))?
        .into_iter()
        .map(|(_interface, ip)| match ip {
            IpAddr::V4(_) => (ip, IpAddr::V4(Ipv4Addr::BROADCAST)),
            IpAddr::V6(_) => (ip, IpAddr::V6(Ipv6Addr::from(u128::MAX))),
        })
        .collect())
}

/// `true` when `addr` lies in the network of `interface` masked by `netmask`.
pub fn network_contains(interface: IpAddr, netmask: IpAddr, addr: IpAddr) -> bool
{
    match (interface, netmask, addr) {
        (IpAddr::V4(interface), IpAddr::V4(netmask), IpAddr::V4(addr)) => {
            let mask = u32::from(netmask);
            u32::from(interface) & mask == u32::from(addr) & mask
        }
        (IpAddr::V6(interface), IpAddr::V6(netmask), IpAddr::V6(addr)) => {
            let mask = u128::from(netmask);
            u128::from(interface) & mask == u128::from(addr) & mask
        }
        _ => false
    }
}

pub fn addresses_are_local(resolved: &[IpAddr], local_networks: &[(IpAddr, IpAddr)]) -> bool
{
    resolved.iter().any(|addr| {
        addr.is_loopback() || local_networks.iter().any(|(interface, netmask)| network_contains(*interface, *netmask, *addr))
    })
}

/// Best-effort startup check, only ever logs.
pub async fn check_local_hostname(hostname: &str)
{
    if hostname.is_empty() {
        return;
    }
    match hostname_resolves_to_local(hostname).await {
        Ok(true) => {
            info!("[DIAGNOSTIC] {} resolves to a local interface", hostname);
        }
        Ok(false) => {
            warn!("[DIAGNOSTIC] {} does not resolve to current host interface. This may cause problems with local torrent client.", hostname);
        }
        Err(error) => {
            warn!("[DIAGNOSTIC] Couldn't check the host name: {}", error);
        }
    }
}
