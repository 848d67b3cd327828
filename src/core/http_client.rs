use std::time::Duration;

use mediagrab_core::models::settings::ProxySettings;

const USER_AGENT: &str = concat!("mediagrab/", env!("CARGO_PKG_VERSION"));

pub fn proxy_url(proxy: &ProxySettings) -> Option<String> {
    if !proxy.enabled || proxy.host.is_empty() {
        return None;
    }
    let scheme = match proxy.proxy_type.as_str() {
        "socks5" => "socks5",
        "https" => "https",
        _ => "http",
    };
    if !proxy.username.is_empty() {
        Some(format!(
            "{}://{}:{}@{}:{}",
            scheme, proxy.username, proxy.password, proxy.host, proxy.port
        ))
    } else {
        Some(format!("{}://{}:{}", scheme, proxy.host, proxy.port))
    }
}

pub fn apply_proxy(
    builder: reqwest::ClientBuilder,
    proxy: &ProxySettings,
) -> reqwest::ClientBuilder {
    let Some(url) = proxy_url(proxy) else {
        return builder;
    };
    match reqwest::Proxy::all(&url) {
        Ok(p) => builder.proxy(p),
        Err(e) => {
            tracing::warn!("Invalid proxy URL: {}", e);
            builder
        }
    }
}

/// Shared client for both backend services. Per-request timeouts are set by
/// the callers; `connect_timeout` bounds the handshake.
pub fn build_client(proxy: &ProxySettings, connect_timeout: Duration) -> anyhow::Result<reqwest::Client> {
    Ok(base_builder(proxy, connect_timeout).build()?)
}

/// For job actions. Redirects are returned to the caller instead of followed,
/// since a form-style backend answers every action with a 302 to an HTML page.
pub fn build_action_client(
    proxy: &ProxySettings,
    connect_timeout: Duration,
) -> anyhow::Result<reqwest::Client> {
    Ok(base_builder(proxy, connect_timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

fn base_builder(proxy: &ProxySettings, connect_timeout: Duration) -> reqwest::ClientBuilder {
    let builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(connect_timeout);
    apply_proxy(builder, proxy)
}
