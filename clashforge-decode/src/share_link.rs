//! Single-line share-link decoding for `ss://`, `trojan://` and
//! `vmess://`.
//!
//! Shadowsocks links come in two shapes: the plaintext
//! `method:password@host:port` form and the legacy
//! `base64(method:password)@host:port` form. The legacy form is detected
//! by attempting the base64 decode of the userinfo first and falling back
//! to plaintext. Trojan links carry their TLS options as query
//! parameters; vmess links are a base64-wrapped JSON record.

use crate::b64::{decode_forgiving, decode_forgiving_utf8};
use crate::error::{DecodeError, DecodeResult};
use clashforge_types::{
    Node, ProtocolOptions, ShadowsocksOpts, TrojanOpts, VmessOpts, WsOpts,
};
use percent_encoding::percent_decode_str;
use url::Url;

/// Decodes one share link into a canonical node.
pub fn decode_share_link(link: &str) -> DecodeResult<Node> {
    let link = link.trim();
    let (scheme, rest) = link
        .split_once("://")
        .ok_or_else(|| malformed("unknown", "missing scheme", link))?;

    match scheme {
        "ss" => decode_ss(rest),
        "trojan" => decode_trojan(link),
        "vmess" => decode_vmess(rest),
        other => Err(DecodeError::UnsupportedProtocol(other.to_string())),
    }
}

fn malformed(protocol: &'static str, reason: impl Into<String>, fragment: &str) -> DecodeError {
    DecodeError::MalformedShareLink {
        protocol,
        reason: reason.into(),
        fragment: fragment.to_string(),
    }
}

fn decode_ss(rest: &str) -> DecodeResult<Node> {
    // Display label and plugin parameters are not part of the credential
    // payload.
    let body = rest.split(['#', '?']).next().unwrap_or(rest);
    let body = percent_decode_str(body.trim_end_matches('/'))
        .decode_utf8()
        .map_err(|_| malformed("ss", "authority is not valid UTF-8", rest))?;

    let (userinfo, hostport) = body
        .rsplit_once('@')
        .ok_or_else(|| malformed("ss", "missing `@` between credentials and host", rest))?;

    // Legacy links base64-wrap `method:password`; try that reading first.
    let credentials = match decode_forgiving_utf8(userinfo) {
        Some(decoded) if decoded.contains(':') => decoded,
        _ => userinfo.to_string(),
    };
    let (method, password) = credentials
        .split_once(':')
        .ok_or_else(|| malformed("ss", "credentials lack a `:` separator", rest))?;

    let (server, port) = split_host_port("ss", hostport, rest)?;

    Ok(Node::new(
        format!("SS-{server}"),
        server,
        port,
        ProtocolOptions::Shadowsocks(ShadowsocksOpts::new(method, password)),
    ))
}

fn decode_trojan(link: &str) -> DecodeResult<Node> {
    let url = Url::parse(link).map_err(|e| malformed("trojan", e.to_string(), link))?;

    let password = percent_decode_str(url.username())
        .decode_utf8()
        .map_err(|_| malformed("trojan", "password is not valid UTF-8", link))?;
    if password.is_empty() {
        return Err(malformed("trojan", "missing password before `@`", link));
    }
    let server = url
        .host_str()
        .ok_or_else(|| malformed("trojan", "missing host", link))?
        .to_string();
    let port = url.port().unwrap_or(443);

    let mut opts = TrojanOpts::new(password);
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "sni" => opts.sni = Some(value.into_owned()),
            "alpn" => {
                opts.alpn = Some(value.split(',').map(str::to_string).collect());
            }
            "skip-cert-verify" => {
                opts.skip_cert_verify = Some(value.eq_ignore_ascii_case("true"));
            }
            // Unrecognized parameters are ignored, not errors.
            _ => {}
        }
    }

    Ok(Node::new(
        format!("Trojan-{server}"),
        server,
        port,
        ProtocolOptions::Trojan(opts),
    ))
}

fn decode_vmess(payload: &str) -> DecodeResult<Node> {
    let raw = decode_forgiving(payload)
        .ok_or_else(|| malformed("vmess", "payload is not valid base64", payload))?;
    let info: serde_json::Value = serde_json::from_slice(&raw)
        .map_err(|e| malformed("vmess", format!("payload is not JSON: {e}"), payload))?;

    let server = info["add"]
        .as_str()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed("vmess", "missing server address (`add`)", payload))?
        .to_string();
    let port = match &info["port"] {
        serde_json::Value::Null => 443,
        value => json_port(value)
            .ok_or_else(|| malformed("vmess", "invalid port", payload))?,
    };

    let mut opts = VmessOpts::new(info["id"].as_str().unwrap_or_default());
    opts.alter_id = json_u32(&info["aid"]).unwrap_or(0);
    if let Some(scy) = info["scy"].as_str() {
        opts.cipher = scy.to_string();
    }
    if info["tls"].as_str() == Some("tls") {
        opts.tls = Some(true);
    }

    let network = info["net"].as_str().unwrap_or("tcp").to_string();
    match network.as_str() {
        "ws" => {
            opts.ws_opts = Some(WsOpts {
                path: info["path"].as_str().map(str::to_string),
                headers: info["host"].as_str().map(|host| {
                    std::collections::BTreeMap::from([("Host".to_string(), host.to_string())])
                }),
            });
        }
        "h2" => {
            opts.h2_opts = Some(clashforge_types::H2Opts {
                path: info["path"].as_str().map(str::to_string),
                host: None,
            });
        }
        _ => {}
    }
    opts.network = Some(network);

    let name = info["ps"]
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("VMess-{server}"));

    Ok(Node::new(name, server, port, ProtocolOptions::Vmess(opts)))
}

fn split_host_port(
    protocol: &'static str,
    hostport: &str,
    fragment: &str,
) -> DecodeResult<(String, u16)> {
    let (host, port) = hostport
        .rsplit_once(':')
        .ok_or_else(|| malformed(protocol, "missing `:` before port", fragment))?;
    let port: u16 = port
        .parse()
        .ok()
        .filter(|p| *p != 0)
        .ok_or_else(|| malformed(protocol, format!("invalid port `{port}`"), fragment))?;
    Ok((host.to_string(), port))
}

fn json_port(value: &serde_json::Value) -> Option<u16> {
    json_u32(value)
        .filter(|p| (1..=u32::from(u16::MAX)).contains(p))
        .map(|p| p as u16)
}

fn json_u32(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
