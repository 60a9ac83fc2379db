//! Canonical proxy node records.
//!
//! A [`Node`] is the normalized form every external node notation decodes
//! into. The protocol-specific attribute bag of the source formats becomes
//! a `type`-tagged union ([`ProtocolOptions`]): one variant per supported
//! protocol, each with a fixed field set, so a missing credential is a
//! deserialization error instead of a runtime map lookup.
//!
//! Field names follow the consumer document format (kebab-case, with
//! `alterId` as the historical camelCase exception), so a node decoded
//! from a structured record re-encodes field-for-field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed set of supported proxy protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[serde(rename = "ss")]
    Shadowsocks,
    Trojan,
    Vmess,
    Vless,
    Hysteria2,
    Tuic,
    Anytls,
    Wireguard,
}

impl Protocol {
    /// The wire tag used in structured records and share links.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shadowsocks => "ss",
            Self::Trojan => "trojan",
            Self::Vmess => "vmess",
            Self::Vless => "vless",
            Self::Hysteria2 => "hysteria2",
            Self::Tuic => "tuic",
            Self::Anytls => "anytls",
            Self::Wireguard => "wireguard",
        }
    }

    /// Looks up a protocol by its wire tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ss" => Some(Self::Shadowsocks),
            "trojan" => Some(Self::Trojan),
            "vmess" => Some(Self::Vmess),
            "vless" => Some(Self::Vless),
            "hysteria2" => Some(Self::Hysteria2),
            "tuic" => Some(Self::Tuic),
            "anytls" => Some(Self::Anytls),
            "wireguard" => Some(Self::Wireguard),
            _ => None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canonical proxy endpoint.
///
/// `name` is the display identifier referenced by policy-group members;
/// uniqueness within a catalog is enforced by the engine, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub server: String,
    pub port: u16,
    #[serde(flatten)]
    pub options: ProtocolOptions,
    /// IP protocol preference (`dual`, `ipv4-prefer`, ...). Absent means
    /// the consumer default.
    #[serde(rename = "ip-version", default, skip_serializing_if = "Option::is_none")]
    pub ip_version: Option<String>,
    /// Name of another node used as the dialing hop (chained proxy).
    #[serde(rename = "dialer-proxy", default, skip_serializing_if = "Option::is_none")]
    pub dialer_proxy: Option<String>,
}

impl Node {
    /// Creates a node with no cross-protocol extras set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        server: impl Into<String>,
        port: u16,
        options: ProtocolOptions,
    ) -> Self {
        Self {
            name: name.into(),
            server: server.into(),
            port,
            options,
            ip_version: None,
            dialer_proxy: None,
        }
    }

    /// The protocol discriminant of this node's option set.
    #[must_use]
    pub fn protocol(&self) -> Protocol {
        match self.options {
            ProtocolOptions::Shadowsocks(_) => Protocol::Shadowsocks,
            ProtocolOptions::Trojan(_) => Protocol::Trojan,
            ProtocolOptions::Vmess(_) => Protocol::Vmess,
            ProtocolOptions::Vless(_) => Protocol::Vless,
            ProtocolOptions::Hysteria2(_) => Protocol::Hysteria2,
            ProtocolOptions::Tuic(_) => Protocol::Tuic,
            ProtocolOptions::Anytls(_) => Protocol::Anytls,
            ProtocolOptions::Wireguard(_) => Protocol::Wireguard,
        }
    }
}

/// Protocol-specific options, tagged by the record's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProtocolOptions {
    #[serde(rename = "ss")]
    Shadowsocks(ShadowsocksOpts),
    Trojan(TrojanOpts),
    Vmess(VmessOpts),
    Vless(VlessOpts),
    Hysteria2(Hysteria2Opts),
    Tuic(TuicOpts),
    Anytls(AnytlsOpts),
    Wireguard(WireguardOpts),
}

/// Shadowsocks credentials and transport options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ShadowsocksOpts {
    pub cipher: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_over_tcp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_opts: Option<PluginOpts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl ShadowsocksOpts {
    /// Bare cipher + password, everything else unset.
    #[must_use]
    pub fn new(cipher: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            cipher: cipher.into(),
            password: password.into(),
            udp: None,
            udp_over_tcp: None,
            plugin: None,
            plugin_opts: None,
            tfo: None,
            network: None,
        }
    }
}

/// Obfuscation plugin options for shadowsocks (`obfs` plugin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOpts {
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// Trojan credentials and TLS/transport options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrojanOpts {
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpn: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws_opts: Option<WsOpts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc_opts: Option<GrpcOpts>,
}

impl TrojanOpts {
    /// Bare password, everything else unset.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            sni: None,
            alpn: None,
            skip_cert_verify: None,
            udp: None,
            client_fingerprint: None,
            network: None,
            ws_opts: None,
            grpc_opts: None,
        }
    }
}

/// VMess identity and transport options.
///
/// `alterId` keeps its camelCase spelling, the one exception to the
/// kebab-case convention, inherited from the consumer format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VmessOpts {
    pub uuid: String,
    #[serde(rename = "alterId", default)]
    pub alter_id: u32,
    #[serde(default = "default_vmess_cipher")]
    pub cipher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws_opts: Option<WsOpts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2_opts: Option<H2Opts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc_service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servername: Option<String>,
}

impl VmessOpts {
    /// UUID with the consumer defaults (`alterId: 0`, `cipher: auto`).
    #[must_use]
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            alter_id: 0,
            cipher: default_vmess_cipher(),
            tls: None,
            network: None,
            ws_opts: None,
            h2_opts: None,
            grpc_service_name: None,
            skip_cert_verify: None,
            servername: None,
        }
    }
}

fn default_vmess_cipher() -> String {
    "auto".to_string()
}

/// VLESS identity, flow and Reality options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VlessOpts {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servername: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reality_opts: Option<RealityOpts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<bool>,
}

/// Reality key material for VLESS flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RealityOpts {
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
}

/// Hysteria2 credentials, bandwidth hints and obfuscation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Hysteria2Opts {
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    /// Uplink capacity hint, e.g. `"50 Mbps"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<String>,
    /// Downlink capacity hint, e.g. `"100 Mbps"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpn: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfs: Option<ObfsOpts>,
    /// Port-hopping range, e.g. `"20000-40000"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hop_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// Traffic obfuscation options for hysteria2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObfsOpts {
    #[serde(rename = "type")]
    pub obfs_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// TUIC identity and QUIC tuning options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TuicOpts {
    pub uuid: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion_controller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_relay_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpn: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_sni: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_rtt: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast_open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heartbeat_interval: Option<u32>,
}

/// AnyTLS credentials and session pool tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AnytlsOpts {
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpn: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_session_check_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_session_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_idle_session: Option<u32>,
}

/// WireGuard endpoint key material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WireguardOpts {
    /// Interface address inside the tunnel.
    pub ip: String,
    pub private_key: String,
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<bool>,
}

/// WebSocket transport options (vmess/trojan `ws` network).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WsOpts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Extra request headers; `Host` is the one the decoders populate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

impl WsOpts {
    /// Path plus an optional `Host` header.
    #[must_use]
    pub fn new(path: impl Into<String>, host: Option<String>) -> Self {
        Self {
            path: Some(path.into()),
            headers: host.map(|h| BTreeMap::from([("Host".to_string(), h)])),
        }
    }
}

/// HTTP/2 transport options (vmess `h2` network).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct H2Opts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Vec<String>>,
}

/// gRPC transport options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GrpcOpts {
    pub grpc_service_name: String,
}
