use clashforge_types::{
    Node, PluginOpts, Protocol, ProtocolOptions, ShadowsocksOpts, TrojanOpts, VmessOpts, WsOpts,
};
use pretty_assertions::assert_eq;

fn roundtrip(node: &Node) -> Node {
    let yaml = serde_yaml::to_string(node).unwrap();
    serde_yaml::from_str(&yaml).unwrap()
}

// ── Protocol ─────────────────────────────────────────────────────

#[test]
fn protocol_tags_roundtrip() {
    for protocol in [
        Protocol::Shadowsocks,
        Protocol::Trojan,
        Protocol::Vmess,
        Protocol::Vless,
        Protocol::Hysteria2,
        Protocol::Tuic,
        Protocol::Anytls,
        Protocol::Wireguard,
    ] {
        assert_eq!(Protocol::from_tag(protocol.as_str()), Some(protocol));
    }
}

#[test]
fn protocol_unknown_tag() {
    assert_eq!(Protocol::from_tag("socks5"), None);
    assert_eq!(Protocol::from_tag(""), None);
}

#[test]
fn protocol_display_matches_tag() {
    assert_eq!(Protocol::Shadowsocks.to_string(), "ss");
    assert_eq!(Protocol::Hysteria2.to_string(), "hysteria2");
}

// ── Structured record round-trips ────────────────────────────────

#[test]
fn shadowsocks_roundtrip() {
    let mut opts = ShadowsocksOpts::new("2022-blake3-aes-128-gcm", "secret");
    opts.udp = Some(true);
    opts.plugin = Some("obfs".to_string());
    opts.plugin_opts = Some(PluginOpts {
        mode: "tls".to_string(),
        host: Some("bing.com".to_string()),
    });
    let node = Node::new("SS-Region-01", "ss.example.com", 8888, ProtocolOptions::Shadowsocks(opts));
    assert_eq!(roundtrip(&node), node);
}

#[test]
fn trojan_roundtrip() {
    let mut opts = TrojanOpts::new("secret");
    opts.sni = Some("trojan.example.com".to_string());
    opts.skip_cert_verify = Some(false);
    opts.udp = Some(true);
    opts.client_fingerprint = Some("chrome".to_string());
    let node = Node::new("Trojan-Region-01", "127.0.0.1", 443, ProtocolOptions::Trojan(opts));
    assert_eq!(roundtrip(&node), node);
}

#[test]
fn vmess_roundtrip_with_ws() {
    let mut opts = VmessOpts::new("00000000-0000-0000-0000-000000000000");
    opts.tls = Some(true);
    opts.network = Some("ws".to_string());
    opts.ws_opts = Some(WsOpts::new("/", Some("vmess.example.com".to_string())));
    let node = Node::new("Vmess-Region-01", "vmess.example.com", 443, ProtocolOptions::Vmess(opts));
    assert_eq!(roundtrip(&node), node);
}

#[test]
fn vmess_alter_id_spelling() {
    let node = Node::new(
        "v",
        "vmess.example.com",
        443,
        ProtocolOptions::Vmess(VmessOpts::new("uuid-here")),
    );
    let yaml = serde_yaml::to_string(&node).unwrap();
    assert!(yaml.contains("alterId: 0"), "got: {yaml}");
    assert!(!yaml.contains("alter-id"), "got: {yaml}");
}

#[test]
fn hysteria2_roundtrip() {
    let yaml = r#"
name: Hy2-Region-01
server: hy2.example.com
port: 443
type: hysteria2
password: auth-secret
sni: www.bing.com
skip-cert-verify: true
up: 50 Mbps
down: 100 Mbps
alpn:
  - h3
ip-version: ipv4-prefer
"#;
    let node: Node = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(node.protocol(), Protocol::Hysteria2);
    assert_eq!(node.ip_version.as_deref(), Some("ipv4-prefer"));
    assert_eq!(roundtrip(&node), node);
}

#[test]
fn tuic_roundtrip() {
    let yaml = r#"
name: Tuic-Region-01
server: tuic.example.com
port: 8443
type: tuic
uuid: 00000000-0000-0000-0000-000000000000
password: secret
congestion-controller: bbr
udp-relay-mode: native
reduce-rtt: true
alpn:
  - h3
sni: tuic.example.com
"#;
    let node: Node = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(node.protocol(), Protocol::Tuic);
    assert_eq!(roundtrip(&node), node);
}

#[test]
fn vless_roundtrip_with_reality() {
    let yaml = r#"
name: Vless-Region-01
server: vless.example.com
port: 443
type: vless
uuid: 00000000-0000-0000-0000-000000000000
tls: true
servername: vless.example.com
flow: xtls-rprx-vision
client-fingerprint: chrome
reality-opts:
  public-key: pk-value
  short-id: abcd
"#;
    let node: Node = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(node.protocol(), Protocol::Vless);
    assert_eq!(roundtrip(&node), node);
}

#[test]
fn wireguard_roundtrip() {
    let yaml = r#"
name: WG-Region-01
server: 1.2.3.4
port: 51820
type: wireguard
ip: 10.0.0.2
private-key: priv
public-key: pub
mtu: 1420
udp: true
"#;
    let node: Node = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(node.protocol(), Protocol::Wireguard);
    assert_eq!(roundtrip(&node), node);
}

#[test]
fn anytls_roundtrip() {
    let yaml = r#"
name: AnyTLS-Region-01
server: anytls.example.com
port: 443
type: anytls
password: secret
sni: anytls.example.com
idle-session-check-interval: 30
idle-session-timeout: 180
min-idle-session: 2
"#;
    let node: Node = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(node.protocol(), Protocol::Anytls);
    assert_eq!(roundtrip(&node), node);
}

// ── Optional fields ──────────────────────────────────────────────

#[test]
fn unset_options_are_not_serialized() {
    let node = Node::new(
        "bare",
        "example.com",
        8388,
        ProtocolOptions::Shadowsocks(ShadowsocksOpts::new("aes-128-gcm", "pw")),
    );
    let yaml = serde_yaml::to_string(&node).unwrap();
    assert!(!yaml.contains("udp"), "got: {yaml}");
    assert!(!yaml.contains("plugin"), "got: {yaml}");
    assert!(!yaml.contains("dialer-proxy"), "got: {yaml}");
}

#[test]
fn dialer_proxy_roundtrip() {
    let mut node = Node::new(
        "chained",
        "example.com",
        8388,
        ProtocolOptions::Shadowsocks(ShadowsocksOpts::new("aes-128-gcm", "pw")),
    );
    node.dialer_proxy = Some("front".to_string());
    assert_eq!(roundtrip(&node), node);
}

#[test]
fn vmess_defaults_applied_on_decode() {
    let yaml = r#"
name: v
server: s.example.com
port: 443
type: vmess
uuid: uuid-here
"#;
    let node: Node = serde_yaml::from_str(yaml).unwrap();
    let ProtocolOptions::Vmess(opts) = &node.options else {
        panic!("expected vmess options");
    };
    assert_eq!(opts.alter_id, 0);
    assert_eq!(opts.cipher, "auto");
}
