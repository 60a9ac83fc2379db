//! Shared builders for engine tests.

#![allow(dead_code)]

use clashforge_engine::NodeCatalog;
use clashforge_types::{Node, ProtocolOptions, ShadowsocksOpts, TrojanOpts};

pub fn ss_node(name: &str, server: &str) -> Node {
    Node::new(
        name,
        server,
        8388,
        ProtocolOptions::Shadowsocks(ShadowsocksOpts::new("aes-128-gcm", "pw")),
    )
}

pub fn trojan_node(name: &str, server: &str) -> Node {
    Node::new(name, server, 443, ProtocolOptions::Trojan(TrojanOpts::new("pw")))
}

pub fn catalog_of(names: &[&str]) -> NodeCatalog {
    let mut catalog = NodeCatalog::new();
    for (i, name) in names.iter().enumerate() {
        catalog
            .insert(ss_node(name, &format!("10.0.0.{i}")))
            .unwrap();
    }
    catalog
}
