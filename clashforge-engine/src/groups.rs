//! The group synthesizer: derives the fixed policy-group topology from
//! the node catalog.
//!
//! The topology is recomputed wholesale on every run. Group order, member
//! order and every parameter are a pure function of the fixed category
//! roster and catalog insertion order, so re-running on an unchanged
//! catalog yields identical output.

use crate::catalog::NodeCatalog;
use clashforge_types::{PolicyGroup, DIRECT, REJECT};
use tracing::debug;

/// Name of the latency-test group probing every node.
pub const LATENCY_GROUP: &str = "Auto - UrlTest";

/// Name of the manual-select umbrella group.
pub const UMBRELLA_GROUP: &str = "Proxy";

/// Probe endpoint for the latency-test group.
pub const PROBE_URL: &str = "http://cp.cloudflare.com/generate_204";

/// Probe interval, seconds.
pub const PROBE_INTERVAL_SECS: u32 = 600;

/// Latency difference below which the current pick is kept, milliseconds.
pub const PROBE_TOLERANCE_MS: u32 = 50;

/// The fixed application/service category roster, in output order.
pub const APP_CATEGORIES: [&str; 23] = [
    "Microsoft",
    "AI Suite",
    "Apple",
    "Apple TV",
    "Google FCM",
    "Scholar",
    "Bilibili",
    "Bahamut",
    "HBO Max",
    "Pornhub",
    "Netflix",
    "Disney Plus",
    "Discovery Plus",
    "DAZN",
    "Spotify",
    "Steam",
    "TikTok",
    "miHoYo",
    "Telegram",
    "Crypto",
    "Discord",
    "Speedtest",
    "PayPal",
];

const DOMESTIC_VIDEO_CATEGORY: &str = "Bilibili";
const GLOBAL_TV_GROUP: &str = "Global TV";
const ASIAN_TV_GROUP: &str = "Asian TV";
const CN_TV_GROUP: &str = "CN Mainland TV";

/// Derives the full policy-group topology from the catalog.
///
/// Total: an empty catalog still yields the complete topology (the
/// then-empty latency-test group is the validator's finding, not
/// prevented here).
#[must_use]
pub fn synthesize_groups(catalog: &NodeCatalog) -> Vec<PolicyGroup> {
    let mut groups = Vec::with_capacity(APP_CATEGORIES.len() + 9);

    groups.push(PolicyGroup::latency_test(
        LATENCY_GROUP,
        PROBE_URL,
        PROBE_INTERVAL_SECS,
        PROBE_TOLERANCE_MS,
        catalog.names().map(str::to_string).collect(),
    ));

    groups.push(PolicyGroup::manual_select(
        UMBRELLA_GROUP,
        with_nodes(&[LATENCY_GROUP, DIRECT], catalog),
    ));

    groups.push(PolicyGroup::category_select(
        "Domestic",
        vec![DIRECT.to_string(), UMBRELLA_GROUP.to_string()],
    ));
    groups.push(PolicyGroup::category_select(
        "Others",
        vec![
            UMBRELLA_GROUP.to_string(),
            DIRECT.to_string(),
            "Domestic".to_string(),
        ],
    ));

    for category in APP_CATEGORIES {
        // The domestic video platform defaults to its regional TV group
        // and a direct connection before the umbrella.
        let extra: &[&str] = if category == DOMESTIC_VIDEO_CATEGORY {
            &[CN_TV_GROUP, DIRECT, UMBRELLA_GROUP]
        } else {
            &[UMBRELLA_GROUP, DIRECT]
        };
        groups.push(PolicyGroup::category_select(
            category,
            with_nodes(extra, catalog),
        ));
    }

    groups.push(
        PolicyGroup::category_select(
            "Youtube",
            with_nodes(&[GLOBAL_TV_GROUP, DIRECT, UMBRELLA_GROUP], catalog),
        )
        .with_disable_udp(),
    );

    for blocker in ["AdBlock", "HTTPDNS"] {
        groups.push(PolicyGroup::category_select(
            blocker,
            vec![
                REJECT.to_string(),
                DIRECT.to_string(),
                UMBRELLA_GROUP.to_string(),
            ],
        ));
    }

    groups.push(PolicyGroup::category_select(
        GLOBAL_TV_GROUP,
        with_nodes(&[UMBRELLA_GROUP, DIRECT], catalog),
    ));
    groups.push(PolicyGroup::category_select(
        ASIAN_TV_GROUP,
        with_nodes(&[UMBRELLA_GROUP, DIRECT], catalog),
    ));
    groups.push(PolicyGroup::category_select(
        CN_TV_GROUP,
        vec![DIRECT.to_string(), UMBRELLA_GROUP.to_string()],
    ));

    debug!(groups = groups.len(), nodes = catalog.len(), "synthesized group topology");
    groups
}

/// Fixed members followed by every node name in catalog order.
fn with_nodes(extra: &[&str], catalog: &NodeCatalog) -> Vec<String> {
    extra
        .iter()
        .map(|s| (*s).to_string())
        .chain(catalog.names().map(str::to_string))
        .collect()
}
