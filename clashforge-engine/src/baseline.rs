//! The built-in baseline rule-set.
//!
//! A conservative direct-connect preset: domestic platforms, vendor
//! telemetry endpoints and local download tooling bypass the proxy, CN
//! traffic resolves direct, and a terminal `MATCH` routes the rest to the
//! umbrella group. Supplied to the merger as the `preset-baseline` layer;
//! callers substitute their own baseline by passing a different layer.

use clashforge_types::{LayerOrigin, RuleLayer};

/// The baseline rules in rule-line text form, one per line.
pub const BASELINE_RULES: &str = "\
# Connectivity checks and vendor endpoints
DOMAIN-SUFFIX,weather.com,DIRECT
DOMAIN-KEYWORD,testipv6,DIRECT
GEOSITE,category-public-tracker,DIRECT
DOMAIN-SUFFIX,microsoft.com,DIRECT
DOMAIN-SUFFIX,apple.com,DIRECT
DOMAIN,gateway.icloud.com,DIRECT
DOMAIN,metrics.icloud.com,DIRECT
DOMAIN-SUFFIX,dbankcdn.com,DIRECT
DOMAIN-SUFFIX,dbankcloud.cn,DIRECT

# Domestic streaming and applications
DOMAIN-SUFFIX,bilibili.com,DIRECT
DOMAIN-SUFFIX,bilivideo.com,DIRECT
DOMAIN-SUFFIX,douyin.com,DIRECT
DOMAIN-SUFFIX,douyincdn.com,DIRECT
DOMAIN-SUFFIX,huya.com,DIRECT
DOMAIN-SUFFIX,iqiyi.com,DIRECT
DOMAIN-SUFFIX,qq.com,DIRECT
DOMAIN-SUFFIX,tencent.com,DIRECT
DOMAIN-SUFFIX,alicdn.com,DIRECT
DOMAIN-SUFFIX,taobao.com,DIRECT
DOMAIN-SUFFIX,jd.com,DIRECT
DOMAIN-SUFFIX,163.com,DIRECT
DOMAIN-SUFFIX,126.net,DIRECT
DOMAIN-SUFFIX,mgtv.com,DIRECT
DOMAIN-SUFFIX,zhihu.com,DIRECT
DOMAIN-SUFFIX,xhscdn.com,DIRECT

# Download tooling stays off the proxy
PROCESS-NAME,aria2c,DIRECT
PROCESS-NAME,qbittorrent,DIRECT
PROCESS-NAME,Thunder,DIRECT
PROCESS-NAME,transmission-daemon,DIRECT
PROCESS-NAME,transmission-qt,DIRECT
PROCESS-NAME,uTorrent,DIRECT
PROCESS-NAME,WebTorrent,DIRECT
PROCESS-NAME,v2ray,DIRECT
PROCESS-NAME,ss-local,DIRECT
PROCESS-NAME,trojan-go,DIRECT
PROCESS-NAME,xray,DIRECT
PROCESS-NAME,hysteria,DIRECT
PROCESS-NAME,singbox,DIRECT

# CN traffic direct, everything else to the umbrella
GEOIP,CN,DIRECT,no-resolve
MATCH,Proxy
";

/// The baseline as a ready-to-merge `preset-baseline` layer.
#[must_use]
pub fn default_layer() -> RuleLayer {
    // The constant above is part of the crate; a parse failure here is a
    // build defect, not an input error.
    RuleLayer::parse(LayerOrigin::PresetBaseline, BASELINE_RULES)
        .expect("built-in baseline rules parse")
}
