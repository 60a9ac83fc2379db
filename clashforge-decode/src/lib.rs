//! Node decoders for the clashforge engine.
//!
//! This crate turns the external node notations into canonical
//! [`clashforge_types::Node`] records:
//! - YAML batches of structured node records ([`decode_records`]), with a
//!   one-shot indentation repair pass for the common over-indented paste
//!   artifact
//! - single-line share links for `ss://`, `trojan://` and `vmess://`
//!   ([`decode_share_link`])
//! - base64-wrapped subscription payloads ([`unwrap_base64`])
//!
//! Every decoder is a pure transform: no I/O, no state. Errors are local
//! to one input item and name the offending fragment, so the caller can
//! skip-and-report per item.

mod b64;
mod error;
mod records;
mod repair;
mod share_link;

pub use error::{DecodeError, DecodeResult};
pub use records::{decode_records, unwrap_base64};
pub use repair::repair_indentation;
pub use share_link::decode_share_link;
