//! Tracing configuration for inspecting rewrite decisions.
//!
//! Supports three output formats controlled by `VBCS_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Every pass-through and rewrite decision of the nullable pass
//! VBCS_LOG=vbcs_nullable=trace VBCS_LOG_FORMAT=tree my-translator Module1.vb
//!
//! # Only helper registrations and rewrites
//! VBCS_LOG=vbcs_nullable=debug my-translator Module1.vb
//!
//! # A bare level applies to the vbcs crates only; everything else stays at warn
//! VBCS_LOG=trace my-translator Module1.vb
//! ```
//!
//! The subscriber is only initialised when `VBCS_LOG` (or `RUST_LOG`) is set,
//! so there is zero overhead in normal builds.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `VBCS_LOG_FORMAT` value. Unknown values select `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("VBCS_LOG_FORMAT").unwrap_or_default())
    }
}

/// Directives used when `VBCS_LOG` is set but empty.
pub const DEFAULT_DIRECTIVES: &str = "warn,vbcs=info,vbcs_nullable=debug";

/// Targets a bare `VBCS_LOG` level is scoped to.
const VBCS_TARGETS: [&str; 3] = ["vbcs", "vbcs_syntax", "vbcs_nullable"];

/// Expand a `VBCS_LOG` value into `EnvFilter` directives.
///
/// A bare level such as `trace` is scoped to the vbcs targets. Values that
/// already name targets (`vbcs_nullable=trace,warn`) are used as given.
pub fn filter_directives(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return DEFAULT_DIRECTIVES.to_string();
    }
    if value.contains('=') || value.contains(',') {
        return value.to_string();
    }
    let mut directives = String::from("warn");
    for target in VBCS_TARGETS {
        directives.push(',');
        directives.push_str(target);
        directives.push('=');
        directives.push_str(value);
    }
    directives
}

/// Build an `EnvFilter` from `VBCS_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("VBCS_LOG") {
        EnvFilter::builder().parse_lossy(filter_directives(&val))
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `VBCS_LOG` nor `RUST_LOG` is set. Output goes to
/// stderr so it never mixes with generated code on stdout.
pub fn init_tracing() {
    let has_vbcs_log = std::env::var("VBCS_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_vbcs_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    // An already installed global subscriber is left in place.
    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}
