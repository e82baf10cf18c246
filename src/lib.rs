//! siteops - operator toolkit for web app maintenance
//!
//! Three small, independent tools behind one binary: a heuristic scanner
//! for JSX/TSX `<button>` elements missing an `onClick` handler, a DNS
//! record diagnostic over DNS-over-HTTPS, and idempotent one-shot source
//! rewrites (import fixing, init injection). No state survives a run.

pub mod classifier;
pub mod cli;
pub mod dns;
pub mod models;
pub mod reporters;
pub mod rewrite;
pub mod scanner;
