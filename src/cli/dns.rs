//! Dns command - record rundown for a domain

use crate::dns::{Resolver, RECORD_TYPES};

use anyhow::Result;
use console::style;

pub fn run(domain: &str) -> Result<()> {
    let resolver = Resolver::new();

    println!("\n{} DNS records for {}\n", style("🔎").dim(), style(domain).bold());

    let mut has_address = false;

    for record_type in RECORD_TYPES {
        match resolver.lookup(domain, record_type) {
            Ok(records) if records.is_empty() => {
                println!("  {:<6} {}", record_type, style("(none)").dim());
            }
            Ok(records) => {
                if matches!(*record_type, "A" | "AAAA") {
                    has_address = true;
                }
                for record in &records {
                    println!(
                        "  {:<6} {} {}  {}",
                        record.type_name(),
                        style(format!("{:<24}", record.name)).dim(),
                        record.data,
                        style(format!("TTL {}", record.ttl)).dim()
                    );
                }
            }
            // One failed record type never aborts the others.
            Err(e) => {
                println!("  {:<6} {}", record_type, style(format!("lookup failed: {}", e)).red());
            }
        }
    }

    println!();

    if !has_address {
        println!(
            "{} {} has no A or AAAA record — the apex does not resolve",
            style("⚠").yellow(),
            domain
        );
    }

    let www = format!("www.{}", domain);
    let www_resolves = ["A", "CNAME"].iter().any(|t| {
        resolver
            .lookup(&www, t)
            .map(|records| !records.is_empty())
            .unwrap_or(false)
    });
    if www_resolves {
        println!("{} {} resolves", style("✓").green(), www);
    } else {
        println!(
            "{} {} does not resolve — add an A or CNAME record for www",
            style("⚠").yellow(),
            www
        );
    }

    Ok(())
}
