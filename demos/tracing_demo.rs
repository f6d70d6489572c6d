//! Demonstrates tracing output from comparison validators
//!
//! Run with: cargo run --example tracing_demo --features tracing

use likewise::prelude::*;

struct Transfer {
    from_account: String,
    to_account: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let distinct_accounts =
        ComparisonValidator::not_equal_to_member(member!(Transfer, from_account as "From Account"));

    let transfers = [
        Transfer {
            from_account: "GB-001".to_string(),
            to_account: "GB-002".to_string(),
        },
        Transfer {
            from_account: "GB-001".to_string(),
            to_account: "GB-001".to_string(),
        },
    ];

    for transfer in &transfers {
        let ctx = ValidationContext::new(transfer, transfer.to_account.clone())
            .with_member_name("To Account");
        match distinct_accounts.validate(&ctx) {
            Ok(result) => tracing::info!("transfer check: {}", result),
            Err(err) => tracing::error!("transfer check failed: {}", err),
        }
    }

    // Member targets need an owning object; this is reported, not panicked on
    let detached = ValidationContext::detached("GB-003".to_string()).with_member_name("To Account");
    if let Err(err) = distinct_accounts.validate(&detached) {
        tracing::warn!("{}", err);
    }
}
