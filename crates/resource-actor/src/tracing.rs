//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` fmt layer used by every binary built
//! on this crate.
//!
//! ## Configuration
//!
//! - **Filtering** via the `RUST_LOG` environment variable (errors only when unset)
//! - **Compact format** with span names inline and without module targets; actors log an
//!   `entity_type` field instead
//! - **stderr output**, so logs never interleave with what a program prints or prompts on stdout
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` / `Shutdown` with the final store size
//! - **Requests**: `Create`, `Get`, `List`, `Delete`, `Action` at debug level with payloads
//! - **Outcomes**: `Created`, `Deleted`, `Action ok` at info level; failures at warn level
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and outcomes
//! RUST_LOG=debug cargo run    # full request payloads
//! ```
//!
//! With `RUST_LOG=info` a rental looks like:
//!
//! ```text
//! INFO rent: Created entity_type="Rental" id=rental_1 size=1
//! INFO rent: Action ok entity_type="StockEntry" id=spider man
//! ```

/// Installs the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
