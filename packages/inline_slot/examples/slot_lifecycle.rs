//! Walks a `Slot` through its lifecycle and logs the operations performed on the contained value.
//!
//! Run with `RUST_LOG=debug` (the default) to see the counters after every step.

use inline_slot::Slot;
use testing::{Ledger, Tracked};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let ledger = Ledger::new();

    {
        let mut source = Tracked::with_payload(&ledger, 274);

        let copied = Slot::from_ref(&source);
        info!(engaged = copied.has_value(), "copy-constructed a slot from a value");
        ledger.log_summary();

        let mut moved = Slot::new(Tracked::moved_from(&mut source));
        info!(engaged = moved.has_value(), "move-constructed a slot from a value");
        ledger.log_summary();

        moved.assign_from(&copied);
        info!("copy-assigned an engaged slot over an engaged slot");
        ledger.log_summary();

        moved.emplace_with(|| Tracked::with_payload(&ledger, 777));
        info!(
            payload = moved.value().map(Tracked::payload).unwrap_or_default(),
            "emplaced a new value"
        );
        ledger.log_summary();

        moved.reset();
        info!(engaged = moved.has_value(), "reset the slot");
        ledger.log_summary();

        match moved.value() {
            Ok(value) => info!(payload = value.payload(), "unexpected value"),
            Err(error) => info!(%error, "checked access on an empty slot"),
        }
    }

    info!(live = ledger.live(), "all slots and values are gone");
    ledger.log_summary();
}
