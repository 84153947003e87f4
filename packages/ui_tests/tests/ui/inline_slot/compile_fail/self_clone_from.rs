// `clone_from` forwards to `assign_from`, so it rejects a slot as its own source too.
use inline_slot::Slot;

fn main() {
    let mut slot = Slot::new(String::from("SU-274"));
    slot.clone_from(&slot);
}
