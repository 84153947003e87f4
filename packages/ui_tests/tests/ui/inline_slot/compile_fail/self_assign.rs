// A slot cannot be assigned from itself: the source is borrowed while the target is
// borrowed exclusively.
use inline_slot::Slot;

fn main() {
    let mut slot = Slot::new(String::from("SU-274"));
    slot.assign_from(&slot);
}
