//! Sonar and radar sweeps

use galley_core::narration::{Narration, Narrator};
use galley_core::traits::ContactKind;
use rand::{Rng, RngCore};

/// Sweep once for a contact
///
/// The outcome is a fair coin drawn from `rng`: true (located) when the
/// next `u64` falls in the lower half of its range.
pub fn sweep<R: RngCore + ?Sized>(
    contact: ContactKind,
    rng: &mut R,
    narrator: &mut dyn Narrator,
) -> bool {
    narrator.narrate(Narration::Scanning(contact));

    let located = rng.gen_bool(0.5);
    if located {
        narrator.narrate(Narration::ContactLocated(contact));
    } else {
        narrator.narrate(Narration::ContactLost(contact));
    }
    located
}
