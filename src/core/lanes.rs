use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly shuffled copy of `lanes`. Floating decorations keep their own
/// animation and only swap which lane they sit in.
pub fn shuffle_lanes<R: Rng>(lanes: &[&'static str], rng: &mut R) -> Vec<&'static str> {
    let mut out = lanes.to_vec();
    out.shuffle(rng);
    out
}
