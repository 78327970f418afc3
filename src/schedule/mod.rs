//! Randomized pairing of synthetic and real clips.
//!
//! Both clip lists are shuffled independently, then consumed
//! positionally: pair `i` is (synthetic[i], real[i]) up to the length
//! of the shorter list. Each pair's presentation order is decided by an
//! independent coin flip so the auditor cannot infer origin from
//! position.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::discovery::AudioFile;

/// One synthetic and one real clip, in presentation order.
///
/// `first` and `second` are the order the clips are played in, which
/// carries no information about which one is synthetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPair {
    pub first: AudioFile,
    pub second: AudioFile,
}

/// Build the comparison schedule for a session.
///
/// Surplus clips in the longer list are dropped. Either list empty
/// yields an empty schedule. Generic over the random source so tests
/// can seed it; production passes `rand::thread_rng()`.
pub fn build_pairs<R: Rng>(
    mut synthetic: Vec<AudioFile>,
    mut real: Vec<AudioFile>,
    rng: &mut R,
) -> Vec<ComparisonPair> {
    synthetic.shuffle(rng);
    real.shuffle(rng);

    let count = synthetic.len().min(real.len());
    synthetic.truncate(count);
    real.truncate(count);

    synthetic
        .into_iter()
        .zip(real)
        .map(|(synth, real)| {
            if rng.gen_bool(0.5) {
                ComparisonPair {
                    first: synth,
                    second: real,
                }
            } else {
                ComparisonPair {
                    first: real,
                    second: synth,
                }
            }
        })
        .collect()
}
