/// Hands out one seed per new board.
///
/// A fixed start seed makes a whole play session reproducible: boards get `seed`, `seed + 1`, ...
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSource {
    Sequence(u64),
    Random,
}

impl SeedSource {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Sequence(seed),
            None => Self::Random,
        }
    }

    pub fn next_seed(&mut self) -> u64 {
        match self {
            Self::Sequence(next) => {
                let seed = *next;
                *next = next.wrapping_add(1);
                seed
            }
            Self::Random => rand::random(),
        }
    }
}
