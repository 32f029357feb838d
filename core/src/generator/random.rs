use super::*;

/// Places mines uniformly at random, without replacement, over the flattened board.
///
/// The generator owns its seed, so the same seed and config always produce the same layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let size = config.size();
        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(square_dim(size));
        {
            let cells = mine_mask
                .as_slice_mut()
                .expect("freshly allocated array is in standard layout");
            for place in rand::seq::index::sample(&mut rng, total_cells, mines) {
                cells[place] = true;
            }
        }

        log::debug!(
            "Placed {} mines on a {}x{} board (seed {})",
            mines,
            size,
            size,
            self.seed
        );
        MineLayout::new_unchecked(mine_mask, config.mines())
    }
}
