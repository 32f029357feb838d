use crate::*;
pub use random::*;

mod random;

/// Strategy for placing mines on a board described by a validated [`GameConfig`].
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}
