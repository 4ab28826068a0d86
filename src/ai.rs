/// ミニマックス探索（αβ枝刈り付き）AI。
pub mod minimax;
/// 着手可能な列からランダムに1手選ぶAI。
pub mod random;
pub mod types;

pub type SelectMoveError = types::SelectMoveError;
