use crate::engine::board::Board;
use crate::engine::types::{Move, Token};

/// 手の選択に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SelectMoveError {
    /// すでにどちらかの4連結が成立している（事前条件違反）。
    AlreadyWon,
    /// 着手可能な列がない（盤面が満杯）。
    BoardFull,
}

/// 手を選択するAI。
pub trait Ai {
    /// 与えられた盤面で `token` 側が次に打つ手を選択する。
    ///
    /// 盤面は値渡し（作業用コピー）なので、呼び出し側の盤面は変化しない。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `SelectMoveError::AlreadyWon`: 盤面がすでに決着している場合
    /// - `SelectMoveError::BoardFull`: 着手可能な列がない場合
    ///
    fn select_move(&mut self, board: Board, token: Token) -> Result<Move, SelectMoveError>;
}
