use crate::engine::board::{Board, PlaceError};
use crate::engine::types::{Move, Token};

/// ゲームの結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Outcome {
    /// 引き分け（盤面が埋まり、勝者なし）。
    Draw,
    /// 進行中。
    Ongoing,
    /// 指定トークンの勝ち。
    Won(Token),
}

/// 1手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 指定列には置けない（満杯または範囲外）。
    IllegalMove,
}

/// 1ゲームの進行を管理する構造体。
///
/// 盤面への確定手の適用と手番の交代だけを担う。結果（勝敗・引き分け）は
/// 保持せず、`outcome` が盤面と最終手から毎回導出する。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 最後に確定した手。
    last_move: Option<Move>,
    /// 現手番。
    side_to_move: Token,
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(self) -> Board {
        self.board
    }

    /// 空の盤面・赤先手でゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self::new(Token::Red)
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(self) -> bool {
        !matches!(self.outcome(), Outcome::Ongoing)
    }

    /// 最後に確定した手を返す。
    #[inline]
    #[must_use]
    pub const fn last_move(self) -> Option<Move> {
        self.last_move
    }

    /// 空の盤面から、指定トークンを先手にしてゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn new(first_to_move: Token) -> Self {
        Self {
            board: Board::empty(),
            last_move: None,
            side_to_move: first_to_move,
        }
    }

    /// 現在のゲーム結果を導出して返す。
    ///
    /// 最終手を通る4連結の有無を先に調べ、なければ満杯（引き分け）を調べる。
    #[inline]
    #[must_use]
    pub fn outcome(self) -> Outcome {
        if let Some(last) = self.last_move {
            if self.board.check_win(last) {
                if let Some(token) = self.board.piece_at(last) {
                    return Outcome::Won(token);
                }
            }
        }

        if self.board.is_full() {
            return Outcome::Draw;
        }

        Outcome::Ongoing
    }

    /// 現手番のトークンを指定列に落とし、手番を交代する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 指定列に置けない場合
    ///
    #[inline]
    pub fn play(&mut self, column: u8) -> Result<Outcome, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let mv = match self.board.drop_move(column) {
            Some(value) => value,
            None => return Err(PlayError::IllegalMove),
        };

        if let Err(err) = self.board.place(mv, self.side_to_move) {
            return Err(match err {
                PlaceError::IllegalMove => PlayError::IllegalMove,
            });
        }

        self.last_move = Some(mv);
        self.side_to_move = self.side_to_move.opponent();

        Ok(self.outcome())
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(self) -> Token {
        self.side_to_move
    }
}
