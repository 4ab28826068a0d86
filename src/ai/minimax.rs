use crate::ai::types::{Ai, SelectMoveError};
use crate::engine::board::Board;
use crate::engine::types::{BOARD_WIDTH, Move, Token};

/// 探索深さの上限（固定の構成定数）。
pub const MAX_DEPTH: u8 = 8;

/// 勝敗スコアの基準点。
///
/// どの深さで見つけた勝ちも深さ切りの中立値 0 と区別できるよう、
/// `MAX_DEPTH + 1` より大きく取る。勝ちは `SCORE_WIN - d`、負けは
/// `d - SCORE_WIN`（`d` は根からの深さ）で、早い勝ちほど高く、
/// 遅い負けほど 0 に近い。
const SCORE_WIN: i32 = 10;

/// ミニマックス探索（αβ枝刈り付き）を行うAI。
///
/// 評価は終端（4連結・満杯）と深さ切りでのみ行い、途中局面の
/// ヒューリスティック評価は持たない。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 探索深さの上限。
    depth: u8,
}

impl Agent {
    /// 探索深さを返す。
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u8 {
        self.depth
    }

    /// `depth` を指定して初期化する。深さは `1..=MAX_DEPTH` に丸める。
    #[inline]
    #[must_use]
    pub const fn new(depth: u8) -> Self {
        Self {
            depth: clamp_depth(depth),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: Board, token: Token) -> Result<Move, SelectMoveError> {
        if board.winner().is_some() {
            return Err(SelectMoveError::AlreadyWon);
        }

        let config = SearchConfig {
            ai_token: token,
            max_depth: self.depth,
        };

        let mut work = board;
        let result = match select_best_move(config, &mut work) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };

        tracing::debug!(
            column = u32::from(result.best_move().column()),
            row = u32::from(result.best_move().row()),
            score = result.best_score(),
            depth = u32::from(self.depth),
            "minimax selected move"
        );

        Ok(result.best_move())
    }
}

/// 探索全体で共有する設定。
#[derive(Copy, Clone, Debug)]
struct SearchConfig {
    /// 探索する側のトークン。
    ai_token: Token,
    /// 探索深さの上限。
    max_depth: u8,
}

/// 探索結果（ルートでの最善手とその評価値）。
#[derive(Copy, Clone, Debug)]
struct SearchResult {
    /// ルートで選択した最善手。
    best_move: Move,
    /// `best_move` の評価値。
    best_score: i32,
}

impl SearchResult {
    /// ルートで選択した最善手を返す。
    const fn best_move(self) -> Move {
        self.best_move
    }

    /// `best_move` の評価値を返す。
    const fn best_score(self) -> i32 {
        self.best_score
    }
}

/// 探索深さを `1..=MAX_DEPTH` に丸める。
#[inline]
const fn clamp_depth(depth: u8) -> u8 {
    if depth == u8::MIN {
        u8::MIN.wrapping_add(1)
    } else if depth > MAX_DEPTH {
        MAX_DEPTH
    } else {
        depth
    }
}

/// ミニマックス本体。
///
/// `last` はこの局面を作った直前の手（`to_move` の相手が置いた石）。
/// αβ値はこの呼び出しの引数と戻り値としてだけ受け渡し、兄弟枝の間で
/// 共有しない。仮置きは戻る前に必ず巻き戻す（枝刈りで抜ける経路も含む）。
fn minimax(
    config: SearchConfig,
    board: &mut Board,
    to_move: Token,
    depth: u8,
    last: Move,
    alpha_in: i32,
    beta_in: i32,
) -> i32 {
    // 1. 終端: 直前の手で4連結が成立していれば、深さで割り引いた勝敗値。
    if board.check_win(last) {
        let depth_i32 = i32::from(depth);
        return if to_move.opponent() == config.ai_token {
            SCORE_WIN.wrapping_sub(depth_i32)
        } else {
            depth_i32.wrapping_sub(SCORE_WIN)
        };
    }

    // 2. 引き分け: 満杯かつ勝ちなし。
    if board.is_full() {
        return 0_i32;
    }

    // 3. 深さ切り: 盤面評価は行わず、中立値を返す。
    if depth > config.max_depth {
        return 0_i32;
    }

    // 4. 分岐: 列昇順に仮置きして再帰し、すぐ巻き戻す。
    let maximizing = to_move == config.ai_token;
    let next_depth = depth.wrapping_add(1);
    let next_to_move = to_move.opponent();
    let mut alpha = alpha_in;
    let mut beta = beta_in;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for column in u8::MIN..BOARD_WIDTH {
        let mv = match board.drop_move(column) {
            Some(value) => value,
            None => continue,
        };
        if board.place(mv, to_move).is_err() {
            continue;
        }

        let score = minimax(config, board, next_to_move, next_depth, mv, alpha, beta);

        if board.unplace(mv).is_err() {
            // drop_move 直後の仮置きの巻き戻しは失敗しない。
            break;
        }

        if maximizing {
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if score < best {
                best = score;
            }
            if best < beta {
                beta = best;
            }
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// ルート探索。列昇順に仮置きして子局面を探索し、最善手を返す。
///
/// 同点の手は最初に見つかったもの（最小の列番号）を保持する。
fn select_best_move(
    config: SearchConfig,
    board: &mut Board,
) -> Result<SearchResult, SelectMoveError> {
    let mut best: Option<SearchResult> = None;
    let mut alpha = i32::MIN;
    let beta = i32::MAX;

    for column in u8::MIN..BOARD_WIDTH {
        let mv = match board.drop_move(column) {
            Some(value) => value,
            None => continue,
        };
        if board.place(mv, config.ai_token).is_err() {
            continue;
        }

        let score = minimax(
            config,
            board,
            config.ai_token.opponent(),
            u8::MIN.wrapping_add(1),
            mv,
            alpha,
            beta,
        );

        if board.unplace(mv).is_err() {
            // drop_move 直後の仮置きの巻き戻しは失敗しない。
            break;
        }

        let improved = match best {
            Some(current) => score > current.best_score(),
            None => true,
        };
        if improved {
            best = Some(SearchResult {
                best_move: mv,
                best_score: score,
            });
        }

        if score > alpha {
            alpha = score;
        }
        if beta <= alpha {
            break;
        }
    }

    best.ok_or(SelectMoveError::BoardFull)
}
