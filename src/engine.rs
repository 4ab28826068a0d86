/// 盤面（ビットボード）と勝敗判定の実装。
pub mod board;
/// ゲーム進行（手番、終局判定など）の実装。
pub mod game;
pub mod types;

pub type Board = board::Board;
pub type Game = game::Game;
pub type Token = types::Token;
pub type Move = types::Move;
pub type Outcome = game::Outcome;
pub type PlayError = game::PlayError;
