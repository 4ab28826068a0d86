//! `ai::random` の性能計測（1手選択）。

use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use yonmoku_core::ai::types::Ai;
use yonmoku_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた盤面を返す（途中で終局した場合はその時点で止める）。
fn board_after_plies(plies: u16) -> engine::Board {
    let mut game = engine::Game::initial();
    let mut red_agent = ai::random::Agent::new(u64::MIN);
    let mut yellow_agent = ai::random::Agent::new(u64::MIN.wrapping_add(1));

    for _turn in u16::MIN..plies {
        let board = game.board();

        let selected = match game.side_to_move() {
            engine::Token::Red => red_agent.select_move(board, engine::Token::Red),
            _ => yellow_agent.select_move(board, engine::Token::Yellow),
        };

        let mv = match selected {
            Ok(value) => value,
            Err(_err) => break,
        };

        let played = match game.play(mv.column()) {
            Ok(value) => value,
            Err(_err) => break,
        };

        if !matches!(played, engine::Outcome::Ongoing) {
            break;
        }
    }

    game.board()
}

/// ベンチ用に代表局面をいくつか用意する。
fn board_samples() -> [engine::Board; 3] {
    let b0 = engine::Board::empty();
    let b1 = board_after_plies(8);
    let b2 = board_after_plies(24);
    [b0, b1, b2]
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = board_samples();
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, board) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, board, |bench, input| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(*input, engine::Token::Red)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
