//! `ai::minimax` の性能計測（探索深さごとの1手選択）。

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

/// 指定列の着手位置に石を落とす（ベンチ用、満杯列は無視）。
fn drop_token(board: &mut engine::Board, column: u8, token: engine::Token) {
    let mv = match board.drop_move(column) {
        Some(value) => value,
        None => return,
    };

    let _placed = board.place(mv, token);
}

/// 中盤の代表局面を返す。
fn midgame_board() -> engine::Board {
    let mut board = engine::Board::empty();
    let columns: [u8; 10] = [3, 3, 2, 4, 4, 5, 2, 3, 1, 6];

    for (index, column) in columns.into_iter().enumerate() {
        let token = if index % 2 == 0 {
            engine::Token::Red
        } else {
            engine::Token::Yellow
        };
        drop_token(&mut board, column, token);
    }

    board
}

/// 初期盤面で探索深さを変えながら `select_move` を計測する。
fn bench_select_move_by_depth(criterion: &mut Criterion) {
    let board = engine::Board::empty();
    let mut group = criterion.benchmark_group("ai/minimax/select_move_initial");

    for depth in [1_u8, 3, 5] {
        let bench_id = BenchmarkId::new("depth", depth);
        group.bench_with_input(bench_id, &board, |bench, input| {
            bench.iter_batched(
                || ai::minimax::Agent::new(depth),
                |mut agent| black_box(agent.select_move(*input, engine::Token::Red)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// 中盤局面で `select_move` を計測する。
fn bench_select_move_midgame(criterion: &mut Criterion) {
    let board = midgame_board();

    criterion.bench_function("ai/minimax/select_move_midgame", |bench| {
        bench.iter_batched(
            || ai::minimax::Agent::new(5),
            |mut agent| black_box(agent.select_move(board, engine::Token::Yellow)),
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_select_move_by_depth(&mut criterion);
    bench_select_move_midgame(&mut criterion);

    criterion.final_summary();
}
