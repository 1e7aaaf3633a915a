use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{Board, SimpleRng};
use tui_2048::engine::play_turn;
use tui_2048::term::{encode_full_into, FrameBuffer, GameView, Screen};
use tui_2048::types::Direction;

fn busy_board() -> Board {
    Board::from_rows([
        [2, 2, 4, 8],
        [0, 4, 4, 16],
        [2, 0, 2, 2],
        [8, 8, 0, 32],
    ])
    .unwrap()
}

fn bench_shift(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("shift_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                let mut probe = board;
                black_box(probe.shift(black_box(dir)));
            }
        })
    });
}

fn bench_has_valid_move(c: &mut Criterion) {
    let stuck = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();

    c.bench_function("has_valid_move_stuck", |b| {
        b.iter(|| black_box(&stuck).has_valid_move())
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut board = busy_board();
            black_box(board.spawn_tile(&mut rng));
        })
    });
}

fn bench_screensaver_game(c: &mut Criterion) {
    c.bench_function("screensaver_full_game", |b| {
        b.iter(|| {
            let mut rng = SimpleRng::new(black_box(7));
            let mut board = Board::new();
            loop {
                board.spawn_tile(&mut rng);
                if !board.has_valid_move() {
                    break;
                }
                play_turn(&mut board);
            }
            board.max_tile()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let board = busy_board();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut out = Vec::with_capacity(8 * 1024);

    c.bench_function("render_and_encode_frame", |b| {
        b.iter(|| {
            view.render_into(&board, Screen::Playing { prompt: true }, &mut fb);
            out.clear();
            encode_full_into(&fb, &mut out).unwrap();
            black_box(out.len())
        })
    });
}

criterion_group!(
    benches,
    bench_shift,
    bench_has_valid_move,
    bench_spawn,
    bench_screensaver_game,
    bench_render
);
criterion_main!(benches);
