use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameSnapshot, GameState, PieceGenerator, Tetromino};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.apply_action(GameAction::Restart);
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, PieceKind::I, None);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_next_piece(c: &mut Criterion) {
    let mut generator = PieceGenerator::new(12345);

    c.bench_function("next_piece", |b| b.iter(|| black_box(generator.next_piece())));
}

fn bench_try_move(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Tetromino::spawn(PieceKind::T);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !piece.try_move(&board, 1, 0) {
                piece = Tetromino::spawn(PieceKind::T);
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Tetromino::spawn(PieceKind::L);

    c.bench_function("try_rotate", |b| {
        b.iter(|| black_box(piece.try_rotate(&board)))
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_next_piece,
    bench_try_move,
    bench_try_rotate,
    bench_render
);
criterion_main!(benches);
