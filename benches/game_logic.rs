use blockfall::core::{Board, Controller, GameConfig, RandomShapes};
use blockfall::types::{Cell, Command, BOARD_WIDTH};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn new_game() -> Controller<RandomShapes, ()> {
    let mut game = Controller::new(GameConfig::default(), RandomShapes::new(12345), ())
        .expect("default config is valid");
    game.start();
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = new_game();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !game.tick() {
                game = new_game();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..BOARD_WIDTH {
                    board.set(Cell::new(x, y), true);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_drop_to_lock(c: &mut Criterion) {
    c.bench_function("drop_to_lock", |b| {
        b.iter(|| {
            let mut game = new_game();
            while game.can_move_down() {
                game.move_down();
            }
            black_box(game.move_down());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut game = new_game();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            black_box(game.apply(Command::MoveRight));
            black_box(game.apply(Command::MoveLeft));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut game = new_game();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(game.apply(Command::Rotate));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_drop_to_lock,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
