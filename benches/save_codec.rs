use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stonebound::data::DataManager;
use stonebound::game::GameController;

fn session() -> GameController {
    let mut game = GameController::with_seed(DataManager::default(), 2024).expect("world generates");
    game.new_game().expect("world generates");
    game
}

fn bench_encode(c: &mut Criterion) {
    let game = session();
    c.bench_function("save_code", |b| b.iter(|| black_box(game.save_code().expect("encodes"))));
}

fn bench_decode(c: &mut Criterion) {
    let mut game = session();
    let code = game.save_code().expect("encodes");
    c.bench_function("load_code", |b| b.iter(|| game.load_code(black_box(&code)).expect("decodes")));
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
