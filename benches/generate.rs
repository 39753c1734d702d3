use criterion::{black_box, criterion_group, criterion_main, Criterion};

use math_crunch::core::{LevelConfig, LevelTable, Operation, QuizRng};
use math_crunch::equation::generate;

fn bench_generate(c: &mut Criterion) {
    let table = LevelTable::default();
    let mut rng = QuizRng::new(42);

    for level in &table {
        c.bench_function(&format!("generate_level_{}", level.level_number()), |b| {
            b.iter(|| generate(black_box(level), &mut rng))
        });
    }

    let wide = LevelConfig::new(9, Operation::ARITHMETIC, 8).unwrap();
    c.bench_function("generate_all_operations_8_operands", |b| {
        b.iter(|| generate(black_box(&wide), &mut rng))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
