use criterion::{black_box, criterion_group, criterion_main, Criterion};
use npmdrive::{MemoryEnv, PathReconciler};

fn sample_path(entries: usize) -> String {
    (0..entries)
        .map(|i| format!("C:\\tools\\dir{i}"))
        .collect::<Vec<_>>()
        .join(";")
}

fn bench_reconcile(c: &mut Criterion) {
    let env = MemoryEnv::with_process_vars([("APPDATA", "C:\\Users\\dev\\AppData\\Roaming")]);
    let reconciler = PathReconciler::new(&env);
    let required = vec!["D:\\packages\\npm".to_string()];
    let removals = vec!["%APPDATA%\\npm".to_string()];

    let mut group = c.benchmark_group("reconcile");
    for entries in [8, 64, 256] {
        let current = sample_path(entries);
        group.bench_function(format!("{entries}_entries"), |b| {
            b.iter(|| {
                reconciler.reconcile(black_box(&current), black_box(&required), black_box(&removals))
            });
        });
    }
    group.finish();
}

fn bench_reconcile_with_repairs(c: &mut Criterion) {
    let env = MemoryEnv::new();
    let reconciler = PathReconciler::new(&env);

    // Every other separator dropped, forcing merged-token repair.
    let current: String = (0..64)
        .map(|i| {
            let sep = if i % 2 == 0 { "" } else { ";" };
            format!("C:\\tools\\dir{i}{sep}")
        })
        .collect();

    c.bench_function("reconcile_merged_tokens", |b| {
        b.iter(|| reconciler.reconcile(black_box(&current), &[], &[]));
    });
}

criterion_group!(benches, bench_reconcile, bench_reconcile_with_repairs);
criterion_main!(benches);
