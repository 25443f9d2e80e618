use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use distinct_lcs::{compute_length_table, Enumerator};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

/// `s` with every `stride`-th symbol replaced, so the pair stays close to the
/// diagonal and the number of distinct results stays small.
fn substituted(s: &[u8], stride: usize) -> Vec<u8> {
    let mut t = s.to_vec();
    for i in (0..t.len()).step_by(stride) {
        t[i] = if t[i] == b'G' { b'T' } else { b'G' };
    }
    t
}

fn rss_bytes() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory(),
        None => 0,
    }
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_table");
    for &len in &[256usize, 1_024, 4_096] {
        let mut rng = StdRng::seed_from_u64(42);
        let s = random_dna(&mut rng, len);
        let t = random_dna(&mut rng, len);
        group.bench_function(format!("build_{len}"), |b| {
            b.iter(|| criterion::black_box(compute_length_table(&s, &t).unwrap().lcs_len()))
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_near_diagonal");
    for &len in &[256usize, 1_024, 2_048] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(7);
                    let s = random_dna(&mut rng, len);
                    let t = substituted(&s, 64);
                    (s, t)
                },
                |(s, t)| {
                    let before = rss_bytes();
                    let found = Enumerator::new(&s, &t).unwrap().run().unwrap();
                    let after = rss_bytes();
                    criterion::black_box(found.subsequences.len());
                    eprintln!(
                        "RSS bytes delta (enumerate {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_table, bench_enumerate);
criterion_main!(benches);
