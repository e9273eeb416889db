use criterion::{criterion_group, criterion_main, Criterion};
use review_knn::{build_classifier, tf_idf, Document, WordSetJaccard};

const VOCAB: &[&str] = &[
    "food", "service", "great", "terrible", "slow", "friendly", "cold", "hot", "price", "staff",
    "again", "never", "always", "lovely", "rude", "clean", "dirty", "tasty", "bland", "wait",
];

/// tiny deterministic PRNG (xorshift32)
struct Rng(u32);
impl Rng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

fn synthetic_reviews(n: usize) -> (Vec<Document>, Vec<u8>) {
    let mut rng = Rng(0x1234_5678);
    let mut docs = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for _ in 0..n {
        let len = 8 + (rng.next_u32() % 24) as usize;
        let text: Vec<&str> = (0..len)
            .map(|_| VOCAB[rng.next_u32() as usize % VOCAB.len()])
            .collect();
        docs.push(Document::new(text.join(" ")));
        labels.push((rng.next_u32() % 5) as u8 + 1);
    }
    (docs, labels)
}

fn classify_benchmark(c: &mut Criterion) {
    let (data, labels) = synthetic_reviews(5_000);
    let classifier = build_classifier(&data, &labels, 5, WordSetJaccard).expect("valid training set");
    let query = Document::new("great food friendly staff but slow service");

    c.bench_function("classify_sequential", |b| {
        b.iter(|| classifier.classify(&query))
    });

    c.bench_function("classify_parallel_scan", |b| {
        b.iter(|| classifier.classify_par(&query))
    });

    let texts: Vec<&str> = data.iter().map(Document::text).collect();
    c.bench_function("tf_idf", |b| b.iter(|| tf_idf(&texts)));
}

criterion_group!(benches, classify_benchmark);
criterion_main!(benches);
