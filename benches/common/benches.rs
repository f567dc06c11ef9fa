use super::utils::{filled, id, Decisions};
use criterion::Bencher;
use locator_index::{Locator, Registry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn insert_random(b: &mut Bencher, n: u32) {
    let mut rng = StdRng::seed_from_u64(42);
    b.iter_batched(
        || {
            let scores: Vec<u64> = (0..n).map(|_| rng.gen_range(0..1_000_000)).collect();
            (Registry::with_capacity(n as usize), scores)
        },
        |(mut r, scores)| {
            for (who, score) in (1..=n).zip(scores) {
                let _ = r.insert(id(who), score, Locator::from_identity(id(who)));
            }
            r
        },
        criterion::BatchSize::SmallInput,
    );
}

/// Every insert goes to the tail, the worst case for the position walk.
pub fn insert_descending(b: &mut Bencher, n: u32) {
    b.iter_batched(
        || Registry::with_capacity(n as usize),
        |mut r| {
            for who in 1..=n {
                let _ = r.insert(id(who), u64::from(n - who), Locator::from_identity(id(who)));
            }
            r
        },
        criterion::BatchSize::SmallInput,
    );
}

pub fn churn(b: &mut Bencher, n: usize) {
    let rng = StdRng::seed_from_u64(42);
    let decisions = Decisions::new(n, 0.6, 1_000, rng);
    b.iter_batched(
        Registry::new,
        |mut r| {
            decisions.replay(&mut r);
            r
        },
        criterion::BatchSize::SmallInput,
    );
}

pub fn remove_random(b: &mut Bencher, n: u32) {
    let mut rng = StdRng::seed_from_u64(42);
    b.iter_batched(
        || (filled(n, &mut rng), rng.gen_range(1..=n)),
        |(mut r, who)| r.remove(&id(who)),
        criterion::BatchSize::SmallInput,
    );
}

pub fn fetch_top(b: &mut Bencher, n: u32, limit: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    let r = filled(n, &mut rng);
    b.iter(|| r.fetch(limit));
}

pub fn fetch_all_pages(b: &mut Bencher, n: u32, page: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    let r = filled(n, &mut rng);
    b.iter(|| {
        let mut cursor = None;
        let mut total = 0;
        loop {
            let p = r.fetch_page(cursor, page);
            total += p.locators.len();
            cursor = p.next;
            if cursor.is_none() {
                break total;
            }
        }
    });
}

pub fn lookup(b: &mut Bencher, n: u32) {
    let mut rng = StdRng::seed_from_u64(42);
    let r = filled(n, &mut rng);
    b.iter_batched(
        || id(rng.gen_range(1..=n)),
        |who| r.lookup(&who),
        criterion::BatchSize::SmallInput,
    );
}
