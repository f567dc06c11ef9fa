use locator_index::{Identity, Locator, Registry, IDENTITY_LEN};
use rand::rngs::StdRng;
use rand::Rng;

pub fn id(n: u32) -> Identity {
    let mut bytes = [0; IDENTITY_LEN];
    bytes[IDENTITY_LEN - 4..].copy_from_slice(&n.to_be_bytes());
    Identity::new(bytes)
}

#[derive(Debug, Clone, Copy)]
pub enum Decision {
    Insert(u32, u64),
    Remove(u32),
}

/// A seeded history of inserts and removes over identities `1..=n`.
#[derive(Debug, Clone)]
pub struct Decisions(Vec<Decision>);

impl Decisions {
    pub fn new(len: usize, insert_percentage: f64, max_score: u64, mut rng: StdRng) -> Self {
        assert!((0.0..=1.0).contains(&insert_percentage));
        let mut live: Vec<u32> = vec![];
        let mut fresh = 1;
        let mut ds = Vec::with_capacity(len);
        for _ in 0..len {
            if !live.is_empty() && rng.gen_bool(1.0 - insert_percentage) {
                let who = live.swap_remove(rng.gen_range(0..live.len()));
                ds.push(Decision::Remove(who));
            } else {
                ds.push(Decision::Insert(fresh, rng.gen_range(0..=max_score)));
                live.push(fresh);
                fresh += 1;
            }
        }
        Decisions(ds)
    }

    pub fn replay(&self, r: &mut Registry<u64>) {
        for &d in self.0.iter() {
            match d {
                Decision::Insert(who, score) => {
                    let _ = r.insert(id(who), score, Locator::from_identity(id(who)));
                }
                Decision::Remove(who) => {
                    r.remove(&id(who));
                }
            }
        }
    }
}

/// Registry holding `n` entries with random scores.
pub fn filled(n: u32, rng: &mut StdRng) -> Registry<u64> {
    let mut r = Registry::with_capacity(n as usize);
    for who in 1..=n {
        let _ = r.insert(id(who), rng.gen_range(0..1_000_000), Locator::from_identity(id(who)));
    }
    r
}
