use criterion::{black_box, criterion_group, criterion_main, Criterion};
use safa::algebra::{BooleanAlgebra, Minterm};
use safa::automaton::{Safa, Transition};
use safa::equivalence::is_equivalent;
use safa::error::Result;
use safa::expr::StateExpr;
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum BytePred {
    True,
    Eq(u8),
}

struct ByteAlgebra;

impl BooleanAlgebra for ByteAlgebra {
    type Predicate = BytePred;
    type Domain = u8;

    fn mk_and(&self, p: &BytePred, q: &BytePred) -> BytePred {
        match (p, q) {
            (BytePred::True, x) | (x, BytePred::True) => x.clone(),
            (BytePred::Eq(a), BytePred::Eq(b)) if a == b => BytePred::Eq(*a),
            _ => BytePred::Eq(0),
        }
    }

    fn mk_or(&self, p: &BytePred, _q: &BytePred) -> BytePred {
        p.clone()
    }

    fn mk_not(&self, _p: &BytePred) -> BytePred {
        BytePred::True
    }

    fn mk_true(&self) -> BytePred {
        BytePred::True
    }

    fn mk_false(&self) -> BytePred {
        BytePred::Eq(0)
    }

    fn eval(&self, p: &BytePred, a: &u8) -> bool {
        match p {
            BytePred::True => true,
            BytePred::Eq(b) => a == b,
        }
    }

    fn is_satisfiable(&self, _p: &BytePred) -> Result<bool> {
        Ok(true)
    }

    fn get_minterms(&self, preds: &[BytePred]) -> Result<Vec<(BytePred, Minterm)>> {
        Ok(preds
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), Minterm::from_positive_indices([i])))
            .collect())
    }
}

fn chain_safa(ba: &ByteAlgebra, len: usize) -> Safa<BytePred> {
    let transitions = (0..len)
        .map(|i| Transition::new(i, BytePred::Eq(i as u8), StateExpr::atom(i + 1)))
        .collect();
    Safa::new(transitions, 0, BTreeSet::from([len]), ba).unwrap()
}

pub fn binary_product(c: &mut Criterion) {
    let ba = ByteAlgebra;
    let a = chain_safa(&ba, 12);
    let b = chain_safa(&ba, 12);
    c.bench_function("union", |b_| b_.iter(|| a.union_with(black_box(&b), &ba)));
    c.bench_function("intersection", |b_| {
        b_.iter(|| a.intersection_with(black_box(&b), &ba))
    });
}

pub fn equivalence_check(c: &mut Criterion) {
    let ba = ByteAlgebra;
    let a = chain_safa(&ba, 12);
    let b = chain_safa(&ba, 12);
    c.bench_function("equivalence check", |b_| {
        b_.iter(|| is_equivalent(black_box(&a), black_box(&b), &ba))
    });
}

pub fn normalize(c: &mut Criterion) {
    let ba = ByteAlgebra;
    let a = chain_safa(&ba, 20);
    c.bench_function("normalize", |b_| b_.iter(|| a.normalize(black_box(&ba))));
}

criterion_group!(benches, binary_product, equivalence_check, normalize);
criterion_main!(benches);
