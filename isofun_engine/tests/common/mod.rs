#![allow(dead_code)]

use approx::assert_relative_eq;
use isofun_engine::core::types::Number;
use isofun_engine::func::Func;
use rand::{Rng, SeedableRng};

pub type TestRng = rand::rngs::SmallRng;

/// Step used for central differences in [check_grad]
pub const FD_STEP: Number = 1e-6;
pub const FD_TOLERANCE: Number = 1e-6;

/// Seeded, so that failures can be reproduced
pub fn rng() -> TestRng { TestRng::seed_from_u64(0x150f_u64) }

/// Returns a random point with `dims` components, each in `-range..=range`
pub fn point<R: Rng>(rng: &mut R, dims: usize, range: Number) -> Vec<Number> {
    (0..dims).map(|_| rng.gen_range(-range..=range)).collect()
}

/// Returns a random point at distance `dist` from `centre`
pub fn point_at_distance<R: Rng>(rng: &mut R, centre: &[Number], dist: Number) -> Vec<Number> {
    let dir = loop {
        let v = point(rng, centre.len(), 1.);
        let len = length(&v);
        if len > 1e-3 && len <= 1. {
            break v.into_iter().map(|c| c / len).collect::<Vec<_>>();
        }
    };
    centre.iter().zip(dir).map(|(c, d)| c + d * dist).collect()
}

pub fn length(v: &[Number]) -> Number { v.iter().map(|c| c * c).sum::<Number>().sqrt() }

/// Compares the analytic gradient against central differences of `F`
pub fn check_grad(func: &impl Func, t: Number, x: &[Number]) {
    let mut analytic = vec![Number::NAN; x.len()];
    func.grad(&mut analytic, t, x);

    let mut probe = x.to_vec();
    for i in 0..x.len() {
        probe[i] = x[i] + FD_STEP;
        let fwd = func.f(t, &probe);
        probe[i] = x[i] - FD_STEP;
        let back = func.f(t, &probe);
        probe[i] = x[i];

        let numeric = (fwd - back) / (2. * FD_STEP);
        assert_relative_eq!(analytic[i], numeric, epsilon = FD_TOLERANCE, max_relative = 1e-4);
    }
}
