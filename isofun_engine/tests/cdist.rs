use approx::assert_relative_eq;
use isofun_engine::core::types::Number;
use isofun_engine::func::cdist::CdistFunc;
use isofun_engine::func::registry::{registry, Registry, RegistryError};
use isofun_engine::func::{Func, FuncInitError, FuncInstance};
use isofun_engine::param::{Prm, Prms};
use isofun_engine::prms;
use rand::Rng;

mod common;

const SAMPLES: usize = 200;

/// Creates a random valid 2D or 3D cdist, returning it along with its centre and radius
fn random_cdist(rng: &mut common::TestRng, dims: usize) -> (FuncInstance, Vec<Number>, Number) {
    let centre = common::point(rng, dims, 10.);
    let radius = rng.gen_range(0.01..5.);

    let mut prms: Prms = ["xc", "yc", "zc"]
        .into_iter()
        .zip(&centre)
        .map(|(n, &v)| Prm::new(n, v))
        .collect();
    prms.push(Prm::new("r", radius));

    let func = registry().create("cdist", &prms).expect("random cdist should be valid");
    (func, centre, radius)
}

#[test]
pub fn end_to_end() {
    let mut reg = Registry::new();
    reg.register("cdist", CdistFunc::alloc);

    let alloc = reg.lookup("cdist").expect("cdist should be registered");
    let mut func = alloc();
    func.init(&prms! { "xc" => 1., "yc" => 1., "r" => 2. })
        .expect("init should succeed");

    assert_relative_eq!(func.f(0., &[1., 1.]), -2.0);

    let mut out = [Number::NAN; 2];
    func.grad(&mut out, 0., &[3., 1.]);
    assert_relative_eq!(out[0], 1.0);
    assert_relative_eq!(out[1], 0.0);
}

#[test]
pub fn unknown_kind() {
    assert_eq!(
        registry().create("polynomial", &Prms::new()).err(),
        Some(RegistryError::UnknownKind("polynomial".into()))
    );
}

#[test]
pub fn invalid_parameter_through_registry() {
    let err = registry()
        .create("cdist", &prms! { "xc" => 0., "yc" => 0., "radius" => 1. })
        .err();
    let Some(RegistryError::Init { source, .. }) = &err else {
        panic!("expected init error, got {err:?}");
    };
    assert_eq!(source.to_string(), "cdist: parameter named `radius` is invalid");
    assert_eq!(
        source,
        &FuncInitError::InvalidParameter {
            func: "cdist",
            name: "radius".into()
        }
    );
}

/// Points sampled exactly on, inside, and outside the surface should give `F = 0`, `F < 0` and `F > 0`
#[test]
pub fn surface_sign() {
    let mut rng = common::rng();
    for dims in [2, 3] {
        for _ in 0..SAMPLES {
            let (func, centre, radius) = random_cdist(&mut rng, dims);
            let t = rng.gen_range(-100.0..100.0);

            let on = common::point_at_distance(&mut rng, &centre, radius);
            assert_relative_eq!(func.f(t, &on), 0., epsilon = 1e-9);

            let inside_dist = radius * rng.gen_range(0.0..0.99);
            let inside = common::point_at_distance(&mut rng, &centre, inside_dist);
            assert!(func.f(t, &inside) < 0.);

            let outside_dist = radius * rng.gen_range(1.01..10.);
            let outside = common::point_at_distance(&mut rng, &centre, outside_dist);
            assert!(func.f(t, &outside) > 0.);

            assert_eq!(func.g(t, &outside), 0.);
            assert_eq!(func.h(t, &inside), 0.);
        }
    }
}

/// The gradient should be a unit vector, and agree with finite differences of `F`
#[test]
pub fn grad_is_unit_normal() {
    let mut rng = common::rng();
    for dims in [2, 3] {
        for _ in 0..SAMPLES {
            let (func, centre, radius) = random_cdist(&mut rng, dims);
            let x_dist = radius * rng.gen_range(0.1..4.);
            let x = common::point_at_distance(&mut rng, &centre, x_dist);

            let mut out = vec![Number::NAN; dims];
            func.grad(&mut out, 0., &x);
            assert_relative_eq!(common::length(&out), 1., epsilon = 1e-12);

            common::check_grad(&func, 0., &x);
        }
    }
}

/// Initialised functions are immutable, so sharing between threads must give identical results
#[test]
pub fn shared_between_threads() {
    let func = registry()
        .create("cdist", &prms! { "xc" => 0., "yc" => 0., "zc" => 0., "r" => 1. })
        .expect("init should succeed");
    let points = (0..64).map(|i| [i as Number * 0.1, 1., -2.]).collect::<Vec<_>>();
    let expected = points.iter().map(|x| func.f(0., x)).collect::<Vec<_>>();

    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| s.spawn(|| points.iter().map(|x| func.f(0., x)).collect::<Vec<_>>()))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().expect("worker panicked"), expected);
        }
    });
}
