use std::error::Error;

pub fn main() -> Result<(), Box<dyn Error>> {
    // Show what the engine is doing; try `RUST_LOG=isofun_engine=trace`
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive("isofun_engine=debug".parse()?))
        .init();

    // Type aliases used everywhere in the engine
    use isofun_engine::core::types::*;
    // The trait with the evaluation methods, needs to be in scope to call them
    use isofun_engine::func::Func;

    // region LOOKING UP A FUNCTION KIND

    // The global registry has all the builtin kinds already registered.
    // If you have your own kinds, create a `Registry` and `register()` them there instead
    use isofun_engine::func::registry::registry;

    println!("available function kinds: {:?}", registry().keys());

    // An allocator creates an *empty* function, which must be initialised before use
    let alloc = registry().lookup("cdist")?;
    let mut circle = alloc();

    // endregion LOOKING UP A FUNCTION KIND

    // region INITIALISING

    // Parameters are just a list of names and values.
    // They can also be deserialized from a config file, since `Prms: Deserialize`
    use isofun_engine::param::Prm;
    use isofun_engine::prms;

    // Unknown names are rejected, this will fail and leave the function uninitialised
    if let Err(err) = circle.init(&prms! { "xc" => 1.0, "yc" => 1.0, "radius" => 2.0 }) {
        println!("init failed as expected: {err}");
    }

    // So we can try again with the right names.
    // Leaving out `zc` makes this a 2D circle
    circle.init(&prms! { "xc" => 1.0, "yc" => 1.0, "r" => 2.0 })?;

    // `Registry::create()` does lookup + alloc + init in one go
    let mut sphere_prms = prms! { "xc" => 0.0, "yc" => 0.0, "zc" => 0.0 };
    sphere_prms.push(Prm::new("r", 1.0).with_unit("m"));
    println!("sphere parameters:\n{sphere_prms}");
    let sphere = registry().create("cdist", &sphere_prms)?;

    // endregion INITIALISING

    // region EVALUATING

    let t: Number = 0.0;
    for x in [[1.0, 1.0], [3.0, 1.0], [5.0, 4.0]] {
        let mut grad = [0.0; 2];
        circle.grad(&mut grad, t, &x);
        println!("circle: F({x:?}) = {f:+.3}, grad = {grad:?}", f = circle.f(t, &x));
    }

    for x in [[0.0, 0.0, 2.0], [0.5, 0.5, 0.5]] {
        let mut grad = [0.0; 3];
        sphere.grad(&mut grad, t, &x);
        println!(
            "sphere: F({x:?}) = {f:+.3}, G = {g}, H = {h}, grad = {grad:?}",
            f = sphere.f(t, &x),
            g = sphere.g(t, &x),
            h = sphere.h(t, &x),
        );
    }

    // endregion EVALUATING

    Ok(())
}
