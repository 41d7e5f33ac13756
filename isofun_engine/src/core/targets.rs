use crate::tracing_targets;

tracing_targets! {
    FUNC = "func",
    REGISTRY = "registry",
    PARAM = "param",
}
