use crate::core::types::Number;
use crate::func::{Func, FuncInitError, FuncInstance};
use crate::param::Prms;

/// Function wrapper around a `dyn` [Func]; Delegates everything to the inner function.
///
/// If possible use the enum variants on [FuncInstance], so that static-dispatch is used instead of dynamic dispatch.
/// This is mostly useful for kinds defined in other crates, which can't be added to [FuncInstance].
#[derive(Clone, Debug)]
pub struct DynamicFunc {
    pub inner: Box<dyn Func>,
}

impl DynamicFunc {
    pub fn new(value: impl Func + 'static) -> Self { Self { inner: Box::new(value) } }
}

impl FuncInstance {
    pub fn from_dyn(value: impl Func + 'static) -> Self { Self::from(DynamicFunc::new(value)) }
}

impl Func for DynamicFunc {
    fn kind(&self) -> &'static str { self.inner.kind() }

    fn init(&mut self, prms: &Prms) -> Result<(), FuncInitError> { self.inner.init(prms) }

    fn f(&self, t: Number, x: &[Number]) -> Number { self.inner.f(t, x) }

    fn g(&self, t: Number, x: &[Number]) -> Number { self.inner.g(t, x) }

    fn h(&self, t: Number, x: &[Number]) -> Number { self.inner.h(t, x) }

    fn grad(&self, out: &mut [Number], t: Number, x: &[Number]) { self.inner.grad(out, t, x) }
}
