//! Distance from a point to a circle (2D) or a sphere (3D)
//!
//! The circle/sphere is implicitly defined by `F(x) = 0`, where
//!
//! ```text
//! F(x) = sqrt((x - xc) · (x - xc)) - r
//! ```
//!
//! with `r` being the radius and `xc` the coordinates of the centre. Thus `F > 0` is outside, and `F < 0` is
//! inside the circle/sphere.
//!
//! # Parameters
//! - `xc`, `yc`: Centre coordinates
//! - `zc`: Centre z-coordinate. Passing this (with any value) makes the function 3D
//! - `r`: Radius, must be greater than [RADIUS_TOLERANCE]

use crate::core::targets::FUNC;
use crate::core::types::{Number, Point2, Point3, Vector2, Vector3};
use crate::func::{Func, FuncInitError, FuncInstance};
use crate::param::Prms;
use crate::shared::validate;
use getset::CopyGetters;
use tracing::trace;

pub const KIND: &str = "cdist";
/// Radii must be strictly greater than this
pub const RADIUS_TOLERANCE: Number = 1e-10;

/// Centre of the circle/sphere; the variant fixes the dimensionality of the function
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Centre {
    D2(Point2),
    D3(Point3),
}

impl Centre {
    pub fn dims(&self) -> usize {
        match self {
            Self::D2(_) => 2,
            Self::D3(_) => 3,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::D2(c) => c.x.is_finite() && c.y.is_finite(),
            Self::D3(c) => c.x.is_finite() && c.y.is_finite() && c.z.is_finite(),
        }
    }

    /// Vector from the centre to the point `x`
    fn offset(&self, x: &[Number]) -> Offset {
        validate::point(x, self.dims());
        match *self {
            Self::D2(c) => Offset::D2(Point2::new(x[0], x[1]) - c),
            Self::D3(c) => Offset::D3(Point3::new(x[0], x[1], x[2]) - c),
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum Offset {
    D2(Vector2),
    D3(Vector3),
}

impl Offset {
    /// Largest absolute component
    fn max_abs(&self) -> Number {
        match self {
            Self::D2(v) => v.x.abs().max(v.y.abs()),
            Self::D3(v) => v.x.abs().max(v.y.abs()).max(v.z.abs()),
        }
    }

    /// Divides every component by `s`
    fn scaled(&self, s: Number) -> Self {
        match *self {
            Self::D2(v) => Self::D2(v / s),
            Self::D3(v) => Self::D3(v / s),
        }
    }

    /// Euclidean length, without the under/overflow of squaring very small or very large components
    fn length(&self) -> Number {
        let s = self.max_abs();
        if s == 0. || !s.is_finite() {
            return s;
        }
        let len = match self.scaled(s) {
            Self::D2(v) => v.length(),
            Self::D3(v) => v.length(),
        };
        len * s
    }

    /// Unit vector along the offset, or zero if the offset is exactly zero
    fn normal(&self) -> Self {
        let s = self.max_abs();
        if s == 0. {
            return *self;
        }
        // After scaling the largest component is `1`, so normalising can't under/overflow
        match self.scaled(s) {
            Self::D2(v) => Self::D2(v.try_normalize().unwrap_or(Vector2::ZERO)),
            Self::D3(v) => Self::D3(v.try_normalize().unwrap_or(Vector3::ZERO)),
        }
    }
}

/// The validated geometry of a [CdistFunc].
///
/// Once built this cannot be mutated, so it always holds a valid radius.
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Circle {
    centre: Centre,
    radius: Number,
}

impl Circle {
    /// Creates a new circle/sphere, checking the centre is finite and the radius is valid
    pub fn new(centre: Centre, radius: Number) -> Result<Self, FuncInitError> {
        if !centre.is_finite() {
            return Err(FuncInitError::InvalidCentre { func: KIND });
        }
        // Negated so that `NaN` is also rejected
        if !(radius > RADIUS_TOLERANCE) {
            return Err(FuncInitError::InvalidRadius {
                func: KIND,
                min: RADIUS_TOLERANCE,
            });
        }
        Ok(Self { centre, radius })
    }
}

impl TryFrom<&Prms> for Circle {
    type Error = FuncInitError;

    fn try_from(prms: &Prms) -> Result<Self, Self::Error> {
        let (mut xc, mut yc, mut zc, mut r) = (0., 0., None, 0.);
        for p in prms {
            match p.n.as_str() {
                "xc" => xc = p.v,
                "yc" => yc = p.v,
                "zc" => zc = Some(p.v),
                "r" => r = p.v,
                _ => {
                    return Err(FuncInitError::InvalidParameter {
                        func: KIND,
                        name: p.n.clone(),
                    })
                }
            }
        }

        let centre = match zc {
            Some(zc) => Centre::D3(Point3::new(xc, yc, zc)),
            None => Centre::D2(Point2::new(xc, yc)),
        };
        Self::new(centre, r)
    }
}

/// Signed distance to a circle/sphere, registered as `"cdist"`.
///
/// Created empty (see [CdistFunc::alloc]), then configured with [Func::init].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CdistFunc {
    circle: Option<Circle>,
}

impl CdistFunc {
    /// Allocator for the registry, creates an uninitialised function
    pub fn alloc() -> FuncInstance { Self::default().into() }

    /// The geometry, if the function has been initialised
    pub fn circle(&self) -> Option<&Circle> { self.circle.as_ref() }

    fn initialised(&self) -> Option<Circle> {
        validate::initialised(self.circle.is_some(), KIND);
        self.circle
    }
}

impl Func for CdistFunc {
    fn kind(&self) -> &'static str { KIND }

    fn init(&mut self, prms: &Prms) -> Result<(), FuncInitError> {
        if self.circle.is_some() {
            return Err(FuncInitError::AlreadyInitialised { func: KIND });
        }

        let circle = Circle::try_from(prms).map_err(|err| {
            trace!(target: FUNC, ?err, %prms, "cdist init failed");
            err
        })?;
        trace!(target: FUNC, ?circle, "cdist init");
        self.circle = Some(circle);
        Ok(())
    }

    fn f(&self, _t: Number, x: &[Number]) -> Number {
        let Some(circle) = self.initialised() else {
            return Number::NAN;
        };
        let f = circle.centre.offset(x).length() - circle.radius;
        validate::number(f);
        f
    }

    fn g(&self, _t: Number, _x: &[Number]) -> Number { 0. }

    fn h(&self, _t: Number, _x: &[Number]) -> Number { 0. }

    /// Writes the unit outward normal of the circle/sphere through `x`.
    ///
    /// The normal is undefined at the centre itself (an offset of exactly zero), so a zero vector is written there
    /// instead. Any other point gets a unit vector, however close to or far from the centre it is.
    fn grad(&self, out: &mut [Number], _t: Number, x: &[Number]) {
        let Some(circle) = self.initialised() else {
            out.iter_mut().take(x.len()).for_each(|o| *o = Number::NAN);
            return;
        };

        match circle.centre.offset(x).normal() {
            Offset::D2(n) => {
                validate::out_buffer(out, 2);
                out[0] = n.x;
                out[1] = n.y;
            }
            Offset::D3(n) => {
                validate::out_buffer(out, 3);
                out[0] = n.x;
                out[1] = n.y;
                out[2] = n.z;
            }
        }
        validate::normal_or_zero(&out[..x.len()]);
    }
}
