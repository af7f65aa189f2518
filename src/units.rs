use derive_more::{Add, AddAssign, Display, From, Into, Sum};

/// A length in PostScript points (1/72 of an inch). All layout maths and all
/// emitted primitives use points.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sum, Display, From, Into,
)]
pub struct Pt(pub f32);

/// A length in inches. Physical label dimensions are usually quoted in inches;
/// convert to [Pt] once at the boundary and stay in points afterwards.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

impl std::ops::Sub for Pt {
    type Output = Pt;
    fn sub(self, rhs: Pt) -> Pt {
        Pt(self.0 - rhs.0)
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;
    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Dividing two lengths yields a scaling factor; kept as a [Pt] so that
/// `scaling * advance` stays in points, matching how font metrics are scaled.
impl std::ops::Div<Pt> for Pt {
    type Output = Pt;
    fn div(self, rhs: Pt) -> Pt {
        Pt(self.0 / rhs.0)
    }
}

impl Pt {
    /// Clamp negative lengths to zero; used when a budget calculation has
    /// consumed more space than the canvas provides.
    pub fn max_zero(self) -> Pt {
        Pt(self.0.max(0.0))
    }
}
