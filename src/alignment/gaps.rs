use super::AlignmentError;

/// The cost model for gaps, chosen once per alignment.
///
/// Costs are expressed as negative scores. Under the affine model a gap of
/// length $k$ costs $v + u(k-1)$, where $v$ is the gap open cost and $u$ is the
/// gap extension cost. The linear model charges the same cost for every gap
/// column, so it is equivalent to an affine model with $u = v$, but it is
/// filled without the gap-length tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GapModel {
    Linear { gap: i32 },
    Affine { open: i32, extend: i32 },
}

impl GapModel {
    pub const DEFAULT_GAP_OPEN: i32 = -8;
    pub const DEFAULT_GAP_EXTEND: i32 = -1;

    #[inline]
    #[must_use]
    pub const fn linear(gap: i32) -> Self {
        GapModel::Linear { gap }
    }

    #[inline]
    #[must_use]
    pub const fn affine(open: i32, extend: i32) -> Self {
        GapModel::Affine { open, extend }
    }

    /// Checks that the open cost is negative, the extension cost is not
    /// positive, and the open cost does not exceed the extension cost.
    ///
    /// ## Errors
    ///
    /// Returns [`AlignmentError::InvalidGapModel`] if any of the conditions
    /// fail. The costs are never silently corrected.
    #[inline]
    pub const fn validate(self) -> Result<Self, AlignmentError> {
        let (open, extend) = (self.open_cost(), self.extend_cost());
        if open < 0 && extend <= 0 && open <= extend {
            Ok(self)
        } else {
            Err(AlignmentError::InvalidGapModel { open, extend })
        }
    }

    /// The cost of the first column of a gap.
    #[inline]
    #[must_use]
    pub const fn open_cost(self) -> i32 {
        match self {
            GapModel::Linear { gap } => gap,
            GapModel::Affine { open, .. } => open,
        }
    }

    /// The cost of every column after the first in a gap.
    #[inline]
    #[must_use]
    pub const fn extend_cost(self) -> i32 {
        match self {
            GapModel::Linear { gap } => gap,
            GapModel::Affine { extend, .. } => extend,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_affine(self) -> bool {
        matches!(self, GapModel::Affine { .. })
    }

    /// The total cost of a gap spanning `len` columns. A gap of length zero
    /// costs nothing.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn cost(self, len: usize) -> i32 {
        if len == 0 {
            0
        } else {
            self.open_cost() + self.extend_cost() * (len - 1) as i32
        }
    }
}

impl Default for GapModel {
    /// An affine model opening at -8 and extending at -1.
    #[inline]
    fn default() -> Self {
        GapModel::affine(Self::DEFAULT_GAP_OPEN, Self::DEFAULT_GAP_EXTEND)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validation() {
        assert!(GapModel::affine(-8, -2).validate().is_ok());
        assert!(GapModel::affine(-3, -3).validate().is_ok());
        assert!(GapModel::affine(-3, 0).validate().is_ok());
        assert!(GapModel::linear(-1).validate().is_ok());

        assert_eq!(
            GapModel::affine(-1, -4).validate(),
            Err(AlignmentError::InvalidGapModel { open: -1, extend: -4 })
        );
        assert!(GapModel::affine(0, 0).validate().is_err());
        assert!(GapModel::affine(-4, 1).validate().is_err());
        assert!(GapModel::linear(0).validate().is_err());
    }

    #[test]
    fn costs() {
        let affine = GapModel::affine(-8, -2);
        assert_eq!(affine.cost(0), 0);
        assert_eq!(affine.cost(1), -8);
        assert_eq!(affine.cost(4), -14);
        assert_eq!(GapModel::linear(-3).cost(4), -12);
        assert_eq!(GapModel::default(), GapModel::affine(-8, -1));
    }
}
