/// What an [`Interpolation`] does with inputs outside of its input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Keep following the line through both ranges.
    Extend,

    /// Hold the nearest output bound.
    #[default]
    Clamp,
}

/// A linear mapping from an input range onto an output range.
///
/// ```
/// # use fab_menu_core::animation::Interpolation;
/// let margin = Interpolation::new((0.0, 1.0), (5.0, 10.0));
///
/// assert_eq!(margin.map(0.5), 7.5);
/// assert_eq!(margin.map(2.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    input: (f32, f32),
    output: (f32, f32),
    extrapolate: Extrapolate,
}

impl Interpolation {
    /// Creates a clamped [`Interpolation`] between the given ranges.
    pub const fn new(input: (f32, f32), output: (f32, f32)) -> Self {
        Self {
            input,
            output,
            extrapolate: Extrapolate::Clamp,
        }
    }

    /// Sets the [`Extrapolate`] strategy of the [`Interpolation`].
    #[must_use]
    pub const fn extrapolate(self, extrapolate: Extrapolate) -> Self {
        Self {
            extrapolate,
            ..self
        }
    }

    /// Returns the output range of the [`Interpolation`].
    pub fn output(&self) -> (f32, f32) {
        self.output
    }

    /// Maps the given value.
    pub fn map(&self, value: f32) -> f32 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;

        if in_start == in_end {
            return out_start;
        }

        let mut progress = (value - in_start) / (in_end - in_start);

        if self.extrapolate == Extrapolate::Clamp {
            progress = progress.clamp(0.0, 1.0);
        }

        out_start + (out_end - out_start) * progress
    }
}
