use crate::time::Duration;

/// The default stiffness of a [`Spring`], in newtons per unit of displacement.
pub const DEFAULT_STIFFNESS: f32 = 100.0;

/// The default mass attached to a [`Spring`].
pub const DEFAULT_MASS: f32 = 1.0;

/// Displacement below which a [`Spring`] may come to rest.
pub const REST_DISPLACEMENT: f32 = 0.001;

/// Speed below which a [`Spring`] may come to rest.
pub const REST_SPEED: f32 = 0.001;

/// A critically damped spring.
///
/// The spring is integrated analytically, so the result of a step does not
/// depend on how the elapsed time is sliced into frames. A critically damped
/// spring released from rest approaches its target without ever crossing it.
///
/// Retargeting keeps the current value and velocity: the motion bends toward
/// the new target instead of restarting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    mass: f32,
    bounds: (f32, f32),
}

impl Spring {
    /// Creates a [`Spring`] at rest on the given value.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness: DEFAULT_STIFFNESS,
            mass: DEFAULT_MASS,
            bounds: (f32::NEG_INFINITY, f32::INFINITY),
        }
    }

    /// Sets the stiffness of the [`Spring`].
    #[must_use]
    pub fn stiffness(self, stiffness: f32) -> Self {
        Self { stiffness, ..self }
    }

    /// Sets the mass attached to the [`Spring`].
    #[must_use]
    pub fn mass(self, mass: f32) -> Self {
        Self { mass, ..self }
    }

    /// Keeps the value of the [`Spring`] inside `min..=max`.
    ///
    /// Hitting a bound stops the motion on that bound.
    #[must_use]
    pub fn bounded(self, min: f32, max: f32) -> Self {
        Self {
            value: self.value.clamp(min, max),
            target: self.target.clamp(min, max),
            bounds: (min, max),
            ..self
        }
    }

    /// Returns the current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns the current velocity, in units per second.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Returns the value the [`Spring`] is moving toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns the damping coefficient that makes the [`Spring`] critical.
    pub fn damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Returns the natural angular frequency of the [`Spring`].
    pub fn angular_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Returns true if the [`Spring`] has settled on its target.
    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Moves the target of the [`Spring`], keeping its current motion.
    pub fn set_target(&mut self, target: f32) {
        let (min, max) = self.bounds;

        self.target = target.clamp(min, max);
    }

    /// Advances the [`Spring`] by the given amount of time.
    ///
    /// Returns true while the [`Spring`] is still moving.
    pub fn step(&mut self, elapsed: Duration) -> bool {
        if self.is_at_rest() {
            return false;
        }

        let omega = self.angular_frequency();
        let t = elapsed.as_secs_f32();

        let displacement = self.value - self.target;
        let c2 = self.velocity + omega * displacement;
        let decay = (-omega * t).exp();

        let value = self.target + (displacement + c2 * t) * decay;
        let velocity = (self.velocity - omega * c2 * t) * decay;

        let (min, max) = self.bounds;

        if value < min || value > max {
            self.value = value.clamp(min, max);
            self.velocity = 0.0;
        } else {
            self.value = value;
            self.velocity = velocity;
        }

        if (self.value - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_SPEED
        {
            self.value = self.target;
            self.velocity = 0.0;

            return false;
        }

        true
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(spring: &mut Spring) -> Vec<f32> {
        let mut samples = Vec::new();

        for _ in 0..1_000 {
            let moving = spring.step(FRAME);
            samples.push(spring.value());

            if !moving {
                break;
            }
        }

        samples
    }

    #[test]
    fn new_spring_is_at_rest() {
        let mut spring = Spring::new(0.0);

        assert!(spring.is_at_rest());
        assert!(!spring.step(FRAME));
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn default_spring_is_critically_damped() {
        let spring = Spring::default();

        assert_eq!(spring.damping(), 20.0);
        assert_eq!(spring.angular_frequency(), 10.0);
    }

    #[test]
    fn settles_on_target_without_overshoot() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);

        let samples = settle(&mut spring);

        assert!(samples.len() > 1);
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(samples.iter().all(|value| (0.0..=1.0).contains(value)));
        assert_eq!(spring.value(), 1.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn step_size_does_not_change_the_curve() {
        let mut coarse = Spring::new(0.0);
        let mut fine = Spring::new(0.0);
        coarse.set_target(1.0);
        fine.set_target(1.0);

        let _ = coarse.step(Duration::from_millis(100));

        for _ in 0..10 {
            let _ = fine.step(Duration::from_millis(10));
        }

        assert!((coarse.value() - fine.value()).abs() < 1e-4);
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);

        for _ in 0..5 {
            let _ = spring.step(FRAME);
        }

        let midway = spring.value();
        assert!(midway > 0.0 && midway < 1.0);
        assert!(spring.velocity() > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.value(), midway);

        let samples = settle(&mut spring);

        assert!(samples.iter().all(|value| (0.0..=1.0).contains(value)));
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn bounds_hold_the_value() {
        let mut spring = Spring::new(0.0).bounded(0.0, 1.0);
        spring.set_target(3.0);

        assert_eq!(spring.target(), 1.0);

        let samples = settle(&mut spring);

        assert!(samples.iter().all(|value| (0.0..=1.0).contains(value)));
    }

    #[test]
    fn huge_frame_gaps_stay_stable() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);

        assert!(!spring.step(Duration::from_secs(10)));
        assert_eq!(spring.value(), 1.0);
    }
}
