/// Where a race is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly seeded, or an animation was stopped before the budget ran out.
    Idle,

    /// Advanced by manual steps.
    Stepping,

    /// Advancing on the animation timer.
    Animating,

    /// The iteration budget is exhausted.
    Finished,
}
