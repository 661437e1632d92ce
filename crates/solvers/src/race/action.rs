/// Control actions an observer can return from a race event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Cancel the animation once the current step completes.
    ///
    /// The step that produced the event is kept. During manual stepping this
    /// only clears the animating flag, if set.
    Stop,
}
