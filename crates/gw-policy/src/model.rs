//! The `Policy` trait — the extension point for movement strategies.

use gw_core::Direction;

use crate::PolicyContext;

/// Pluggable movement strategy.
///
/// Called once per step with a read-only [`PolicyContext`]; must return
/// exactly one direction.  Only `Top` and `Right` are executable; anything
/// else makes the step fail with `InvalidPolicyResponse`.
///
/// Any `Fn(&PolicyContext) -> Direction` closure is a policy, so ad-hoc
/// strategies need no named type:
///
/// ```rust,ignore
/// let sim = SimBuilder::new(grid)
///     .policy(|ctx: &PolicyContext<'_>| {
///         if ctx.agent.x_right { Direction::Top } else { Direction::Right }
///     })
///     .build()?;
/// ```
///
/// # Thread safety
///
/// Batch runs may share one policy across Rayon workers, so implementations
/// must be `Send + Sync`.  Keep per-run state out of the policy itself.
pub trait Policy: Send + Sync + 'static {
    /// Choose the next move.
    fn decide(&self, ctx: &PolicyContext<'_>) -> Direction;

    /// Label used in log messages.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> Policy for F
where
    F: Fn(&PolicyContext<'_>) -> Direction + Send + Sync + 'static,
{
    #[inline]
    fn decide(&self, ctx: &PolicyContext<'_>) -> Direction {
        self(ctx)
    }
}
