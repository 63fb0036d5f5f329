//! Binary combinators: running two views side by side.

use crate::either::Either;
use crate::view::View;

impl<S, E> View<S, E>
where
    S: 'static,
    E: 'static,
{
    /// Runs `self` and `other` over the same event type in lockstep.
    ///
    /// The combined state is the pair of both states; every event is folded
    /// through both views independently:
    /// `evolve((s1, s2), e) == (self.evolve(s1, e), other.evolve(s2, e))`.
    pub fn rproduct_on_s<S2>(self, other: View<S2, E>) -> View<(S, S2), E>
    where
        S2: 'static,
    {
        let (first_initial, first) = self.into_parts();
        let (second_initial, second) = other.into_parts();

        View::new(
            (first_initial, second_initial),
            move |(s1, s2): (S, S2), event: &E| (first(s1, event), second(s2, event)),
        )
    }

    /// Merges `self` with a view over a disjoint event type.
    ///
    /// `Left` events go to `self` and `Right` events go to `other`. The state
    /// of the view that does not own the event is returned untouched, so one
    /// combined view can consume a shared stream of both event types.
    pub fn combine_views<S2, E2>(self, other: View<S2, E2>) -> View<(S, S2), Either<E, E2>>
    where
        S2: 'static,
        E2: 'static,
    {
        let (first_initial, first) = self.into_parts();
        let (second_initial, second) = other.into_parts();

        View::new(
            (first_initial, second_initial),
            move |(s1, s2): (S, S2), event: &Either<E, E2>| match event {
                Either::Left(event) => (first(s1, event), s2),
                Either::Right(event) => (s1, second(s2, event)),
            },
        )
    }
}
