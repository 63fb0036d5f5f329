//! The base view and its single-view adapters.

use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe transition function of a view.
pub(crate) type EvolveFn<S, E> = Arc<dyn Fn(S, &E) -> S + Send + Sync>;

/// A read-model projection: an initial state and a pure `evolve` function.
///
/// `evolve` must be total and deterministic. It may only look at its two
/// arguments; the combinators rely on that to stay compositional. Events a
/// view does not care about should return the state unchanged.
///
/// A view is immutable once built. Because it holds no mutable state, the
/// same view can fold independent event sequences on many threads at once.
pub struct View<S, E> {
    initial_state: S,
    evolve: EvolveFn<S, E>,
}

impl<S, E> View<S, E>
where
    S: 'static,
    E: 'static,
{
    /// Creates a view from an initial state and a transition function.
    pub fn new<F>(initial_state: S, evolve: F) -> Self
    where
        F: Fn(S, &E) -> S + Send + Sync + 'static,
    {
        Self {
            initial_state,
            evolve: Arc::new(evolve),
        }
    }

    /// Returns the state used before any event has been folded.
    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    /// Applies a single event to `state`, returning the new state.
    pub fn evolve(&self, state: S, event: &E) -> S {
        (self.evolve)(state, event)
    }

    /// Folds `events` in order, starting from `state`.
    pub fn evolve_all<'e, I>(&self, state: S, events: I) -> S
    where
        I: IntoIterator<Item = &'e E>,
    {
        events
            .into_iter()
            .fold(state, |state, event| self.evolve(state, event))
    }

    /// Computes the new state for `events` given the caller's current state.
    ///
    /// A caller with no materialized state passes `None`; folding then starts
    /// from the initial state.
    pub fn compute_new_state<'e, I>(&self, current: Option<S>, events: I) -> S
    where
        S: Clone,
        I: IntoIterator<Item = &'e E>,
    {
        let state = current.unwrap_or_else(|| self.initial_state.clone());
        self.evolve_all(state, events)
    }

    /// Folds `events` starting from the initial state.
    pub fn fold<'e, I>(&self, events: I) -> S
    where
        S: Clone,
        I: IntoIterator<Item = &'e E>,
    {
        self.compute_new_state(None, events)
    }

    /// Adapts the view to a different event type (contravariant map).
    ///
    /// Each incoming `E2` is converted with `f` and handed to the original
    /// `evolve`. The initial state is unchanged.
    pub fn lmap_on_e<E2, F>(self, f: F) -> View<S, E2>
    where
        E2: 'static,
        F: Fn(&E2) -> E + Send + Sync + 'static,
    {
        let evolve = self.evolve;
        View::new(self.initial_state, move |state, event: &E2| {
            evolve(state, &f(event))
        })
    }

    /// Adapts the view to a wider event type, ignoring events it cannot map.
    ///
    /// When `f` returns `None` the state passes through unchanged.
    pub fn filter_map_on_e<E2, F>(self, f: F) -> View<S, E2>
    where
        E2: 'static,
        F: Fn(&E2) -> Option<E> + Send + Sync + 'static,
    {
        let evolve = self.evolve;
        View::new(self.initial_state, move |state, event: &E2| match f(event) {
            Some(event) => evolve(state, &event),
            None => state,
        })
    }

    /// Exposes the view over a different state type (profunctor map).
    ///
    /// `fr` projects the external state `S2` back to `S` before the wrapped
    /// `evolve` runs, and `fl` lifts the result forward to `S2`:
    /// `new.evolve(s2, e) == fl(old.evolve(fr(s2), e))`. The new initial
    /// state is `fl(old_initial_state)`.
    pub fn dimap_on_s<S2, FL, FR>(self, fl: FL, fr: FR) -> View<S2, E>
    where
        S2: 'static,
        FL: Fn(S) -> S2 + Send + Sync + 'static,
        FR: Fn(S2) -> S + Send + Sync + 'static,
    {
        let initial_state = fl(self.initial_state);
        let evolve = self.evolve;
        View::new(initial_state, move |state: S2, event: &E| {
            fl(evolve(fr(state), event))
        })
    }

    /// Maps the state type forward with `f`.
    ///
    /// A view needs its own state back to keep folding, so the reverse
    /// projection comes from `S: From<S2>`. This is `dimap_on_s(f, S::from)`.
    pub fn rmap_on_s<S2, F>(self, f: F) -> View<S2, E>
    where
        S: From<S2>,
        S2: 'static,
        F: Fn(S) -> S2 + Send + Sync + 'static,
    {
        self.dimap_on_s(f, <S as From<S2>>::from)
    }

    /// Same as [`View::rmap_on_s`].
    pub fn map_on_s<S2, F>(self, f: F) -> View<S2, E>
    where
        S: From<S2>,
        S2: 'static,
        F: Fn(S) -> S2 + Send + Sync + 'static,
    {
        self.rmap_on_s(f)
    }
}

impl<S: Clone, E> Clone for View<S, E> {
    fn clone(&self) -> Self {
        Self {
            initial_state: self.initial_state.clone(),
            evolve: Arc::clone(&self.evolve),
        }
    }
}

impl<S: fmt::Debug, E> fmt::Debug for View<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("initial_state", &self.initial_state)
            .finish_non_exhaustive()
    }
}

/// Raw parts of a view, for the combinators in sibling modules.
impl<S, E> View<S, E> {
    pub(crate) fn into_parts(self) -> (S, EvolveFn<S, E>) {
        (self.initial_state, self.evolve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum CounterEvent {
        Incremented(i64),
        Decremented(i64),
        Renamed(String),
    }

    fn counter_view() -> View<i64, CounterEvent> {
        View::new(0, |count, event| match event {
            CounterEvent::Incremented(n) => count + n,
            CounterEvent::Decremented(n) => count - n,
            CounterEvent::Renamed(_) => count,
        })
    }

    fn sample_events() -> Vec<CounterEvent> {
        vec![
            CounterEvent::Incremented(5),
            CounterEvent::Renamed("ignored".to_string()),
            CounterEvent::Decremented(2),
            CounterEvent::Incremented(10),
        ]
    }

    #[test]
    fn test_evolve_applies_single_event() {
        let view = counter_view();
        assert_eq!(*view.initial_state(), 0);
        assert_eq!(view.evolve(3, &CounterEvent::Incremented(4)), 7);
        assert_eq!(view.evolve(3, &CounterEvent::Renamed("x".into())), 3);
    }

    #[test]
    fn test_fold_starts_from_initial_state() {
        let view = counter_view();
        assert_eq!(view.fold(&sample_events()), 13);
        assert_eq!(view.fold(&[]), 0);
    }

    #[test]
    fn test_compute_new_state_substitutes_absent_state() {
        let view = counter_view();
        let events = sample_events();
        assert_eq!(view.compute_new_state(None, &events), 13);
        assert_eq!(view.compute_new_state(Some(100), &events), 113);
    }

    #[test]
    fn test_evolve_all_is_incremental() {
        let view = counter_view();
        let events = sample_events();
        let (head, tail) = events.split_at(2);

        let partial = view.evolve_all(*view.initial_state(), head);
        assert_eq!(view.evolve_all(partial, tail), view.fold(&events));
    }

    #[test]
    fn test_lmap_on_e_identity_behaves_like_original() {
        let original = counter_view();
        let mapped = counter_view().lmap_on_e(|e: &CounterEvent| e.clone());

        assert_eq!(mapped.initial_state(), original.initial_state());
        for state in [-3, 0, 42] {
            for event in sample_events() {
                assert_eq!(
                    mapped.evolve(state, &event),
                    original.evolve(state, &event)
                );
            }
        }
    }

    #[test]
    fn test_lmap_on_e_composes() {
        let f = |n: &i64| CounterEvent::Incremented(*n);
        let g = |s: &String| s.len() as i64;

        let chained = counter_view().lmap_on_e(f).lmap_on_e(g);
        let composed = counter_view().lmap_on_e(move |s: &String| f(&g(s)));

        for word in ["", "a", "four", "eleven!!!!!"] {
            let word = word.to_string();
            assert_eq!(chained.evolve(1, &word), composed.evolve(1, &word));
        }
        assert_eq!(chained.initial_state(), composed.initial_state());
    }

    #[test]
    fn test_filter_map_on_e_passes_unmapped_events_through() {
        let view = counter_view().filter_map_on_e(|n: &i64| {
            (*n >= 0).then_some(CounterEvent::Incremented(*n))
        });

        assert_eq!(view.fold(&[1, -50, 2, -1, 3]), 6);
        assert_eq!(view.evolve(9, &-1), 9);
    }

    #[test]
    fn test_dimap_on_s_identity_behaves_like_original() {
        let original = counter_view();
        let mapped = counter_view().dimap_on_s(|s| s, |s| s);

        assert_eq!(mapped.initial_state(), original.initial_state());
        for event in sample_events() {
            assert_eq!(mapped.evolve(8, &event), original.evolve(8, &event));
        }
    }

    #[test]
    fn test_dimap_on_s_projects_and_lifts() {
        // External state is a string rendering of the count.
        let view = counter_view().dimap_on_s(
            |count: i64| count.to_string(),
            |text: String| text.parse().unwrap_or_default(),
        );

        assert_eq!(view.initial_state(), "0");
        assert_eq!(
            view.evolve("40".to_string(), &CounterEvent::Incremented(2)),
            "42"
        );
        assert_eq!(view.fold(&sample_events()), "13");
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Tally(i64);

    impl From<Tally> for i64 {
        fn from(tally: Tally) -> Self {
            tally.0
        }
    }

    #[test]
    fn test_rmap_on_s_matches_dimap_with_from() {
        let rmapped = counter_view().rmap_on_s(Tally);
        let dimapped = counter_view().dimap_on_s(Tally, i64::from);

        assert_eq!(rmapped.initial_state(), &Tally(0));
        for event in sample_events() {
            assert_eq!(
                rmapped.evolve(Tally(5), &event),
                dimapped.evolve(Tally(5), &event)
            );
        }
        assert_eq!(
            counter_view().map_on_s(Tally).fold(&sample_events()),
            Tally(13)
        );
    }

    #[test]
    fn test_combinators_leave_original_usable() {
        let original = counter_view();
        let adapted = original
            .clone()
            .lmap_on_e(|n: &i64| CounterEvent::Decremented(*n));

        assert_eq!(adapted.fold(&[4, 1]), -5);

        assert_eq!(original.fold(&sample_events()), 13);
    }

    #[test]
    fn test_view_folds_concurrently() {
        let view = &counter_view();
        let events = &sample_events();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|offset| scope.spawn(move || view.evolve_all(offset, events)))
                .collect();
            for (offset, handle) in handles.into_iter().enumerate() {
                assert_eq!(handle.join().unwrap(), offset as i64 + 13);
            }
        });
    }

    #[test]
    fn test_debug_shows_initial_state() {
        let rendered = format!("{:?}", counter_view());
        assert!(rendered.contains("initial_state: 0"));
    }
}
