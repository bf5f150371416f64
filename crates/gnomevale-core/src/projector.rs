//! Projectors — pure folds deriving state from batches of events.

/// A pure fold from prior state and an ordered batch of events to new state.
///
/// Given the same `(state, events)` pair a projector must always yield the
/// same result; that referential transparency is what makes full-history
/// replay deterministic.
pub type Projector<S, E> = Box<dyn Fn(S, &[E]) -> S + Send + Sync>;

/// Composes projectors into a single left-to-right fold.
///
/// Each projector receives the entire event batch and the previous
/// projector's output state. An empty input composes to the identity.
#[must_use]
pub fn compose_projectors<S, E>(projectors: Vec<Projector<S, E>>) -> Projector<S, E>
where
    S: 'static,
    E: 'static,
{
    Box::new(move |state, events| {
        projectors
            .iter()
            .fold(state, |state, projector| projector(state, events))
    })
}

#[cfg(test)]
mod tests {
    use super::{Projector, compose_projectors};

    fn add_each() -> Projector<i64, i64> {
        Box::new(|state, events| events.iter().fold(state, |acc, event| acc + event))
    }

    fn double() -> Projector<i64, i64> {
        Box::new(|state, _events| state * 2)
    }

    #[test]
    fn test_compose_projectors_empty_is_identity() {
        let identity = compose_projectors::<i64, i64>(vec![]);

        assert_eq!(identity(41, &[1, 2, 3]), 41);
        assert_eq!(identity(41, &[]), 41);
    }

    #[test]
    fn test_compose_projectors_folds_left_to_right() {
        // (0 + 1 + 2 + 3) * 2, not (0 * 2) + 1 + 2 + 3.
        let composed = compose_projectors(vec![add_each(), double()]);

        assert_eq!(composed(0, &[1, 2, 3]), 12);
    }

    #[test]
    fn test_compose_projectors_passes_full_batch_to_every_projector() {
        let composed = compose_projectors(vec![add_each(), add_each()]);

        assert_eq!(composed(0, &[1, 2, 3]), 12);
    }

    #[test]
    fn test_compose_projectors_matches_manual_chaining() {
        let events = [5, 7];

        let composed = compose_projectors(vec![add_each(), double()]);
        let chained = double()(add_each()(1, &events), &events);

        assert_eq!(composed(1, &events), chained);
    }

    #[test]
    fn test_composed_fold_is_deterministic() {
        let composed = compose_projectors(vec![add_each(), double()]);
        let events = [1, 2, 3, 4];

        assert_eq!(composed(0, &events), composed(0, &events));
    }
}
