use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = match intent {
            CounterIntent::Increment => state.count() + 1u32,
            CounterIntent::Decrement => state.count() - 1u32,
        };
        CounterState::starting_at(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn increment_then_decrement_returns_to_start() {
        let start = CounterState::starting_at(42);
        let up = CounterReducer::reduce(start.clone(), CounterIntent::Increment);
        assert_eq!(*up.count(), BigInt::from(43));
        let back = CounterReducer::reduce(up, CounterIntent::Decrement);
        assert_eq!(back, start);
    }

    #[test]
    fn counting_past_i64_limits_does_not_clamp() {
        let above = CounterReducer::reduce(
            CounterState::starting_at(i64::MAX),
            CounterIntent::Increment,
        );
        assert_eq!(*above.count(), BigInt::from(i64::MAX) + 1u32);
        assert_eq!(above.heading(), "Count: 9223372036854775808");

        let below = CounterReducer::reduce(
            CounterState::starting_at(i64::MIN),
            CounterIntent::Decrement,
        );
        assert_eq!(*below.count(), BigInt::from(i64::MIN) - 1u32);
        assert_eq!(below.heading(), "Count: -9223372036854775809");
    }

    #[test]
    fn round_trip_holds_at_i64_max() {
        let start = CounterState::starting_at(i64::MAX);
        let up = CounterReducer::reduce(start.clone(), CounterIntent::Increment);
        let back = CounterReducer::reduce(up, CounterIntent::Decrement);
        assert_eq!(back, start);
    }
}
