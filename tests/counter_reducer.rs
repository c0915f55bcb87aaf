use num_bigint::BigInt;
use tallyterm::ui::counter::{CounterIntent, CounterReducer, CounterState};
use tallyterm::ui::mvi::Reducer;

fn apply(start: CounterState, intents: &[CounterIntent]) -> CounterState {
    intents
        .iter()
        .fold(start, |state, intent| CounterReducer::reduce(state, *intent))
}

#[test]
fn default_state_is_zero() {
    let state = CounterState::default();
    assert_eq!(*state.count(), BigInt::from(0));
    assert_eq!(state.heading(), "Count: 0");
}

#[test]
fn increment_adds_one() {
    let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
    assert_eq!(*state.count(), BigInt::from(1));
}

#[test]
fn decrement_below_zero_goes_negative() {
    let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Decrement);
    assert_eq!(*state.count(), BigInt::from(-1));
    assert_eq!(state.heading(), "Count: -1");
}

#[test]
fn result_is_increments_minus_decrements_in_any_order() {
    use CounterIntent::{Decrement as D, Increment as I};
    let orders: [&[CounterIntent]; 4] = [
        &[I, I, I, D, D],
        &[D, D, I, I, I],
        &[I, D, I, D, I],
        &[D, I, D, I, I],
    ];
    for order in orders {
        assert_eq!(
            *apply(CounterState::default(), order).count(),
            BigInt::from(1),
            "{:?}",
            order
        );
    }
}

#[test]
fn long_mixed_sequence_matches_n_minus_m() {
    let intents: Vec<CounterIntent> = (0..500)
        .map(|i| {
            if i % 3 == 0 {
                CounterIntent::Decrement
            } else {
                CounterIntent::Increment
            }
        })
        .collect();
    let n = intents
        .iter()
        .filter(|i| **i == CounterIntent::Increment)
        .count() as i64;
    let m = intents.len() as i64 - n;
    assert_eq!(
        *apply(CounterState::default(), &intents).count(),
        BigInt::from(n - m)
    );
}

#[test]
fn round_trip_returns_to_start() {
    let starts = [
        0_i64,
        7,
        -7,
        1_000_000_000_000,
        -1_000_000_000_000,
        i64::MAX,
        i64::MIN,
    ];
    for start in starts {
        let state = CounterState::starting_at(start);
        let up_down = apply(
            state.clone(),
            &[CounterIntent::Increment, CounterIntent::Decrement],
        );
        let down_up = apply(
            state.clone(),
            &[CounterIntent::Decrement, CounterIntent::Increment],
        );
        assert_eq!(up_down, state);
        assert_eq!(down_up, state);
    }
}

#[test]
fn repeated_round_trips_return_to_start() {
    let start = CounterState::starting_at(-3);
    let mut state = start.clone();
    for _ in 0..100 {
        state = apply(state, &[CounterIntent::Increment, CounterIntent::Decrement]);
    }
    assert_eq!(state, start);
}

#[test]
fn large_positive_values_keep_counting() {
    let state = CounterState::starting_at(9_007_199_254_740_993_i64);
    let state = CounterReducer::reduce(state, CounterIntent::Increment);
    assert_eq!(state.heading(), "Count: 9007199254740994");
}

#[test]
fn large_negative_values_keep_counting() {
    let state = CounterState::starting_at(-9_007_199_254_740_993_i64);
    let state = CounterReducer::reduce(state, CounterIntent::Decrement);
    assert_eq!(state.heading(), "Count: -9007199254740994");
}

#[test]
fn each_intent_changes_state() {
    let state = CounterState::starting_at(5);
    assert_ne!(
        CounterReducer::reduce(state.clone(), CounterIntent::Increment),
        state
    );
    assert_ne!(
        CounterReducer::reduce(state.clone(), CounterIntent::Decrement),
        state
    );
}

#[test]
fn counting_continues_past_machine_word_range() {
    let mut state = CounterState::starting_at(u64::MAX);
    for _ in 0..3 {
        state = CounterReducer::reduce(state, CounterIntent::Increment);
    }
    assert_eq!(state.heading(), "Count: 18446744073709551618");

    let mut state = CounterState::starting_at(i64::MIN);
    for _ in 0..2 {
        state = CounterReducer::reduce(state, CounterIntent::Decrement);
    }
    assert_eq!(*state.count(), BigInt::from(i64::MIN) - 2u32);
}

#[test]
fn max_i64_round_trip_returns_exactly() {
    let start = CounterState::starting_at(i64::MAX);
    let back = apply(
        start.clone(),
        &[CounterIntent::Increment, CounterIntent::Decrement],
    );
    assert_eq!(*back.count(), BigInt::from(i64::MAX));
}
