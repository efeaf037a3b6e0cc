use proptest::prelude::*;
use snow_consensus::{Nature, NnarySnowball, NnarySnowflake, Snowball, Snowflake};
use snow_ids::Id;

/// One call against an instance. Choices are drawn from a small pool so that
/// streaks and switches both show up.
#[derive(Debug, Clone)]
enum Op {
    Success(u8),
    Failure,
    Add(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..4).prop_map(Op::Success),
        2 => Just(Op::Failure),
        1 => (0u8..6).prop_map(Op::Add),
    ]
}

fn make_id(byte: u8) -> Id {
    Id::from_bytes([byte; 32])
}

fn apply(sb: &mut NnarySnowball, op: &Op) {
    match op {
        Op::Success(c) => sb.record_successful_poll(make_id(*c)),
        Op::Failure => sb.record_unsuccessful_poll(),
        Op::Add(c) => sb.add(make_id(*c)),
    }
}

fn nature() -> impl Strategy<Value = Nature> {
    prop_oneof![Just(Nature::Virtuous), Just(Nature::Rogue)]
}

proptest! {
    #[test]
    fn finalized_state_is_frozen(
        ops in prop::collection::vec(op(), 0..64),
        tail in prop::collection::vec(op(), 1..32),
        nature in nature(),
    ) {
        let mut sb = NnarySnowball::new(2, 4, make_id(0)).with_nature(nature);
        for op in &ops {
            apply(&mut sb, op);
        }
        prop_assume!(sb.finalized());

        let preference = sb.preference();
        let rendered = sb.to_string();
        for op in &tail {
            apply(&mut sb, op);
            prop_assert!(sb.finalized());
            prop_assert_eq!(sb.preference(), preference);
        }
        prop_assert_eq!(sb.to_string(), rendered);
    }

    #[test]
    fn preference_holds_the_maximum(ops in prop::collection::vec(op(), 0..64)) {
        let mut sb = NnarySnowball::new(50, 50, make_id(0));
        for op in &ops {
            apply(&mut sb, op);
            let best = (0u8..6)
                .map(|c| sb.num_successful_polls(&make_id(c)))
                .max()
                .unwrap_or(0);
            prop_assert_eq!(sb.max_successful_polls(), best);
            if !sb.finalized() && best > 0 {
                prop_assert_eq!(sb.num_successful_polls(&sb.preference()), best);
            }
        }
    }

    #[test]
    fn confidence_matches_trailing_streak(ops in prop::collection::vec(op(), 0..64)) {
        let mut sf = NnarySnowflake::new(1_000, 1_000, make_id(0));
        let mut current = make_id(0);
        let mut streak = 0usize;
        for op in &ops {
            match op {
                Op::Success(c) => {
                    let choice = make_id(*c);
                    streak = if choice == current { streak + 1 } else { 1 };
                    current = choice;
                    sf.record_successful_poll(choice);
                }
                Op::Failure => {
                    streak = 0;
                    sf.record_unsuccessful_poll();
                }
                Op::Add(c) => sf.add(make_id(*c)),
            }
            prop_assert_eq!(sf.confidence(), streak);
            prop_assert_eq!(sf.preference(), current);
        }
    }

    #[test]
    fn finalizes_exactly_at_beta(beta_virtuous in 1usize..8, extra in 0usize..8, nature in nature()) {
        let beta_rogue = beta_virtuous + extra;
        let beta = nature.beta(beta_virtuous, beta_rogue);
        let choice = make_id(1);
        let mut sb = NnarySnowball::new(beta_virtuous, beta_rogue, make_id(0)).with_nature(nature);

        for _ in 0..beta - 1 {
            sb.record_successful_poll(choice);
            prop_assert!(!sb.finalized());
        }
        sb.record_successful_poll(choice);
        prop_assert!(sb.finalized());
        prop_assert_eq!(sb.preference(), choice);
    }

    #[test]
    fn add_is_non_disruptive(ops in prop::collection::vec(op(), 0..32), fresh in 100u8..200) {
        let mut sb = NnarySnowball::new(3, 5, make_id(0));
        for op in &ops {
            apply(&mut sb, op);
        }
        let preference = sb.preference();
        let finalized = sb.finalized();
        let max = sb.max_successful_polls();
        let confidence = sb.snowflake().confidence();

        sb.add(make_id(fresh));

        prop_assert_eq!(sb.preference(), preference);
        prop_assert_eq!(sb.finalized(), finalized);
        prop_assert_eq!(sb.max_successful_polls(), max);
        prop_assert_eq!(sb.snowflake().confidence(), confidence);
        prop_assert_eq!(sb.num_successful_polls(&make_id(fresh)), 0);
    }
}
