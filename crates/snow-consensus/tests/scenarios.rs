//! Decision scenarios shared by every shape.

use snow_consensus::{
    BinarySnowball, BinarySnowflake, Nature, NnarySnowball, NnarySnowflake, Snowball, Snowflake,
    UnarySnowball, UnarySnowflake,
};
use snow_ids::Id;
use snow_utils::logging::{self, LogConfig, LogLevel};

const BETA_VIRTUOUS: usize = 3;
const BETA_ROGUE: usize = 5;

fn make_id(byte: u8) -> Id {
    Id::from_bytes([byte; 32])
}

fn init_logging() {
    logging::try_init(
        &LogConfig::new()
            .with_display_level(LogLevel::Warn)
            .with_logging(false),
    )
    .unwrap();
}

fn snowflakes(a: Id, b: Id, nature: Nature) -> Vec<Box<dyn Snowflake>> {
    vec![
        Box::new(UnarySnowflake::new(BETA_VIRTUOUS, BETA_ROGUE, a).with_nature(nature)),
        Box::new(BinarySnowflake::new(BETA_VIRTUOUS, BETA_ROGUE, a, b).with_nature(nature)),
        Box::new(NnarySnowflake::new(BETA_VIRTUOUS, BETA_ROGUE, a).with_nature(nature)),
    ]
}

fn snowballs(a: Id, b: Id, nature: Nature) -> Vec<Box<dyn Snowball>> {
    vec![
        Box::new(UnarySnowball::new(BETA_VIRTUOUS, BETA_ROGUE, a).with_nature(nature)),
        Box::new(BinarySnowball::new(BETA_VIRTUOUS, BETA_ROGUE, a, b).with_nature(nature)),
        Box::new(NnarySnowball::new(BETA_VIRTUOUS, BETA_ROGUE, a).with_nature(nature)),
    ]
}

#[test]
fn test_default_natures() {
    init_logging();
    let a = make_id(1);
    let b = make_id(2);
    assert_eq!(UnarySnowball::new(3, 5, a).nature(), Nature::Virtuous);
    assert_eq!(BinarySnowball::new(3, 5, a, b).nature(), Nature::Rogue);
    assert_eq!(NnarySnowball::new(3, 5, a).nature(), Nature::Virtuous);
}

#[test]
fn test_virtuous_threshold() {
    init_logging();
    let a = make_id(1);
    for mut sf in snowflakes(a, make_id(2), Nature::Virtuous) {
        sf.record_successful_poll(a);
        sf.record_successful_poll(a);
        assert!(!sf.finalized(), "{sf}");
        sf.record_successful_poll(a);
        assert!(sf.finalized(), "{sf}");
    }
    for mut sb in snowballs(a, make_id(2), Nature::Virtuous) {
        sb.record_successful_poll(a);
        sb.record_successful_poll(a);
        assert!(!sb.finalized(), "{sb}");
        sb.record_successful_poll(a);
        assert!(sb.finalized(), "{sb}");
    }
}

#[test]
fn test_rogue_threshold() {
    init_logging();
    let a = make_id(1);
    for mut sb in snowballs(a, make_id(2), Nature::Rogue) {
        for _ in 0..BETA_ROGUE - 1 {
            sb.record_successful_poll(a);
        }
        assert!(!sb.finalized(), "{sb}");
        sb.record_successful_poll(a);
        assert!(sb.finalized(), "{sb}");
        assert_eq!(sb.preference(), a);
    }
}

#[test]
fn test_streak_reset_on_miss() {
    init_logging();
    let a = make_id(1);
    for mut sf in snowflakes(a, make_id(2), Nature::Virtuous) {
        sf.record_successful_poll(a);
        sf.record_successful_poll(a);
        sf.record_unsuccessful_poll();
        assert_eq!(sf.confidence(), 0);
        assert_eq!(sf.preference(), a);

        sf.record_successful_poll(a);
        sf.record_successful_poll(a);
        assert!(!sf.finalized(), "{sf}");
    }
}

#[test]
fn test_streak_reset_on_switch() {
    init_logging();
    let a = make_id(1);
    let b = make_id(2);
    let mut binary = BinarySnowflake::new(BETA_ROGUE, BETA_ROGUE, a, b);
    let mut nnary = NnarySnowflake::new(BETA_ROGUE, BETA_ROGUE, a);
    let shapes: [&mut dyn Snowflake; 2] = [&mut binary, &mut nnary];

    for sf in shapes {
        for _ in 0..3 {
            sf.record_successful_poll(a);
        }
        assert_eq!(sf.confidence(), 3);

        sf.record_successful_poll(b);
        assert_eq!(sf.confidence(), 1);
        assert_eq!(sf.preference(), b);
    }
}

#[test]
fn test_alternating_votes_never_finalize() {
    init_logging();
    let a = make_id(1);
    let b = make_id(2);
    let mut sb = NnarySnowball::new(2, 2, a);
    for _ in 0..100 {
        sb.record_successful_poll(a);
        sb.record_successful_poll(b);
    }
    assert!(!sb.finalized());
    assert_eq!(sb.num_successful_polls(&a), 100);
    assert_eq!(sb.num_successful_polls(&b), 100);
    assert_eq!(sb.preference(), a);
}

#[test]
fn test_tie_break_laziness() {
    init_logging();
    let a = make_id(1);
    let b = make_id(2);
    let mut binary = BinarySnowball::new(BETA_ROGUE, BETA_ROGUE, a, b);
    let mut nnary = NnarySnowball::new(BETA_ROGUE, BETA_ROGUE, a);
    let shapes: [&mut dyn Snowball; 2] = [&mut binary, &mut nnary];

    for sb in shapes {
        sb.record_successful_poll(a);
        assert_eq!(sb.preference(), a);

        sb.record_successful_poll(b);
        assert_eq!(sb.preference(), a);

        sb.record_successful_poll(b);
        assert_eq!(sb.preference(), b);
        assert_eq!(sb.max_successful_polls(), 2);
    }
}

#[test]
fn test_finalized_streak_overrides_totals() {
    init_logging();
    let a = make_id(1);
    let b = make_id(2);
    let mut binary = BinarySnowball::new(BETA_VIRTUOUS, BETA_VIRTUOUS, a, b);
    let mut nnary = NnarySnowball::new(BETA_VIRTUOUS, BETA_VIRTUOUS, a);
    let shapes: [&mut dyn Snowball; 2] = [&mut binary, &mut nnary];

    for sb in shapes {
        for _ in 0..5 {
            sb.record_successful_poll(b);
            sb.record_unsuccessful_poll();
        }
        for _ in 0..BETA_VIRTUOUS {
            sb.record_successful_poll(a);
        }

        assert!(sb.finalized());
        assert!(sb.num_successful_polls(&b) > sb.num_successful_polls(&a));
        assert_eq!(sb.preference(), a);
    }
}

#[test]
fn test_finality_is_terminal() {
    init_logging();
    let a = make_id(1);
    let b = make_id(2);
    for mut sb in snowballs(a, b, Nature::Virtuous) {
        for _ in 0..BETA_VIRTUOUS {
            sb.record_successful_poll(a);
        }
        assert!(sb.finalized());
        let rendered = sb.to_string();

        sb.record_unsuccessful_poll();
        for _ in 0..10 {
            sb.record_successful_poll(b);
        }
        sb.add(make_id(3));

        assert!(sb.finalized());
        assert_eq!(sb.preference(), a);
        assert_eq!(sb.to_string(), rendered);
    }
}

#[test]
fn test_observation_is_idempotent() {
    init_logging();
    let a = make_id(1);
    let b = make_id(2);
    for mut sb in snowballs(a, b, Nature::Rogue) {
        sb.record_successful_poll(b);
        sb.record_successful_poll(a);
        let preference = sb.preference();
        let finalized = sb.finalized();
        for _ in 0..5 {
            assert_eq!(sb.preference(), preference);
            assert_eq!(sb.finalized(), finalized);
        }
    }
}
