// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows exercised through the public crate API.

use iced_wheel::config::{
    self, Config, MAX_CHOICES, RESULT_MESSAGE_DELAY, REVEAL_DELAY,
};
use iced_wheel::i18n::fluent::I18n;
use iced_wheel::wheel::{looks_like_link, ChoiceStore, Phase, Sequencer, TickOutcome};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn full_choose_cycle_from_defaults() {
    let store = ChoiceStore::with_defaults();
    let mut sequencer = Sequencer::new();
    let mut rng = SmallRng::seed_from_u64(99);
    let start = Instant::now();

    assert!(sequencer.choose(&store, &mut rng, start));
    assert_eq!(sequencer.phase(), Phase::Sequencing);

    // Short of the delay nothing is disclosed.
    assert_eq!(sequencer.tick(start + REVEAL_DELAY / 3), TickOutcome::None);

    // At the delay the winner discloses, exactly once.
    assert_eq!(sequencer.tick(start + REVEAL_DELAY), TickOutcome::Revealed);
    let winner = sequencer.winner().expect("winner disclosed").clone();
    assert!(store.choices().iter().any(|c| c.id() == winner.id()));

    // The hint line follows its own delay.
    let revealed = start + REVEAL_DELAY;
    assert!(!sequencer.result_message_due(revealed));
    assert!(sequencer.result_message_due(revealed + RESULT_MESSAGE_DELAY));

    assert!(sequencer.close());
    assert_eq!(sequencer.phase(), Phase::Idle);
    assert!(sequencer.winner().is_none());
}

#[test]
fn editing_is_only_possible_between_cycles() {
    let mut store = ChoiceStore::with_defaults();
    let mut sequencer = Sequencer::new();
    let mut rng = SmallRng::seed_from_u64(5);
    let start = Instant::now();

    sequencer.choose(&store, &mut rng, start);
    assert!(!sequencer.is_idle());

    sequencer.tick(start + REVEAL_DELAY);
    sequencer.close();

    // Back in idle, edits work again and a second cycle can run.
    let id = store.add("second round").expect("store has room");
    assert!(sequencer.choose(&store, &mut rng, Instant::now()));
    store.remove(id); // the sequencer holds its own clone of the winner
    assert!(sequencer.winner().is_some());
}

#[test]
fn wheel_capacity_is_enforced_across_operations() {
    let mut store = ChoiceStore::new();
    for i in 0..MAX_CHOICES {
        assert!(store.add(&format!("choice {i}")).is_some());
    }
    assert!(store.is_full());
    assert!(store.add("one too many").is_none());

    store.reset();
    assert_eq!(store.len(), 5);
    assert!(!store.is_full());
}

#[test]
fn link_detection_matches_the_documented_heuristic() {
    assert!(looks_like_link("cine2nerdle.com"));
    assert!(looks_like_link("https://chess.com"));
    assert!(looks_like_link("http://anything"));
    assert!(!looks_like_link("Latest Trump news"));
    assert!(!looks_like_link("example.org"));

    let mut store = ChoiceStore::new();
    let id = store.add("chess.com").expect("store has room");
    let choice = store.get(id).expect("choice exists");
    assert_eq!(choice.link_url(), "https://chess.com");
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn seeded_cycles_reproduce_the_same_winner() {
    let store = ChoiceStore::with_defaults();
    let now = Instant::now();

    let draw = |seed: u64| {
        let mut sequencer = Sequencer::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        sequencer.choose(&store, &mut rng, now);
        sequencer.winner().map(|c| c.text().to_string())
    };

    assert_eq!(draw(1234), draw(1234));
}
