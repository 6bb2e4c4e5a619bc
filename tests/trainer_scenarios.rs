//! End-to-end trainer scenarios
//!
//! Drives `GrammarEngine` the way a presentation layer would and checks the
//! observable sentence, puzzle and score behaviour.

#[cfg(test)]
mod trainer_scenarios {
    use grammar_core::command::handle_line;
    use grammar_core::config::TrainerConfig;
    use grammar_core::core::agreement::resolve_numeral_word;
    use grammar_core::core::data::{numeral_system, EXISTENTIAL_VERB, NOUNS};
    use grammar_core::core::puzzle::{PlacementOutcome, PuzzleState};
    use grammar_core::core::types::{Mode, NounCategory, NumeralValue, SlotKind, TemplateId};
    use grammar_core::persistence;
    use grammar_core::scoring::{BadgeTier, ScoreLedger};
    use grammar_core::GrammarEngine;

    const EXISTENTIAL_SCRAMBLE: [SlotKind; 7] = [
        SlotKind::Noun,
        SlotKind::Location,
        SlotKind::Subject,
        SlotKind::Verb,
        SlotKind::Article,
        SlotKind::Preposition,
        SlotKind::Number,
    ];

    fn finish_possessive_perfectly(engine: &mut GrammarEngine) {
        for k in [SlotKind::Subject, SlotKind::Verb, SlotKind::Number, SlotKind::Noun] {
            engine.place_slot(k);
        }
    }

    // Worked example: puk, one, existential, first location.
    #[test]
    fn test_puk_example_end_to_end() {
        let mut engine = GrammarEngine::new();
        engine.select_noun(0).unwrap();
        engine.select_numeral(1).unwrap();
        engine.select_location(0).unwrap();
        engine.switch_template(TemplateId::Existential);

        let sentence = engine.sentence();
        let numeral = numeral_system(NounCategory::General)[0].chuukese;
        assert_eq!(
            sentence.chuukese_words(),
            vec!["A", EXISTENTIAL_VERB, numeral, "puk", "wóón", "ewe", "tépen"]
        );

        engine.set_mode(Mode::Build);
        assert_eq!(engine.remaining_scrambled_slots(), EXISTENTIAL_SCRAMBLE.to_vec());

        let mut last = PlacementOutcome::Ignored;
        for kind in EXISTENTIAL_SCRAMBLE {
            last = engine.place_slot(kind);
        }
        let coincidences = EXISTENTIAL_SCRAMBLE
            .iter()
            .zip(&sentence.canonical_order)
            .filter(|(a, b)| a == b)
            .count() as u32;
        match last {
            PlacementOutcome::Completed { round_score, perfect, .. } => {
                assert_eq!(round_score, coincidences);
                assert!(!perfect);
            }
            other => panic!("expected completion, got {:?}", other),
        }
        for placed in engine.placed_slots() {
            let position = EXISTENTIAL_SCRAMBLE.iter().position(|k| *k == placed.kind).unwrap();
            assert_eq!(placed.correct, sentence.canonical_order[position] == placed.kind);
        }
    }

    #[test]
    fn test_numeral_word_always_matches_noun_category() {
        let mut engine = GrammarEngine::new();
        for (index, noun) in NOUNS.iter().enumerate() {
            engine.select_noun(index).unwrap();
            for value in 1..=10 {
                engine.select_numeral(value).unwrap();
                let bound = engine.sentence().binding(SlotKind::Number).unwrap().chuukese.clone();
                let expected = resolve_numeral_word(noun.category, NumeralValue::new(value).unwrap());
                assert_eq!(bound, expected);
            }
        }
    }

    #[test]
    fn test_perfect_build_reports_full_score() {
        let mut engine = GrammarEngine::new();
        engine.set_mode(Mode::Build);
        let canonical = engine.sentence().canonical_order;
        let mut last = PlacementOutcome::Ignored;
        for kind in &canonical {
            last = engine.place_slot(*kind);
        }
        assert_eq!(
            last,
            PlacementOutcome::Completed { correct: true, round_score: 7, perfect: true }
        );
        assert_eq!(engine.puzzle_state(), PuzzleState::Completed);
        assert!(engine.remaining_scrambled_slots().is_empty());
    }

    #[test]
    fn test_score_is_monotone_and_badge_has_no_hysteresis() {
        let mut engine = GrammarEngine::new();
        engine.switch_template(TemplateId::Possessive);
        engine.set_mode(Mode::Build);

        let mut previous = 0;
        for _ in 0..25 {
            finish_possessive_perfectly(&mut engine);
            let badge_before = engine.badge_tier();
            engine.reset_puzzle();
            assert_eq!(engine.badge_tier(), badge_before);
            assert!(engine.cumulative_score() >= previous);
            previous = engine.cumulative_score();
        }
        assert_eq!(engine.cumulative_score(), 100);
        assert_eq!(engine.badge_tier(), Some(BadgeTier::Beginner));
    }

    #[test]
    fn test_repeat_place_changes_nothing() {
        let mut engine = GrammarEngine::new();
        engine.set_mode(Mode::Build);
        engine.place_slot(SlotKind::Verb);
        let placed_before = engine.placed_slots();
        assert_eq!(engine.place_slot(SlotKind::Verb), PlacementOutcome::Ignored);
        assert_eq!(engine.placed_slots(), placed_before);
        assert_eq!(engine.cumulative_score(), 0);
    }

    #[test]
    fn test_placing_in_explore_mode_is_ignored() {
        let mut engine = GrammarEngine::new();
        assert_eq!(engine.place_slot(SlotKind::Subject), PlacementOutcome::Ignored);
        assert_eq!(engine.puzzle_state(), PuzzleState::Idle);
    }

    #[test]
    fn test_ledger_persists_through_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrainerConfig {
            ledger_path: Some(dir.path().join("scores.bin")),
            default_template: TemplateId::Possessive,
            ..TrainerConfig::default()
        };

        let mut engine = GrammarEngine::from_config(&config).unwrap();
        engine.set_mode(Mode::Build);
        finish_possessive_perfectly(&mut engine);
        assert!(engine.save_ledger().unwrap());

        let restored = GrammarEngine::from_config(&config).unwrap();
        assert_eq!(restored.cumulative_score(), 4);
        assert_eq!(restored.template(), TemplateId::Possessive);
    }

    #[test]
    fn test_corrupt_ledger_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.bin");
        persistence::save_ledger(&ScoreLedger::with_score(450), &path).unwrap();
        let intact = std::fs::read(&path).unwrap();
        std::fs::write(&path, &intact[..intact.len() - 1]).unwrap();
        let truncated = std::fs::read(&path).unwrap();

        let config = TrainerConfig {
            ledger_path: Some(path.clone()),
            default_template: TemplateId::Possessive,
            ..TrainerConfig::default()
        };
        assert!(GrammarEngine::from_config(&config).is_err());

        let mut engine = GrammarEngine::from_config_or_detached(&config);
        assert!(engine.ledger_path().is_none());
        assert_eq!(engine.template(), TemplateId::Possessive);
        engine.set_mode(Mode::Build);
        finish_possessive_perfectly(&mut engine);
        assert!(!engine.save_ledger().unwrap());

        assert_eq!(std::fs::read(&path).unwrap(), truncated);
    }

    #[test]
    fn test_json_protocol_session() {
        let mut engine = GrammarEngine::new();
        let lines = [
            r#"{"command":"switch_template","template":"possessive"}"#,
            r#"{"command":"set_mode","mode":"build"}"#,
            r#"{"command":"place_slot","slot":"subject"}"#,
            r#"{"command":"place_slot","slot":"verb"}"#,
            r#"{"command":"place_slot","slot":"number"}"#,
        ];
        for line in lines {
            assert!(handle_line(&mut engine, line, 1500).is_ok(), "{}", line);
        }
        let done = handle_line(&mut engine, r#"{"command":"place_slot","slot":"noun"}"#, 1500);
        let json = serde_json::to_value(&done).unwrap();
        assert_eq!(json["outcome"]["placement"]["kind"], "completed");
        assert_eq!(json["outcome"]["placement"]["perfect"], true);
        assert_eq!(json["snapshot"]["cumulative_score"], 4);
        assert_eq!(json["snapshot"]["puzzle_state"]["state"], "completed");
    }

    #[test]
    fn test_stale_highlight_over_protocol() {
        let mut engine = GrammarEngine::new();
        let first = serde_json::to_value(handle_line(
            &mut engine,
            r#"{"command":"select_noun","index":2}"#,
            1500,
        ))
        .unwrap();
        let stale = first["outcome"]["ticket"]["generation"].as_u64().unwrap();
        handle_line(&mut engine, r#"{"command":"select_noun","index":3}"#, 1500);

        let reply = serde_json::to_value(handle_line(
            &mut engine,
            &format!(r#"{{"command":"highlight_expired","element":"noun","generation":{}}}"#, stale),
            1500,
        ))
        .unwrap();
        assert_eq!(reply["outcome"]["cleared"], false);
        assert_eq!(reply["snapshot"]["highlights"].as_array().unwrap().len(), 1);
    }
}
