//! Card model and hand evaluation tests.

use cribbage::{
    Card, Category, FlushRule, ParseCardError, ScoreBreakdown, ScoringRules, Suit, evaluate,
    evaluate_crib, evaluate_with, fifteens, has_nobs, is_flush, pairs, parse_cards, runs,
    standard_deck,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

fn ranks_in_suits(ranks: &[u8]) -> Vec<Card> {
    // Cycle suits so that no accidental flush appears.
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| card(rank, suit))
        .collect()
}

#[test]
fn card_values_and_ordering() {
    assert_eq!(card(1, Suit::Hearts).value(), 1);
    assert_eq!(card(7, Suit::Clubs).value(), 7);
    assert_eq!(card(10, Suit::Clubs).value(), 10);
    assert_eq!(card(11, Suit::Spades).value(), 10);
    assert_eq!(card(13, Suit::Diamonds).value(), 10);

    assert!(card(2, Suit::Spades) < card(3, Suit::Hearts));
    assert!(card(5, Suit::Hearts) < card(5, Suit::Spades));
    assert_eq!(card(5, Suit::Hearts), card(5, Suit::Hearts));
    assert_ne!(card(5, Suit::Hearts), card(5, Suit::Clubs));
}

#[test]
fn card_parsing_and_display() {
    assert_eq!("10C".parse::<Card>(), Ok(card(10, Suit::Clubs)));
    assert_eq!("tc".parse::<Card>(), Ok(card(10, Suit::Clubs)));
    assert_eq!("ah".parse::<Card>(), Ok(card(1, Suit::Hearts)));
    assert_eq!("J♠".parse::<Card>(), Ok(card(11, Suit::Spades)));
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("1H".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("H".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("5X".parse::<Card>(), Err(ParseCardError::InvalidSuit));

    assert_eq!(card(1, Suit::Hearts).to_string(), "A♥");
    assert_eq!(card(10, Suit::Clubs).to_string(), "10♣");
    assert_eq!(card(12, Suit::Diamonds).to_string(), "Q♦");
    assert_eq!(parse_cards("5H 5D  JS").unwrap().len(), 3);
    assert_eq!(parse_cards("5H ZZ"), Err(ParseCardError::InvalidSuit));
}

#[test]
fn standard_deck_has_every_card_once() {
    let mut deck = standard_deck();
    assert_eq!(deck.len(), cribbage::DECK_SIZE);
    deck.sort_unstable();
    deck.dedup();
    assert_eq!(deck.len(), cribbage::DECK_SIZE);
}

#[test]
fn pairs_grow_quadratically() {
    assert_eq!(evaluate(&ranks_in_suits(&[1, 2, 4, 6, 9]), None).pairs, 0);
    assert_eq!(evaluate(&ranks_in_suits(&[1, 1, 4, 6, 9]), None).pairs, 2);
    assert_eq!(evaluate(&ranks_in_suits(&[1, 1, 3, 3, 9]), None).pairs, 4);
    assert_eq!(evaluate(&ranks_in_suits(&[1, 1, 1, 6, 9]), None).pairs, 6);
    assert_eq!(evaluate(&ranks_in_suits(&[1, 1, 1, 1, 9]), None).pairs, 12);

    let found = pairs(&cards("AH AC 3D 3S 5C"));
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|[a, b]| a.rank == b.rank));
}

#[test]
fn fifteens_are_counted_by_position() {
    let hand = cards("AH AC AD 8H");
    let starter = "7H".parse().ok();
    assert_eq!(evaluate(&hand, starter).fifteens, 2);

    assert_eq!(fifteens(&cards("AH AC AD AS AH")).len(), 0);

    // Each five pairs with the king, and every three fives make fifteen.
    let found = fifteens(&cards("5H 5C 5D KS"));
    assert_eq!(found.len(), 4);
    for combo in &found {
        assert_eq!(combo.iter().map(|c| u16::from(c.value())).sum::<u16>(), 15);
    }
}

#[test]
fn combinations_follow_the_card_order() {
    let found = fifteens(&cards("5H 5C 5D KS"));
    assert_eq!(
        found,
        vec![
            cards("5H KS"),
            cards("5C KS"),
            cards("5D KS"),
            cards("5H 5C 5D"),
        ]
    );

    let found = pairs(&cards("AH AC AD"));
    assert_eq!(
        found,
        vec![
            [card(1, Suit::Hearts), card(1, Suit::Clubs)],
            [card(1, Suit::Hearts), card(1, Suit::Diamonds)],
            [card(1, Suit::Clubs), card(1, Suit::Diamonds)],
        ]
    );
}

#[test]
fn fifteens_use_all_five_cards() {
    // A + 2 + 3 + 4 + 5 is the only way to fifteen.
    let hand = ranks_in_suits(&[1, 2, 3, 4]);
    let starter = Some(card(5, Suit::Spades));
    let mut all = hand.clone();
    all.extend(starter);
    assert_eq!(fifteens(&all).len(), 1);
    assert_eq!(evaluate(&hand, starter).fifteens, 2);
}

#[test]
fn runs_take_the_longest_length() {
    assert_eq!(evaluate(&ranks_in_suits(&[1, 2, 3, 4, 5]), None).runs, 5);
    assert_eq!(evaluate(&ranks_in_suits(&[1, 2, 3, 4, 9]), None).runs, 4);
    assert_eq!(evaluate(&ranks_in_suits(&[1, 1, 3, 4, 5]), None).runs, 3);
    assert_eq!(evaluate(&ranks_in_suits(&[1, 3, 5, 7, 9]), None).runs, 0);
    assert_eq!(evaluate(&ranks_in_suits(&[12, 13, 1, 2]), None).runs, 0);

    let found = runs(&ranks_in_suits(&[1, 2, 3, 4, 9]));
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].iter().map(|c| c.rank).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn repeated_rank_scores_each_run_instance() {
    let hand = ranks_in_suits(&[1, 3, 3, 4, 5]);
    let found = runs(&hand);
    assert_eq!(found.len(), 2);
    for run in &found {
        assert_eq!(run.iter().map(|c| c.rank).collect::<Vec<_>>(), vec![3, 4, 5]);
    }
    assert_ne!(found[0], found[1]);
    assert_eq!(evaluate(&hand, None).runs, 6);

    // Two repeated ranks give four runs of three.
    assert_eq!(evaluate(&ranks_in_suits(&[3, 3, 4, 4, 5]), None).runs, 12);
    // A repeated rank inside a run of four doubles it.
    assert_eq!(evaluate(&ranks_in_suits(&[3, 4, 5, 6, 6]), None).runs, 8);
}

#[test]
fn flat_flush_ignores_the_starter() {
    let hearts = cards("2H 4H 6H 8H");
    assert!(is_flush(&hearts));
    assert_eq!(evaluate(&hearts, "QH".parse().ok()).flush, 4);
    assert_eq!(evaluate(&hearts, "QC".parse().ok()).flush, 4);
    assert_eq!(evaluate(&hearts, None).flush, 4);

    let five_hearts = cards("2H 4H 6H 8H QH");
    assert_eq!(evaluate(&five_hearts, None).flush, 4);

    let mixed = cards("2H 4H 6H 8C");
    assert!(!is_flush(&mixed));
    assert_eq!(evaluate(&mixed, "QH".parse().ok()).flush, 0);

    assert!(!is_flush(&cards("2H 4H 6H")));
}

#[test]
fn standard_flush_rewards_a_matching_starter() {
    let rules = ScoringRules::default().with_flush(FlushRule::Standard);
    let hearts = cards("2H 4H 6H 8H");

    assert_eq!(evaluate_with(&hearts, "QH".parse().ok(), &rules).flush, 5);
    assert_eq!(evaluate_with(&hearts, "QC".parse().ok(), &rules).flush, 4);
    assert_eq!(evaluate_crib(&hearts, "QH".parse().ok(), &rules).flush, 5);
    assert_eq!(evaluate_crib(&hearts, "QC".parse().ok(), &rules).flush, 0);

    let flat = ScoringRules::default();
    assert_eq!(evaluate_crib(&hearts, "QC".parse().ok(), &flat).flush, 4);
}

#[test]
fn nobs_needs_the_matching_starter() {
    let hand = cards("JS 2H 4D 8C");
    assert_eq!(evaluate(&hand, "5S".parse().ok()).nobs, 1);
    assert_eq!(evaluate(&hand, "5H".parse().ok()).nobs, 0);
    assert_eq!(evaluate(&hand, None).nobs, 0);
    assert!(!has_nobs(&hand, None));

    // A jack starter is not its own nobs.
    assert!(!has_nobs(&cards("2S 4H 6D 8C"), "JS".parse().ok()));

    let rules = ScoringRules::default().with_nobs(false);
    assert_eq!(evaluate_with(&hand, "5S".parse().ok(), &rules).nobs, 0);
}

#[test]
fn well_known_hands() {
    let hand = cards("5H 5C 5D JS");
    let best = evaluate(&hand, "5S".parse().ok());
    assert_eq!(
        best,
        ScoreBreakdown {
            fifteens: 16,
            pairs: 12,
            runs: 0,
            flush: 0,
            nobs: 1,
        }
    );
    assert_eq!(best.total(), 29);

    let double_run = evaluate(&cards("4H 5H 6H 6C"), "5C".parse().ok());
    assert_eq!(double_run.fifteens, 8);
    assert_eq!(double_run.pairs, 4);
    assert_eq!(double_run.runs, 12);
    assert_eq!(double_run.total(), 24);
    assert_eq!(
        double_run.to_string(),
        "24 (fifteens 8, pairs 4, runs 12)"
    );

    let nineteen = evaluate(&cards("2H 4C 6D 8S"), "QH".parse().ok());
    assert_eq!(nineteen.total(), 0);
    assert_eq!(nineteen.to_string(), "0");
}

#[test]
fn undersized_hands_score_zero() {
    assert_eq!(evaluate(&[], None), ScoreBreakdown::default());
    assert_eq!(evaluate(&[], "5S".parse().ok()), ScoreBreakdown::default());
    assert_eq!(evaluate(&cards("5H"), None).total(), 0);
}

#[test]
fn five_card_hand_with_a_starter_still_scores() {
    let score = evaluate(&cards("5H 5C 5D 5S JH"), "KH".parse().ok());
    assert_eq!(score.fifteens, 24);
    assert_eq!(score.pairs, 12);
    assert_eq!(score.nobs, 1);
    assert_eq!(score.total(), 37);
    assert_eq!(cribbage::evaluator::MAX_SCORING_CARDS, 6);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "exceeds")]
fn oversized_scoring_set_is_rejected_in_debug() {
    let _ = evaluate(&standard_deck()[..7], None);
}

#[test]
fn total_is_the_sum_of_categories() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = standard_deck();

    for _ in 0..500 {
        deck.shuffle(&mut rng);
        let score = evaluate(&deck[..4], Some(deck[4]));
        let sum: u16 = score.iter().map(|(_, points)| u16::from(points)).sum();
        assert_eq!(score.total(), sum);
        assert_eq!(
            score.total(),
            u16::from(score.get(Category::Fifteens))
                + u16::from(score.pairs)
                + u16::from(score.runs)
                + u16::from(score.flush)
                + u16::from(score.nobs)
        );
        assert_eq!(score.fifteens, 2 * fifteens(&deck[..5]).len() as u8);
        assert_eq!(score, evaluate(&deck[..4], Some(deck[4])));
    }
}

#[test]
fn category_names() {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["fifteens", "pairs", "runs", "flush", "nobs"]);
}
