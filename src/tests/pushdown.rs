// This is actually defined at `crate::pushdown::tests_for_pushdown`

use super::*;
use crate::error::SimulationError;

fn top_down_grammar() -> Grammar {
    // P[0] = S -> a B C, P[1] = B -> a B, P[2] = B -> b, P[3] = C -> a
    Grammar::from_text("S -> a B C\nB -> a B | b\nC -> a", true).unwrap()
}

#[test]
fn top_down_recognizes_aaba() {
    let g = top_down_grammar();
    let p = g.productions();
    let id = TopDownInstantaneousDescription::new(&g, "aaba".chars()).unwrap();
    assert_eq!(id.top().unwrap(), g.start());
    assert_eq!(id.head().unwrap(), &Symbol::from("a"));
    assert!(!id.is_done());

    let id = id.predict(&p[0]).unwrap().match_head().unwrap();
    let id = id.predict(&p[1]).unwrap().match_head().unwrap();
    let id = id.predict(&p[2]).unwrap().match_head().unwrap();
    let id = id.predict(&p[3]).unwrap().match_head().unwrap();
    assert!(id.is_done());
    assert_eq!(id.top().unwrap(), &Symbol::end_marker());
    assert_eq!(id.steps(), [p[0].clone(), p[1].clone(), p[2].clone(), p[3].clone()]);
}

#[test]
fn top_down_moves_leave_the_original_alone() {
    let g = top_down_grammar();
    let id = TopDownInstantaneousDescription::new(&g, "aaba".chars()).unwrap();
    let after = id.predict(&g.productions()[0]).unwrap();
    assert_eq!(id.stack().len(), 2);
    assert_eq!(after.stack().len(), 4);
    assert_eq!(id.head_pos(), 0);
}

#[test]
fn predict_and_match_check_their_preconditions() {
    let g = top_down_grammar();
    let p = g.productions();
    let id = TopDownInstantaneousDescription::new(&g, "aaba".chars()).unwrap();
    // the top is S, not B
    assert!(matches!(
        id.predict(&p[1]),
        Err(SimulationError::PredictMismatch { .. })
    ));
    // the top is a nonterminal, nothing to match
    assert!(matches!(
        id.match_head(),
        Err(SimulationError::MatchMismatch { .. })
    ));
    // after the predict the top is the terminal a, which is not under the head of "b..."
    let id = TopDownInstantaneousDescription::new(&g, "b".chars()).unwrap();
    let id = id.predict(&p[0]).unwrap();
    assert!(matches!(
        id.match_head(),
        Err(SimulationError::MatchMismatch { .. })
    ));
}

#[test]
fn epsilon_predictions_push_nothing() {
    // P[0] = S -> a S, P[1] = S -> ε
    let g = Grammar::from_text("S -> a S | ε", true).unwrap();
    let p = g.productions();
    let id = TopDownInstantaneousDescription::new(&g, "a".chars()).unwrap();
    let id = id.predict(&p[0]).unwrap().match_head().unwrap();
    let id = id.predict(&p[1]).unwrap();
    assert!(id.is_done());
}

#[test]
fn the_end_marker_may_not_appear_in_the_grammar() {
    let g = Grammar::from_text("S -> ♯", true).unwrap();
    assert!(matches!(
        TopDownInstantaneousDescription::new(&g, "a".chars()),
        Err(SimulationError::EndMarkerInGrammar)
    ));
}

#[test]
fn equal_configurations_reached_by_different_moves() {
    // P[0] = S -> a B, P[1] = S -> a C, P[2] = B -> b, P[3] = C -> b
    let g = Grammar::from_text("S -> a B | a C\nB -> b\nC -> b", true).unwrap();
    let p = g.productions();
    let id = TopDownInstantaneousDescription::new(&g, "ab".chars()).unwrap();
    let via_b = id
        .predict(&p[0]).unwrap()
        .match_head().unwrap()
        .predict(&p[2]).unwrap()
        .match_head().unwrap();
    let via_c = id
        .predict(&p[1]).unwrap()
        .match_head().unwrap()
        .predict(&p[3]).unwrap()
        .match_head().unwrap();
    assert_eq!(via_b, via_c);
    assert_ne!(via_b.steps(), via_c.steps());
    assert!(via_b.is_done() && via_c.is_done());
}

fn bottom_up_grammar() -> Grammar {
    // P[0] = S -> A C, P[1] = A -> a b, P[2] = C -> c
    Grammar::from_text("S -> A C\nA -> a b\nC -> c", true).unwrap()
}

#[test]
fn bottom_up_parses_abc() {
    let g = bottom_up_grammar();
    let p = g.productions();
    let id = BottomUpInstantaneousDescription::new(&g, "abc".chars());
    assert!(!id.is_done());

    let id = id.shift().unwrap().shift().unwrap().reduce(&p[1]).unwrap();
    assert_eq!(id.top().unwrap(), &Symbol::from("A"));
    let id = id.shift().unwrap().reduce(&p[2]).unwrap().reduce(&p[0]).unwrap();
    assert!(id.is_done());

    assert_eq!(id.stack().len(), 1);
    assert_eq!(
        id.stack().peek().unwrap().to_string(),
        "(S: (A: (a), (b)), (C: (c)))"
    );
    // reductions are recorded front-first, so the steps read top-down
    assert_eq!(
        id.steps().collect::<Vec<_>>(),
        vec![&p[0], &p[2], &p[1]]
    );
}

#[test]
fn reduce_checks_the_popped_roots() {
    let g = bottom_up_grammar();
    let p = g.productions();
    let id = BottomUpInstantaneousDescription::new(&g, "abc".chars());
    let id = id.shift().unwrap().shift().unwrap();
    // the two topmost roots are a b, not A C
    assert!(matches!(
        id.reduce(&p[0]),
        Err(SimulationError::ReduceMismatch { .. })
    ));
    // C -> c pops one tree, rooted at b
    assert!(matches!(
        id.reduce(&p[2]),
        Err(SimulationError::ReduceMismatch { .. })
    ));
}

#[test]
fn moves_off_the_tape_fail() {
    let g = bottom_up_grammar();
    let id = BottomUpInstantaneousDescription::new(&g, "a".chars());
    let id = id.shift().unwrap();
    assert!(matches!(
        id.shift(),
        Err(SimulationError::HeadOutOfBounds { pos: 1 })
    ));
    assert!(matches!(
        BottomUpInstantaneousDescription::new(&g, "abc".chars()).reduce(&g.productions()[2]),
        Err(SimulationError::EmptyStack)
    ));
}
