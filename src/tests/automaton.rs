// This is actually defined at `crate::automaton::tests_for_automaton`

use super::*;
use crate::error::AutomatonError;

use expect_test::expect;

fn single(s: &str) -> State {
    State::Single(Symbol::from(s))
}

#[test]
fn regular_grammar_compiles() {
    let g = Grammar::from_text(
        "S -> a A | a B\nA -> b B | b C\nB -> c A | c C\nC -> a",
        true,
    )
    .unwrap();
    let a = Automaton::from_grammar(&g).unwrap();
    expect![[
        "Automaton(N={A, B, C, S, ◇}, T={a, b, c}, transitions=(S-a->A, S-a->B, A-b->B, A-b->C, B-c->A, B-c->C, C-a->◇), F={◇}, q0=S)"
    ]]
    .assert_eq(&a.to_string());
    assert_eq!(a.q0(), &single("S"));
    assert_eq!(a.finals(), &BTreeSet::from([single("◇")]));
}

#[test]
fn unit_productions_become_epsilon_transitions() {
    let g = Grammar::from_text("S -> A\nA -> a", true).unwrap();
    let a = Automaton::from_grammar(&g).unwrap();
    assert_eq!(a.transitions()[0].to_string(), "S-ε->A");
    assert_eq!(a.transitions()[1].to_string(), "A-a->◇");
}

#[test]
fn non_regular_shapes_are_rejected() {
    let g = Grammar::from_text("S -> a b c", true).unwrap();
    assert!(matches!(
        Automaton::from_grammar(&g),
        Err(AutomatonError::NotRegular { .. })
    ));
    let g = Grammar::from_text("S -> A a\nA -> a", true).unwrap();
    assert!(matches!(
        Automaton::from_grammar(&g),
        Err(AutomatonError::NotRegular { .. })
    ));
}

#[test]
fn transitions_from_text() {
    let trs = Transition::from_text("q0, a, q1\n\n q1 , b , q2 ").unwrap();
    assert_eq!(trs.len(), 2);
    assert_eq!(trs[0].to_string(), "q0-a->q1");
    assert_eq!(trs[1].to_string(), "q1-b->q2");

    assert!(matches!(
        Transition::from_text("q0 a q1"),
        Err(AutomatonError::MalformedAutomaton { .. })
    ));
}

#[test]
fn automaton_from_text_infers_its_parts() {
    let a = Automaton::from_text(
        "q0, a, q1\nq1, ε, q2\nq2, b, q0",
        Some(BTreeSet::from([single("q2")])),
        None,
    )
    .unwrap();
    assert_eq!(a.q0(), &single("q0"));
    // ε labels transitions but is not an input symbol
    assert_eq!(a.symbols(), &BTreeSet::from([Symbol::from("a"), Symbol::from("b")]));
    assert_eq!(a.states().len(), 3);
    assert!(matches!(
        Automaton::from_text("", None, None),
        Err(AutomatonError::NoTransitions)
    ));
}

#[test]
fn delta_is_total() {
    let a = Automaton::from_text("q0, a, q1\nq0, a, q2\nq1, b, q2", None, None).unwrap();
    assert_eq!(
        a.delta(&single("q0"), &Symbol::from("a")),
        BTreeSet::from([single("q1"), single("q2")])
    );
    assert!(a.delta(&single("q1"), &Symbol::from("a")).is_empty());
    assert!(a.delta(&single("zzz"), &Symbol::from("a")).is_empty());
}

#[test]
fn construction_failures_are_distinguishable() {
    let tr = |f: &str, l: &str, t: &str| Transition::new(f, l, State::from(t)).unwrap();
    let n = BTreeSet::from([single("q0"), single("q1")]);
    let t = BTreeSet::from([Symbol::from("a")]);

    assert!(matches!(
        Automaton::new(
            n.clone(),
            BTreeSet::from([Symbol::from("q1")]),
            vec![],
            single("q0"),
            BTreeSet::new(),
        ),
        Err(AutomatonError::NotDisjoint { .. })
    ));
    assert!(matches!(
        Automaton::new(n.clone(), t.clone(), vec![], single("q9"), BTreeSet::new()),
        Err(AutomatonError::StartNotState { .. })
    ));
    assert!(matches!(
        Automaton::new(
            n.clone(),
            t.clone(),
            vec![],
            single("q0"),
            BTreeSet::from([single("q9")]),
        ),
        Err(AutomatonError::FinalNotState { .. })
    ));
    assert!(matches!(
        Automaton::new(
            n.clone(),
            t.clone(),
            vec![tr("q0", "z", "q1")],
            single("q0"),
            BTreeSet::new(),
        ),
        Err(AutomatonError::UnknownTransitionParts { .. })
    ));
    assert!(Automaton::new(n, t, vec![tr("q0", "a", "q1")], single("q0"), BTreeSet::new()).is_ok());
}

#[test]
fn transition_parts_must_be_nonempty() {
    assert_eq!(
        Transition::new("", "a", State::from("q")),
        Err(AutomatonError::InvalidState { which: "frm" })
    );
    assert_eq!(
        Transition::new("q", "", State::from("q")),
        Err(AutomatonError::InvalidLabel)
    );
    assert_eq!(
        Transition::new("q", "a", State::SymbolSet(BTreeSet::new())),
        Err(AutomatonError::InvalidState { which: "to" })
    );
}

#[test]
fn coalescing_joins_symbol_set_states() {
    let ab: BTreeSet<Symbol> = ["A", "B"].map(Symbol::from).into();
    let c: BTreeSet<Symbol> = [Symbol::from("C")].into();
    let trs = vec![Transition::new(ab.clone(), "x", State::from(c.clone())).unwrap()];
    let a = Automaton::new(
        BTreeSet::from([State::from(ab), State::from(c.clone())]),
        BTreeSet::from([Symbol::from("x")]),
        trs,
        State::from(["A", "B"].map(Symbol::from).into_iter().collect::<BTreeSet<_>>()),
        BTreeSet::from([State::from(c)]),
    )
    .unwrap();
    assert_eq!(a.transitions()[0].to_string(), "{A, B}-x->{C}");

    let j = a.coalesce();
    assert_eq!(j.transitions()[0].to_string(), "AB-x->C");
    assert_eq!(j.q0(), &single("AB"));
    assert_eq!(j.finals(), &BTreeSet::from([single("C")]));
}
