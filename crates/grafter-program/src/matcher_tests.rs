use grafter_core::Symbol;

use crate::{Condition, Extraction, Hole, MatcherId, MatcherUnit, TypeTest};

fn unit(conditions: Vec<Condition>, extractions: Vec<Extraction>) -> MatcherUnit {
    MatcherUnit {
        id: MatcherId(9),
        name: "CallMatcher".to_string(),
        key: "Call(...)".to_string(),
        negated: false,
        conditions,
        children_procedure: Vec::new(),
        extractions,
    }
}

#[test]
fn type_test_accepts_listed_subtypes() {
    let expr = Symbol::from_raw(0);
    let number = Symbol::from_raw(1);
    let other = Symbol::from_raw(2);
    let test = TypeTest {
        name: expr,
        accepts: vec![expr, number],
    };

    assert!(test.accepts(number));
    assert!(!test.accepts(other));
    assert!(TypeTest::exact(other).accepts(other));
}

#[test]
fn dependencies_are_deduplicated_in_reference_order() {
    let unit = unit(
        vec![
            Condition::Child {
                index: 0,
                matcher: MatcherId(3),
            },
            Condition::AnyOf(vec![MatcherId(1), MatcherId(3)]),
        ],
        vec![
            Extraction::Nested {
                index: 0,
                matcher: MatcherId(3),
            },
            Extraction::FirstOf(vec![MatcherId(1), MatcherId(2)]),
        ],
    );

    assert_eq!(
        unit.dependencies(),
        vec![MatcherId(3), MatcherId(1), MatcherId(2)]
    );
}

#[test]
fn children_procedure_contributes_dependencies() {
    let mut unit = unit(vec![Condition::MatchesChildren], Vec::new());
    unit.children_procedure = vec![Condition::Child {
        index: 4,
        matcher: MatcherId(0),
    }];

    assert_eq!(unit.dependencies(), vec![MatcherId(0)]);
    assert!(!unit.extracts());
}

#[test]
fn direct_holes_skip_nested_extractions() {
    let unit = unit(
        Vec::new(),
        vec![
            Extraction::Data(Hole(1)),
            Extraction::Nested {
                index: 0,
                matcher: MatcherId(0),
            },
            Extraction::Remaining {
                hole: Hole(4),
                start: 1,
            },
        ],
    );

    assert_eq!(unit.direct_holes(), vec![Hole(1), Hole(4)]);
}
