// tests/engine_feasibility_tests.rs

use chip_calc::domain::{Denomination, Points};
use chip_calc::engine::{aggregate_value, check_feasibility};

#[test]
fn single_denomination_supports_two_players() {
    let denoms = vec![Denomination::new(100, 20, "black")];

    let res = check_feasibility(&denoms, Points(1000), 4);

    assert_eq!(res.max_players, 2);
    assert!(!res.feasible);
    assert!(res.message.contains("not enough chips"));
    assert!(res.message.contains('2'));
}

#[test]
fn enough_supply_is_feasible_with_empty_message() {
    let denoms = vec![
        Denomination::new(5, 50, "white"),
        Denomination::new(10, 50, "red"),
        Denomination::new(25, 40, "green"),
        Denomination::new(50, 30, "blue"),
        Denomination::new(100, 20, "black"),
    ];

    let res = check_feasibility(&denoms, Points(1000), 4);

    // 250 + 500 + 1000 + 1500 + 2000 = 5250
    assert_eq!(res.max_players, 5);
    assert!(res.feasible);
    assert!(res.message.is_empty());
}

#[test]
fn exact_capacity_is_feasible() {
    let denoms = vec![Denomination::new(100, 40, "black")];
    let res = check_feasibility(&denoms, Points(1000), 4);
    assert_eq!(res.max_players, 4);
    assert!(res.feasible);
}

#[test]
fn zero_target_is_infeasible() {
    let denoms = vec![Denomination::new(100, 40, "black")];
    let res = check_feasibility(&denoms, Points::ZERO, 4);
    assert!(!res.feasible);
    assert_eq!(res.max_players, 0);
    assert!(!res.message.is_empty());
}

#[test]
fn zero_quantity_rows_do_not_count() {
    let denoms = vec![
        Denomination::new(100, 0, "black"),
        Denomination::new(25, 40, "green"),
    ];
    assert_eq!(aggregate_value(&denoms), Points(1000));

    let res = check_feasibility(&denoms, Points(500), 3);
    assert_eq!(res.max_players, 2);
    assert!(!res.feasible);
}

#[test]
fn empty_catalogue_supports_nobody() {
    let res = check_feasibility(&[], Points(100), 1);
    assert_eq!(res.max_players, 0);
    assert!(!res.feasible);
}
