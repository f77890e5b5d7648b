//! Интеграционные тесты для доменной модели (crate::domain).

use chip_calc::domain::presets::{FIRST_USER_ID, HOME_GAME_500_ID, STANDARD_300_ID};
use chip_calc::domain::*;
use chip_calc::engine::validate;

/// Points: арифметика и saturating.
#[test]
fn points_arithmetic_and_saturating() {
    let a = Points(100);
    let b = Points(50);

    assert_eq!(a + b, Points(150));
    assert_eq!(a - b, Points(50));
    assert_eq!(b - a, Points::ZERO);
    assert_eq!(a * 3, Points(300));
    assert_eq!(Points(u64::MAX) * 2, Points(u64::MAX));

    let mut x = Points(10);
    x += Points(5);
    assert_eq!(x, Points(15));
    x -= Points(20);
    assert!(x.is_zero());

    let total: Points = vec![Points(1), Points(2), Points(3)].into_iter().sum();
    assert_eq!(total, Points(6));
}

/// Display учитывает ширину, в JSON Points это просто число.
#[test]
fn points_display_and_json() {
    assert_eq!(Points(1500).to_string(), "1500");
    assert_eq!(format!("{:>5}", Points(25)), "   25");
    assert_eq!(serde_json::to_string(&Points(25)).unwrap(), "25");
    assert_eq!(serde_json::from_str::<Points>("40").unwrap(), Points(40));
}

/// units_of: деление с округлением вниз, ноль – не паника.
#[test]
fn points_units_of_floors_and_handles_zero() {
    assert_eq!(Points(1000).units_of(Points(300)), 3);
    assert_eq!(Points(99).units_of(Points(100)), 0);
    assert_eq!(Points(100).units_of(Points::ZERO), 0);
}

/// label: имя, если есть, иначе номинал.
#[test]
fn denomination_label_prefers_name() {
    let plain = Denomination::new(25, 40, "green");
    assert_eq!(plain.label(), "25");

    let named = Denomination::new(25, 40, "green").named("Quarter");
    assert_eq!(named.label(), "Quarter");

    let blank = Denomination::new(25, 40, "green").named("   ");
    assert_eq!(blank.label(), "25");
}

#[test]
fn denomination_totals_and_usability() {
    let d = Denomination::new(25, 40, "green");
    assert_eq!(d.total_value(), Points(1000));
    assert!(d.is_usable());

    assert!(!Denomination::new(25, 0, "green").is_usable());
    assert!(!Denomination::new(0, 10, "green").is_usable());
}

/// ChipSet: суммарная стоимость не учитывает нулевые количества.
#[test]
fn chip_set_totals() {
    let set = ChipSet::new(
        7,
        "Mixed",
        vec![
            Denomination::new(5, 20, "white"),
            Denomination::new(25, 0, "green"),
            Denomination::new(100, 3, "black"),
        ],
    );

    assert_eq!(set.total_value(), Points(400));
    assert_eq!(set.total_chips(), 23);
    assert!(!set.is_preset);
    assert_eq!(set.denomination_by_value(Points(100)).map(|d| d.quantity), Some(3));
    assert!(set.denomination_by_value(Points(50)).is_none());
}

/// Пресеты: помечены, валидны, id не пересекаются с пользовательскими.
#[test]
fn presets_are_valid_and_flagged() {
    let presets = default_presets();
    assert_eq!(presets.len(), 2);

    for p in &presets {
        assert!(p.is_preset, "{} must be a preset", p.name);
        assert!(p.id < FIRST_USER_ID);
        let report = validate(p);
        assert!(report.valid, "{}: {:?}", p.name, report.errors);
    }

    assert_eq!(presets[0].id, STANDARD_300_ID);
    assert_eq!(presets[1].id, HOME_GAME_500_ID);
    assert_eq!(presets[0].total_chips(), 300);
    assert_eq!(presets[1].total_chips(), 500);
}

/// Serde: name необязателен, is_preset по умолчанию false.
#[test]
fn chip_set_deserializes_with_defaults() {
    let json = r#"{
        "id": 3,
        "name": "From UI",
        "denominations": [
            { "value": 10, "quantity": 50, "color": "red" },
            { "value": 50, "quantity": 20, "color": "blue", "name": "Fifty" }
        ]
    }"#;

    let set: ChipSet = serde_json::from_str(json).unwrap();
    assert!(!set.is_preset);
    assert_eq!(set.denominations[0].name, None);
    assert_eq!(set.denominations[1].label(), "Fifty");
    assert_eq!(set.denominations[1].value, Points(50));
}
