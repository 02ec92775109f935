use std::cell::RefCell;

use proptest::prelude::*;
use variant::prelude::*;
use variant::{impl_widen, ContractError, Variant2, Variant3, Variant4, VariantWithCommon3, WithCommon};

trait Shape {
    fn area(&self) -> f64;
}

#[derive(Debug)]
struct Circle {
    radius: f64,
}

#[derive(Debug)]
struct Rect {
    width: f64,
    height: f64,
}

#[derive(Debug)]
struct Dot;

impl Shape for Circle {
    fn area(&self) -> f64 { 3.0 * self.radius * self.radius }
}

impl Shape for Rect {
    fn area(&self) -> f64 { self.width * self.height }
}

impl Shape for Dot {
    fn area(&self) -> f64 { 0.0 }
}

impl_widen!(dyn Shape: Circle, Rect, Dot);

fn address<T: ?Sized>(r: &T) -> *const () {
    r as *const T as *const ()
}

#[test]
fn match_some_on_second_of_three() {
    let v: Variant3<u32, &str, bool> = Variant3::Second("x");

    let len = v.cases().second(|s| s.len() as i32).otherwise(|| -1);
    assert_eq!(len, 1);

    let missed = v
        .cases()
        .first(|n| n as i32)
        .third(|b| b as i32)
        .otherwise(|| -1);
    assert_eq!(missed, -1);
}

#[test]
fn zero_handlers_always_fall_back() {
    let v: Variant2<u8, u8> = Variant2::First(1);
    assert_eq!(v.cases().otherwise(|| "fallback"), "fallback");
}

#[test]
fn later_handler_for_same_alternative_wins() {
    let v: Variant2<u8, u8> = Variant2::First(3);
    let out = v.cases().first(|n| n + 1).first(|n| n * 10).otherwise(|| 0);
    assert_eq!(out, 30);
}

#[test]
fn action_form_runs_side_effects_only() {
    let log = RefCell::new(Vec::new());
    let v: Variant3<i32, String, ()> = Variant3::Second("side".to_owned());
    v.match_with(
        |n| log.borrow_mut().push(format!("int {n}")),
        |s| log.borrow_mut().push(format!("string {s}")),
        |()| log.borrow_mut().push("unit".to_owned()),
    );
    assert_eq!(log.into_inner(), vec!["string side".to_owned()]);
}

#[test]
fn matching_by_reference_keeps_the_value() {
    let v: Variant2<String, Vec<u8>> = Variant2::Second(vec![1, 2, 3]);
    let len = v.as_ref().match_with(String::len, Vec::len);
    assert_eq!(len, 3);
    // Still usable after the borrowed match.
    let owned = v.match_with(|s| s.into_bytes(), |bytes| bytes);
    assert_eq!(owned, vec![1, 2, 3]);
}

#[test]
fn common_type_is_the_matched_value() {
    let shapes: Vec<VariantWithCommon3<dyn Shape, Circle, Rect, Dot>> = vec![
        WithCommon::new(Variant3::First(Circle { radius: 2.0 })),
        WithCommon::new(Variant3::Second(Rect { width: 2.0, height: 5.0 })),
        WithCommon::new(Variant3::Third(Dot)),
    ];

    for shape in &shapes {
        let common = address(shape.common());
        let matched = shape
            .variant()
            .as_ref()
            .match_with(|c| address(c), |r| address(r), |d| address(d));
        assert_eq!(common, matched);
    }

    let total: f64 = shapes.iter().map(|s| s.common().area()).sum();
    assert_eq!(total, 12.0 + 10.0);
}

#[test]
fn untyped_family_widens_to_any() {
    let v: Variant2<u64, String> = Variant2::First(9);
    let any = v.as_any();
    assert_eq!(any.downcast_ref::<u64>(), Some(&9));
    assert_eq!(address(any), v.as_ref().match_with(|n| address(n), |s| address(s)));
}

#[test]
fn checked_constructor_rejects_absent_value() {
    let err = Variant2::<u8, u8>::try_second(None).unwrap_err();
    assert_eq!(err, ContractError::InvalidArgument { parameter: "value" });

    let v = Variant2::<u8, &str>::try_second(Some("ok")).unwrap();
    assert_eq!(v.match_with(|_| "first", |s| s), "ok");
}

#[test]
fn exhaustive_names_first_missing_handler() {
    let v: Variant4<u8, u8, u8, u8> = Variant4::Fourth(4);
    let err = v.cases().first(|n| n).third(|n| n).exhaustive().unwrap_err();
    assert_eq!(err.parameter(), Some("second"));
}

proptest! {
    #[test]
    fn match_with_hands_over_the_original_value(n in any::<i64>(), s in ".*", pick in 0usize..4) {
        let v: Variant4<i64, String, Vec<u8>, bool> = match pick {
            0 => Variant4::First(n),
            1 => Variant4::Second(s.clone()),
            2 => Variant4::Third(s.clone().into_bytes()),
            _ => Variant4::Fourth(n % 2 == 0),
        };
        let seen = v.match_with(
            |x| (0, x.to_string()),
            |x| (1, x),
            |x| (2, String::from_utf8(x).unwrap()),
            |x| (3, x.to_string()),
        );
        let expected = match pick {
            0 => (0, n.to_string()),
            1 => (1, s),
            2 => (2, s),
            _ => (3, (n % 2 == 0).to_string()),
        };
        prop_assert_eq!(seen, expected);
    }
}
