use std::cell::Cell;

use maybe::{ret, Maybe};
use proptest::prelude::*;

fn half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { ret(n / 2) } else { Maybe::NOTHING }
}

fn succ(n: i32) -> Maybe<i32> {
    n.checked_add(1).into()
}

fn square(n: i32) -> Maybe<i32> {
    n.checked_mul(n).into()
}

fn never(_: i32) -> Maybe<i32> {
    Maybe::NOTHING
}

const KLEISLI: [fn(i32) -> Maybe<i32>; 4] = [half, succ, square, never];

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

proptest! {
    #[test]
    fn left_identity(x in any::<i32>(), f in 0..KLEISLI.len()) {
        let f = KLEISLI[f];
        prop_assert_eq!(ret(x).bind(f), f(x));
    }

    #[test]
    fn right_identity(m in maybe_i32()) {
        prop_assert_eq!(m.bind(ret), m);
    }

    #[test]
    fn associativity(m in maybe_i32(), f in 0..KLEISLI.len(), g in 0..KLEISLI.len()) {
        let (f, g) = (KLEISLI[f], KLEISLI[g]);
        prop_assert_eq!(m.bind(f).bind(g), m.bind(|x| f(x).bind(g)));
    }

    #[test]
    fn select_many_is_nested_bind(m in maybe_i32(), f in 0..KLEISLI.len()) {
        let f = KLEISLI[f];
        let sugar = m.select_many(|a| f(*a), |a, b| a.wrapping_add(b));
        let desugared = m.bind(|a| f(a).bind(|b| ret(a.wrapping_add(b))));
        prop_assert_eq!(sugar, desugared);
    }

    #[test]
    fn map_is_bind_then_ret(m in maybe_i32()) {
        prop_assert_eq!(m.map(|x| x / 3), m.bind(|x| ret(x / 3)));
    }
}

#[test]
fn nothing_short_circuits_bind() {
    let calls = Cell::new(0);
    let out = Maybe::<i32>::NOTHING.bind(|x| {
        calls.set(calls.get() + 1);
        ret(x)
    });
    assert_eq!(out, Maybe::NOTHING);
    assert_eq!(calls.get(), 0);
}
