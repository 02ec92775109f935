//! Per-arity sum types, generated from a single definition.

use core::any::Any;

use contract::{requires, Result};

use crate::{CaseAnalysis, Common, Variant, Widen};

macro_rules! variant {
    (
        $name:ident, $cases:ident, $with_common:ident, $arity:literal {
            $($alt:ident($ty:ident)),+ $(,)?
        }
    ) => { paste::paste! {
        #[doc = concat!("A value that is exactly one of ", stringify!($arity), " alternatives.")]
        #[derive(Clone, Copy, Debug)]
        pub enum $name<$($ty),+> {
            $($alt($ty)),+
        }

        #[doc = concat!("[`", stringify!($name), "`] whose alternatives all widen to the common type `C`.")]
        pub type $with_common<C, $($ty),+> = crate::WithCommon<C, $name<$($ty),+>>;

        impl<$($ty),+> $name<$($ty),+> {
            $(
                #[doc = concat!("Builds the `", stringify!($alt), "` alternative, rejecting an absent value.")]
                pub fn [<try_ $alt:lower>](value: Option<$ty>) -> Result<Self> {
                    requires(value, "value").map(Self::$alt)
                }
            )+

            /// Exhaustive case analysis: runs the one handler matching the
            /// active alternative and returns its result. Use `R = ()` for
            /// handlers that only perform side effects.
            #[inline]
            pub fn match_with<R>(self, $([<$alt:lower>]: impl FnOnce($ty) -> R),+) -> R {
                match self {
                    $(Self::$alt(value) => [<$alt:lower>](value),)+
                }
            }

            /// Borrows the held value, keeping the active alternative.
            #[inline]
            pub fn as_ref(&self) -> $name<$(&$ty),+> {
                match self {
                    $(Self::$alt(value) => $name::$alt(value),)+
                }
            }

            /// The held value widened to the top type.
            pub fn as_any(&self) -> &dyn Any
            where
                $($ty: Any),+
            {
                <Self as Common<dyn Any>>::common(self)
            }
        }

        impl<$($ty),+> Variant for $name<$($ty),+> {
            const ARITY: usize = $arity;

            type Cases<'a, R> = $cases<'a, $($ty,)+ R>;

            fn cases<'a, R>(self) -> Self::Cases<'a, R> {
                $cases {
                    variant: self,
                    $([<$alt:lower>]: None,)+
                }
            }
        }

        impl<C: ?Sized, $($ty: Widen<C>),+> Common<C> for $name<$($ty),+> {
            fn common(&self) -> &C {
                match self {
                    $(Self::$alt(value) => Widen::<C>::widen(value),)+
                }
            }
        }

        #[doc = concat!("Case builder for [`", stringify!($name), "`]; every handler is optional.")]
        #[must_use = "handlers only run once `otherwise` or `exhaustive` is called"]
        pub struct $cases<'a, $($ty,)+ R> {
            variant: $name<$($ty),+>,
            $([<$alt:lower>]: Option<Box<dyn FnOnce($ty) -> R + 'a>>,)+
        }

        impl<'a, $($ty,)+ R> $cases<'a, $($ty,)+ R> {
            $(
                #[doc = concat!("Handles the `", stringify!($alt), "` alternative, replacing any earlier handler for it.")]
                pub fn [<$alt:lower>](mut self, handler: impl FnOnce($ty) -> R + 'a) -> Self {
                    self.[<$alt:lower>] = Some(Box::new(handler));
                    self
                }
            )+
        }

        impl<'a, $($ty,)+ R> CaseAnalysis<R> for $cases<'a, $($ty,)+ R> {
            fn otherwise(self, otherwise: impl FnOnce() -> R) -> R {
                match self.variant {
                    $($name::$alt(value) => match self.[<$alt:lower>] {
                        Some(handler) => handler(value),
                        None => otherwise(),
                    },)+
                }
            }

            fn exhaustive(self) -> Result<R> {
                $(let [<$alt:lower>] = self.[<$alt:lower>];)+
                contract::requires_all!($([<$alt:lower>]),+);
                Ok(match self.variant {
                    $($name::$alt(value) => [<$alt:lower>](value),)+
                })
            }
        }
    }};
}

variant!(Variant2, Cases2, VariantWithCommon2, 2 {
    First(T1),
    Second(T2),
});

variant!(Variant3, Cases3, VariantWithCommon3, 3 {
    First(T1),
    Second(T2),
    Third(T3),
});

variant!(Variant4, Cases4, VariantWithCommon4, 4 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
});

variant!(Variant5, Cases5, VariantWithCommon5, 5 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
});

variant!(Variant6, Cases6, VariantWithCommon6, 6 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
});

variant!(Variant7, Cases7, VariantWithCommon7, 7 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
});

variant!(Variant8, Cases8, VariantWithCommon8, 8 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
    Eighth(T8),
});

variant!(Variant9, Cases9, VariantWithCommon9, 9 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
    Eighth(T8),
    Ninth(T9),
});

variant!(Variant10, Cases10, VariantWithCommon10, 10 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
    Eighth(T8),
    Ninth(T9),
    Tenth(T10),
});

variant!(Variant11, Cases11, VariantWithCommon11, 11 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
    Eighth(T8),
    Ninth(T9),
    Tenth(T10),
    Eleventh(T11),
});

variant!(Variant12, Cases12, VariantWithCommon12, 12 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
    Eighth(T8),
    Ninth(T9),
    Tenth(T10),
    Eleventh(T11),
    Twelfth(T12),
});

variant!(Variant13, Cases13, VariantWithCommon13, 13 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
    Eighth(T8),
    Ninth(T9),
    Tenth(T10),
    Eleventh(T11),
    Twelfth(T12),
    Thirteenth(T13),
});

variant!(Variant14, Cases14, VariantWithCommon14, 14 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
    Eighth(T8),
    Ninth(T9),
    Tenth(T10),
    Eleventh(T11),
    Twelfth(T12),
    Thirteenth(T13),
    Fourteenth(T14),
});

variant!(Variant15, Cases15, VariantWithCommon15, 15 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
    Eighth(T8),
    Ninth(T9),
    Tenth(T10),
    Eleventh(T11),
    Twelfth(T12),
    Thirteenth(T13),
    Fourteenth(T14),
    Fifteenth(T15),
});

variant!(Variant16, Cases16, VariantWithCommon16, 16 {
    First(T1),
    Second(T2),
    Third(T3),
    Fourth(T4),
    Fifth(T5),
    Sixth(T6),
    Seventh(T7),
    Eighth(T8),
    Ninth(T9),
    Tenth(T10),
    Eleventh(T11),
    Twelfth(T12),
    Thirteenth(T13),
    Fourteenth(T14),
    Fifteenth(T15),
    Sixteenth(T16),
});
