// =============================================================================
// TRANSFORM — Pushforward et Pullback : une fonction, deux sens de composition
// =============================================================================
//
// Une Transformation enveloppe UNE fonction f : A → B.
//
//   apply(x)        = f(x)
//   compose(other)  = une nouvelle Transformation, dont l'ordre dépend
//                     du drapeau de direction D :
//
// ┌──────────────────────────────────────────────────────────────────┐
// │  Pushforward (D = Forward)                                       │
// │    f : A → B,  g : B → C                                         │
// │    f.compose(g) = g ∘ f        x ↦ g(f(x))   (self puis other)   │
// │                                                                  │
// │  Pullback (D = Backward)                                         │
// │    f : B → C,  g : A → B                                         │
// │    f.compose(g) = f ∘ g        x ↦ f(g(x))   (other puis self)   │
// └──────────────────────────────────────────────────────────────────┘
//
// Le pullback se lit "à rebours" : le récepteur est toujours la DERNIÈRE
// étape appliquée. Les deux conventions sont fixées par le type, une
// Transformation<_, _, Forward> ne peut pas être composée avec une
// Transformation<_, _, Backward>.
//
// ERREURS : apply n'attrape rien. Une panique de f remonte telle quelle,
// et pour une f : A → Result<B, E> l'erreur est rendue sans être touchée
// (try_compose court-circuite sur le premier Err).
//
// =============================================================================

use std::fmt;
use std::marker::PhantomData;

use super::direction::{Backward, Direction, Forward, TemporalDirection};

/// Une transformation unaire entre deux domaines, orientée par `D`.
pub struct Transformation<A, B, D> {
    func: Box<dyn Fn(A) -> B>,
    direction: PhantomData<D>,
}

/// Transformation covariante (Maitreya) : compose dans l'ordre d'application.
pub type Pushforward<A, B> = Transformation<A, B, Forward>;

/// Transformation contravariante (Messie) : compose dans l'ordre inverse.
pub type Pullback<A, B> = Transformation<A, B, Backward>;

impl<A: 'static, B: 'static, D: Direction> Transformation<A, B, D> {
    /// Enveloppe une fonction.
    pub fn new(func: impl Fn(A) -> B + 'static) -> Self {
        Transformation {
            func: Box::new(func),
            direction: PhantomData,
        }
    }

    /// Applique la fonction enveloppée.
    pub fn apply(&self, source: A) -> B {
        (self.func)(source)
    }

    /// La direction temporelle de cette transformation
    pub fn direction(&self) -> TemporalDirection {
        D::TEMPORAL
    }
}

impl<A: 'static, D: Direction> Transformation<A, A, D> {
    /// La transformation identité (le "foncteur identité" des correspondances).
    pub fn identity() -> Self {
        Transformation::new(|x| x)
    }
}

impl<A: 'static, B: 'static> Transformation<A, B, Forward> {
    /// Pushforward : `self` d'abord, puis `other`.
    pub fn compose<C: 'static>(
        self,
        other: Transformation<B, C, Forward>,
    ) -> Transformation<A, C, Forward> {
        Transformation::new(move |x| other.apply(self.apply(x)))
    }
}

impl<B: 'static, C: 'static> Transformation<B, C, Backward> {
    /// Pullback : `other` d'abord, puis `self`.
    pub fn compose<A: 'static>(
        self,
        other: Transformation<A, B, Backward>,
    ) -> Transformation<A, C, Backward> {
        Transformation::new(move |x| self.apply(other.apply(x)))
    }
}

impl<A: 'static, B: 'static, E: 'static> Transformation<A, Result<B, E>, Forward> {
    /// Composition de deux transformations faillibles, même ordre que `compose`.
    /// La première erreur rencontrée est rendue telle quelle.
    pub fn try_compose<C: 'static>(
        self,
        other: Transformation<B, Result<C, E>, Forward>,
    ) -> Transformation<A, Result<C, E>, Forward> {
        Transformation::new(move |x| self.apply(x).and_then(|y| other.apply(y)))
    }
}

impl<B: 'static, C: 'static, E: 'static> Transformation<B, Result<C, E>, Backward> {
    /// Composition de deux transformations faillibles, même ordre que `compose`.
    pub fn try_compose<A: 'static>(
        self,
        other: Transformation<A, Result<B, E>, Backward>,
    ) -> Transformation<A, Result<C, E>, Backward> {
        Transformation::new(move |x| other.apply(x).and_then(|y| self.apply(y)))
    }
}

impl<A, B, D: Direction> fmt::Debug for Transformation<A, B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformation")
            .field("direction", &D::TEMPORAL)
            .field("source", &std::any::type_name::<A>())
            .field("target", &std::any::type_name::<B>())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum ProphecyError {
        Unfulfilled(String),
    }

    #[test]
    fn test_apply_matches_function() {
        let f = |s: String| format!("{} → future_enlightenment", s);
        let t: Pushforward<String, String> = Transformation::new(f);
        for s in ["ignorance", "practice", "insight"] {
            assert_eq!(t.apply(s.to_string()), f(s.to_string()));
        }
    }

    #[test]
    fn test_pushforward_composes_self_then_other() {
        let done: Pushforward<String, String> = Transformation::new(|s: String| s + "_done");
        let upper: Pushforward<String, String> = Transformation::new(|s: String| s.to_uppercase());

        let composed = done.compose(upper);
        assert_eq!(composed.apply("step".to_string()), "STEP_DONE");
    }

    #[test]
    fn test_pullback_composes_other_then_self() {
        let open: Pullback<String, String> = Transformation::new(|s: String| format!("<{}", s));
        let close: Pullback<String, String> = Transformation::new(|s: String| format!("{}>", s));

        let composed = open.compose(close);
        assert_eq!(composed.apply("x".to_string()), "<x>");
    }

    #[test]
    fn test_order_is_observable() {
        // f(x) = x + 1, g(x) = x * 2
        let fwd = Pushforward::new(|x: i64| x + 1).compose(Pushforward::new(|x: i64| x * 2));
        let bwd = Pullback::new(|x: i64| x + 1).compose(Pullback::new(|x: i64| x * 2));

        for x in -3..=3 {
            assert_eq!(fwd.apply(x), (x + 1) * 2); // g(f(x))
            assert_eq!(bwd.apply(x), x * 2 + 1); // f(g(x))
        }
    }

    #[test]
    fn test_composition_changes_types() {
        let len: Pushforward<&'static str, usize> = Transformation::new(str::len);
        let even: Pushforward<usize, bool> = Transformation::new(|n| n % 2 == 0);
        let composed = len.compose(even);
        assert!(composed.apply("dharma"));
        assert!(!composed.apply("Messiah"));

        let describe: Pullback<bool, &'static str> =
            Transformation::new(|b| if b { "fulfilled" } else { "awaited" });
        let is_ancient: Pullback<i32, bool> = Transformation::new(|year| year < 0);
        let pulled = describe.compose(is_ancient);
        assert_eq!(pulled.apply(-164), "fulfilled");
        assert_eq!(pulled.apply(1475), "awaited");
    }

    #[test]
    fn test_identity() {
        let id: Pushforward<u8, u8> = Transformation::identity();
        let bump: Pushforward<u8, u8> = Transformation::new(|x| x + 1);
        assert_eq!(id.apply(7), 7);
        assert_eq!(id.compose(bump).apply(7), 8);
    }

    #[test]
    fn test_error_propagates_unchanged() {
        let check = |s: String| -> Result<String, ProphecyError> {
            if s.is_empty() {
                Err(ProphecyError::Unfulfilled("empty".into()))
            } else {
                Ok(s)
            }
        };
        let simple: Pushforward<String, Result<String, ProphecyError>> = Transformation::new(check);
        let composed = Pushforward::new(check)
            .try_compose(Pushforward::new(|s: String| Ok(s.to_uppercase())));

        let expected = Err(ProphecyError::Unfulfilled("empty".into()));
        assert_eq!(simple.apply(String::new()), expected);
        assert_eq!(composed.apply(String::new()), expected);
        assert_eq!(composed.apply("ok".into()), Ok("OK".to_string()));
    }

    #[test]
    fn test_pullback_error_from_inner_step() {
        let outer: Pullback<i32, Result<String, ProphecyError>> =
            Transformation::new(|n: i32| Ok(format!("covenant #{}", n)));
        let inner: Pullback<&'static str, Result<i32, ProphecyError>> =
            Transformation::new(|s: &str| {
                s.parse::<i32>()
                    .map_err(|_| ProphecyError::Unfulfilled(s.to_string()))
            });
        let composed = outer.try_compose(inner);

        assert_eq!(composed.apply("12"), Ok("covenant #12".to_string()));
        assert_eq!(
            composed.apply("twelve"),
            Err(ProphecyError::Unfulfilled("twelve".into()))
        );
    }

    #[test]
    #[should_panic(expected = "broken covenant")]
    fn test_panic_propagates_through_composition() {
        let boom: Pullback<u8, u8> = Transformation::new(|_| panic!("broken covenant"));
        let id: Pullback<u8, u8> = Transformation::identity();
        boom.compose(id).apply(0);
    }

    #[test]
    fn test_direction_reported() {
        assert_eq!(
            Pushforward::<u8, u8>::identity().direction(),
            TemporalDirection::Forward
        );
        assert_eq!(
            Pullback::<u8, u8>::identity().direction(),
            TemporalDirection::Backward
        );
        let dbg = format!("{:?}", Pullback::<u8, u8>::identity());
        assert!(dbg.contains("Backward"));
    }
}
