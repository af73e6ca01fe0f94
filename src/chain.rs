//! # Chain Module
//!
//! Sequencing of many optional-producing steps.
//!
//! Every helper here obeys the same rule: steps run in order, evaluation
//! stops at the first absent step, and no later step is invoked. The result
//! is absent if any step was absent, otherwise present with the final value.
//!
//! - [`optional!`](crate::optional!) desugars `name <- step;` bindings into
//!   nested [`Optional::bind`] calls, so each step may depend on the values
//!   bound before it and may produce a different type.
//! - `collect()` into an `Optional<C>` (and [`sequence`] / [`traverse`])
//!   stops pulling from the iterator at the first absent element.
//! - `sum()` and `product()` over optionals short-circuit the same way.

use std::iter::{Product, Sum};

use crate::optional::Optional;

impl<T, C> FromIterator<Optional<T>> for Optional<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Optional<T>>>(iter: I) -> Self {
        Optional::of(
            iter.into_iter()
                .map(Optional::into_option)
                .collect::<Option<C>>(),
        )
    }
}

impl<T, U> Sum<Optional<U>> for Optional<T>
where
    T: Sum<U>,
{
    fn sum<I: Iterator<Item = Optional<U>>>(iter: I) -> Self {
        Optional::of(iter.map(Optional::into_option).sum::<Option<T>>())
    }
}

impl<T, U> Product<Optional<U>> for Optional<T>
where
    T: Product<U>,
{
    fn product<I: Iterator<Item = Optional<U>>>(iter: I) -> Self {
        Optional::of(iter.map(Optional::into_option).product::<Option<T>>())
    }
}

/// Collects every value, or returns absent at the first absent element.
pub fn sequence<T, I>(steps: I) -> Optional<Vec<T>>
where
    I: IntoIterator<Item = Optional<T>>,
{
    steps.into_iter().collect()
}

/// Maps each item through `f` and collects the results, stopping at the
/// first item for which `f` returns absent.
pub fn traverse<A, T, I, F>(items: I, f: F) -> Optional<Vec<T>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Optional<T>,
{
    items.into_iter().map(f).collect()
}

pub fn zip3<A, B, C>(a: Optional<A>, b: Optional<B>, c: Optional<C>) -> Optional<(A, B, C)> {
    a.zip(b).zip(c).map(|((a, b), c)| (a, b, c))
}

/// Comprehension syntax over [`Optional::bind`].
///
/// `name <- step;` binds the value of a present `step` and continues, or
/// stops the whole block with `Absent`. `_ <- step;` runs a step only for
/// its presence. `let` statements may be placed between steps. The block
/// ends with either `yield expr` (wrapped as present) or an expression that
/// is itself an `Optional`.
///
/// ```
/// use optionals::{optional, some, none, Optional};
///
/// let total = optional! {
///     a <- some(2);
///     b <- some(4);
///     let ab = a + b;
///     c <- some(6);
///     yield ab + c
/// };
/// assert_eq!(total, some(12));
///
/// let missing: Optional<i32> = optional! {
///     a <- some(2);
///     b <- none::<i32>();
///     yield a + b
/// };
/// assert!(missing.is_absent());
/// ```
///
/// A block cannot end with a `<-` step:
///
/// ```compile_fail
/// use optionals::{optional, some};
///
/// let total = optional! {
///     a <- some(2);
/// };
/// ```
#[macro_export]
macro_rules! optional {
    (yield $result:expr $(;)?) => {
        $crate::Optional::some($result)
    };
    (let $binding:pat = $value:expr; $($rest:tt)+) => {{
        let $binding = $value;
        $crate::optional!($($rest)+)
    }};
    (_ <- $step:expr; $($rest:tt)+) => {
        $crate::Optional::bind($step, move |_| $crate::optional!($($rest)+))
    };
    ($name:ident <- $step:expr; $($rest:tt)+) => {
        $crate::Optional::bind($step, move |$name| $crate::optional!($($rest)+))
    };
    (_ <- $step:expr $(;)?) => {
        compile_error!("optional! cannot end with a `<-` step; finish the block with `yield <expr>` or an optional expression")
    };
    ($name:ident <- $step:expr $(;)?) => {
        compile_error!("optional! cannot end with a `<-` step; finish the block with `yield <expr>` or an optional expression")
    };
    ($result:expr $(;)?) => {
        $result
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::{none, some};
    use std::cell::Cell;

    #[test]
    fn test_all_present_chain_sums() {
        let total = optional! {
            a <- some(2);
            b <- some(4);
            c <- some(6);
            yield a + b + c
        };
        assert_eq!(total, some(12));
    }

    #[test]
    fn test_chain_stops_at_first_absent() {
        let fourth_calls = Cell::new(0);
        let fourth = || {
            fourth_calls.set(fourth_calls.get() + 1);
            some(6)
        };

        let total: Optional<i32> = optional! {
            a <- some(2);
            b <- some(4);
            c <- none::<i32>();
            d <- fourth();
            yield a + b + c + d
        };

        assert!(total.is_absent());
        assert_eq!(fourth_calls.get(), 0);
    }

    #[test]
    fn test_chain_over_different_types() {
        let parsed = optional! {
            text <- some("21");
            n <- Optional::from_result(text.parse::<i64>());
            let doubled = n * 2;
            label <- some(format!("{}!", doubled));
            yield label.len()
        };
        assert_eq!(parsed, some(3));
    }

    #[test]
    fn test_wildcard_step_only_checks_presence() {
        let guard = |ok: bool| if ok { some(()) } else { none() };

        let allowed = optional! {
            a <- some(2);
            _ <- guard(a > 1);
            yield a * 10
        };
        assert_eq!(allowed, some(20));

        let blocked = optional! {
            a <- some(2);
            _ <- guard(a > 5);
            yield a * 10
        };
        assert_eq!(blocked, none());
    }

    #[test]
    fn test_chain_may_end_in_optional() {
        let halve = |x: i32| if x % 2 == 0 { some(x / 2) } else { none() };
        let result = optional! {
            a <- some(10);
            halve(a)
        };
        assert_eq!(result, some(5));
    }

    #[test]
    fn test_collect_stops_pulling_after_absent() {
        let pulled = Cell::new(0);
        let steps = vec![some(1), some(2), none(), some(4)];

        let collected: Optional<Vec<i32>> = steps
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1))
            .collect();

        assert!(collected.is_absent());
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_sequence_and_traverse() {
        assert_eq!(sequence(vec![some(1), some(2)]), some(vec![1, 2]));
        assert_eq!(sequence(Vec::<Optional<i32>>::new()), some(vec![]));

        let parse = |s: &str| Optional::from_result(s.parse::<u8>());
        assert_eq!(traverse(["1", "2", "3"], parse), some(vec![1, 2, 3]));
        assert_eq!(traverse(["1", "x", "3"], parse), none());
    }

    #[test]
    fn test_sum_and_product() {
        let sum: Optional<i32> = vec![some(2), some(4), some(6)].into_iter().sum();
        assert_eq!(sum, some(12));

        let sum: Optional<i32> = vec![some(2), some(4), none(), some(6)].into_iter().sum();
        assert_eq!(sum, none());

        let product: Optional<i32> = vec![some(2), some(3)].into_iter().product();
        assert_eq!(product, some(6));
    }

    #[test]
    fn test_zip3() {
        assert_eq!(zip3(some(1), some('a'), some("b")), some((1, 'a', "b")));
        assert_eq!(zip3(some(1), none::<char>(), some("b")), none());
    }
}
