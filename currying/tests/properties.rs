mod common;

#[cfg(test)]
mod tests {
    use crate::common::*;
    use currying::{Apply, Curry, call, curry};
    use std::thread;

    #[test]
    fn chained_application_matches_a_direct_call() {
        for (a, b, c) in [(1, 2, 3), (-5, 0, 5), (i32::MAX, i32::MIN, 7), (0, 0, 0)] {
            let curried = curry(|a: i32, b: i32, c: i32| a.wrapping_add(b).wrapping_add(c));
            let direct = a.wrapping_add(b).wrapping_add(c);

            assert_eq!(curried.apply(a).apply(b).apply(c).resolve(), direct);
        }
    }

    #[test]
    fn concrete_scenario() {
        assert_eq!(curry(add3).apply(1).apply(2).apply(3).resolve(), 6);
        assert_eq!(call!(curry(add3), 1, 2).apply(3).resolve(), 6);
        assert_eq!(call!(curry(add3).apply(1), 2, 3).resolve(), 6);
        assert_eq!(call!(curry(add3), 1, 2, 3).resolve(), 6);
    }

    #[test]
    fn grouping_does_not_change_the_result() {
        let f = curry(add3);
        let results = [
            f.apply(1).apply(2).apply(3).resolve(),
            f.apply_all((1, 2)).apply_all((3,)).resolve(),
            f.apply_all((1,)).apply_all((2, 3)).resolve(),
            f.apply_all((1, 2, 3)).resolve(),
        ];

        assert!(results.iter().all(|&r| r == add3(1, 2, 3)));
    }

    #[test]
    fn resolving_twice_runs_the_procedure_twice() {
        let calls = Calls::default();
        let counted = {
            let calls = calls.clone();
            move |a: i32, b: i32| {
                calls.hit();
                a * b
            }
        };

        let done = curry(counted).apply(6).apply(7);
        assert_eq!(done.resolve(), 42);
        assert_eq!(call!(&done), 42);
        assert_eq!(calls.count(), 2);

        // the zero-argument call and resolve are the same entry point
        assert_eq!(call!(done), 42);
        assert_eq!(calls.count(), 3);
    }

    #[test]
    fn branching_from_one_state_keeps_branches_independent() {
        let shared = curry(|name: String, greeting: String, mark: char| {
            format!("{greeting}, {name}{mark}")
        })
        .apply("ada".to_owned());

        let polite = shared.apply_ref("good evening".to_owned()).apply('.');
        let loud = shared.apply_ref("HEY".to_owned()).apply('!');

        assert_eq!(loud.resolve(), "HEY, ada!");
        assert_eq!(polite.resolve(), "good evening, ada.");
        assert_eq!(shared.args(), &("ada".to_owned(),));
    }

    #[test]
    fn arity_counters_move_in_lockstep() {
        let s0 = curry(add3);
        let s1 = s0.apply(1);
        let s2 = s1.apply(2);
        let s3 = s2.apply(3);

        assert_eq!([s0.remaining(), s1.remaining(), s2.remaining(), s3.remaining()], [3, 2, 1, 0]);
        assert_eq!([s0.bound(), s1.bound(), s2.bound(), s3.bound()], [0, 1, 2, 3]);
        assert!(s3.is_terminal() && !s2.is_terminal());
    }

    #[test]
    fn twelve_parameters_are_supported() {
        #[allow(clippy::too_many_arguments)]
        fn sum12(
            a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8, i: u8, j: u8, k: u8, l: u8,
        ) -> u32 {
            [a, b, c, d, e, f, g, h, i, j, k, l].iter().copied().map(u32::from).sum()
        }

        let half = call!(curry(sum12), 1, 2, 3, 4, 5, 6);
        assert_eq!(half.remaining(), 6);
        assert_eq!(call!(half, 7, 8, 9, 10, 11, 12).resolve(), 78);
    }

    #[test]
    fn procedure_errors_come_back_unchanged() {
        let parse_sum = curry(|a: &str, b: &str| -> Result<i64, std::num::ParseIntError> {
            Ok(a.parse::<i64>()? + b.parse::<i64>()?)
        });

        assert_eq!(parse_sum.apply("40").apply("2").resolve(), Ok(42));

        let expected = "x".parse::<i64>().unwrap_err();
        assert_eq!(parse_sum.apply("1").apply("x").resolve(), Err(expected));
    }

    #[test]
    #[should_panic(expected = "refusing to divide by zero")]
    fn procedure_panics_propagate() {
        let divide = curry(|a: i32, b: i32| {
            assert!(b != 0, "refusing to divide by zero");
            a / b
        });

        let _ = divide.apply(1).apply(0).resolve();
    }

    #[test]
    fn states_can_be_sent_across_threads() {
        fn assert_send<T: Send>(_: &T) {}

        let prefix: Curry<_, (i32,), _> = curry(add3).apply(1);
        assert_send(&prefix);

        let handles: Vec<_> = (0..4)
            .map(|i| thread::spawn(move || prefix.apply(i).apply(i).resolve()))
            .collect();
        let results: Vec<i32> = handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect();

        assert_eq!(results, [1, 3, 5, 7]);
    }
}
