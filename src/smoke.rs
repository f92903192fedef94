//! The serial-port smoke suites.
//!
//! `Serialport in Rust` checks that the serial-port module loads and declares
//! the port operations still to be covered (listing, opening, closing) as
//! pending. `Array` is a standalone assertion example kept next to it.

use crate::harness::{assert, Suite};
use crate::loader::{LoadError, ModuleRegistry};
use std::sync::Arc;

/// Host runtime named in the serial suite title.
pub const HOST_RUNTIME: &str = "Rust";

/// Position of `value` in `items`, or `-1` when absent.
pub fn index_of<T: PartialEq>(items: &[T], value: &T) -> isize {
    items
        .iter()
        .position(|item| item == value)
        .map_or(-1, |idx| idx as isize)
}

pub fn array_suite() -> Suite {
    Suite::new("Array").suite(Suite::new("#indexOf()").it(
        "should return -1 when the value is not present",
        || assert::equal(index_of(&[1, 2, 3], &4), -1),
    ))
}

/// Suite that loads `dependency` through `registry`.
pub fn serialport_suite(registry: Arc<ModuleRegistry>, dependency: impl Into<String>) -> Suite {
    let dependency = dependency.into();

    Suite::new(format!("Serialport in {HOST_RUNTIME}"))
        .it_done("can load the serialport", move |done| {
            assert::does_not_throw(move || {
                let _port = registry.load(&dependency)?;
                done.call();
                Ok::<_, LoadError>(())
            })
        })
        .pending("can list ports")
        .pending("can open a port")
        .pending("can close the port")
}

/// Every smoke suite, in run order.
pub fn suites(registry: Arc<ModuleRegistry>, dependency: impl Into<String>) -> Vec<Suite> {
    vec![array_suite(), serialport_suite(registry, dependency)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::TestCase;
    use proptest::prelude::*;

    #[test]
    fn test_index_of_absent_value() {
        assert_eq!(index_of(&[1, 2, 3], &4), -1);
    }

    #[test]
    fn test_index_of_first_match() {
        assert_eq!(index_of(&[1, 2, 3, 2], &2), 1);
        assert_eq!(index_of::<u8>(&[], &0), -1);
    }

    #[test]
    fn test_serialport_suite_shape() {
        let suite = serialport_suite(Arc::new(ModuleRegistry::new()), "serialport");
        assert_eq!(suite.title, "Serialport in Rust");

        let cases: Vec<_> = suite
            .cases
            .iter()
            .map(|c| (c.title(), c.is_pending()))
            .collect();
        assert_eq!(
            cases,
            vec![
                ("can load the serialport", false),
                ("can list ports", true),
                ("can open a port", true),
                ("can close the port", true),
            ]
        );
        assert!(matches!(suite.cases[0], TestCase::Runnable { .. }));
    }

    #[test]
    fn test_suites_order() {
        let titles: Vec<_> = suites(ModuleRegistry::global(), "serialport")
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Array", "Serialport in Rust"]);
    }

    proptest! {
        #[test]
        fn prop_absent_value_yields_sentinel(items in prop::collection::vec(0u8..100, 0..32), value in 100u8..=255) {
            prop_assert_eq!(index_of(&items, &value), -1);
        }

        #[test]
        fn prop_present_value_indexes_itself(items in prop::collection::vec(any::<u8>(), 1..32), pick in any::<prop::sample::Index>()) {
            let idx = pick.index(items.len());
            let found = index_of(&items, &items[idx]);
            prop_assert!(found >= 0 && found as usize <= idx);
            prop_assert_eq!(items[found as usize], items[idx]);
        }
    }
}
