//! Advent of Code 2022 puzzle solutions with automatic registration
//!
//! Each day derives `AutoRegisterSolver`, so linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find it.

pub mod year_2022;

#[cfg(test)]
mod tests {
    use advent_core::{RegistryBuilder, split_groups};

    #[test]
    fn test_all_days_are_registered() {
        let registry = RegistryBuilder::new()
            .register_solver_plugins(|plugin| plugin.year == 2022)
            .unwrap()
            .build();

        let days = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 18];
        assert_eq!(registry.len(), days.len());
        for day in days {
            let info = registry.info(2022, day).expect("day should be registered");
            assert_eq!(info.parts, 2);
        }
        for day in [16, 17, 19, 20, 21, 22, 23, 24, 25] {
            assert!(registry.info(2022, day).is_none());
        }
    }

    #[test]
    fn test_dispatch_through_registry() {
        let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
        let groups = split_groups("bvwbjplbgvbhsrlpgdmjqwftvncz\n");

        let part1 = registry.dispatch(2022, 6, 1, &groups).unwrap();
        let part2 = registry.dispatch(2022, 6, 2, &groups).unwrap();
        assert_eq!(part1.result.answer, "5");
        assert_eq!(part2.result.answer, "23");
    }
}
