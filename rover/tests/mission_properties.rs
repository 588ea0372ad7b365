//! Property tests over randomly generated missions.
//!
//! Drives `run_mission` through the public API and checks the grid and
//! obstacle invariants on every rover's final state.

use proptest::prelude::*;
use rover::core::directive::UnknownDirectivePolicy;
use rover::core::grid::{Grid, Position};
use rover::mission::run_mission;
use rover::test_support::RecordingObserver;

#[derive(Debug, Clone)]
struct Plan {
    rightmost: i64,
    uppermost: i64,
    rovers: Vec<(i64, i64, char, String)>,
}

impl Plan {
    fn render(&self) -> String {
        let mut input = format!("{} {}\n", self.rightmost, self.uppermost);
        for (x, y, heading, directives) in &self.rovers {
            input.push_str(&format!("{x} {y} {heading}\n{directives}\n"));
        }
        input
    }
}

fn arb_plan() -> impl Strategy<Value = Plan> {
    (0i64..6, 0i64..6).prop_flat_map(|(rightmost, uppermost)| {
        let rover = (
            0..=rightmost,
            0..=uppermost,
            prop::sample::select(vec!['N', 'E', 'S', 'W', 'n', 'w']),
            "[LRMlrm]{0,16}",
        );
        prop::collection::vec(rover, 1..6).prop_map(move |rovers| Plan {
            rightmost,
            uppermost,
            rovers,
        })
    })
}

proptest! {
    #[test]
    fn rovers_stay_on_grid_and_never_move_onto_earlier_rovers(plan in arb_plan()) {
        let mut observer = RecordingObserver::default();
        let summary = run_mission(&plan.render(), UnknownDirectivePolicy::Reject, &mut observer)
            .expect("generated missions are well-formed");
        let reports = observer.reports();
        prop_assert_eq!(summary.rovers, plan.rovers.len());
        prop_assert_eq!(reports.len(), plan.rovers.len());

        let grid = Grid::new(plan.rightmost, plan.uppermost).expect("grid");
        for (idx, report) in reports.iter().enumerate() {
            let fin = Position::new(report.x, report.y);
            prop_assert!(grid.contains(fin));
            prop_assert_eq!(report.rover, idx + 1);

            let (x, y, _, _) = &plan.rovers[idx];
            if fin != Position::new(*x, *y) {
                for earlier in &reports[..idx] {
                    prop_assert_ne!(fin, Position::new(earlier.x, earlier.y));
                }
            }
        }
    }

    #[test]
    fn repeating_a_rejected_move_changes_nothing(extra in 1usize..10) {
        let once = "3 3\n0 3 N\nM\n";
        let many = format!("3 3\n0 3 N\n{}\n", "M".repeat(extra));
        let mut first = RecordingObserver::default();
        let mut second = RecordingObserver::default();
        run_mission(once, UnknownDirectivePolicy::Reject, &mut first).expect("mission");
        run_mission(&many, UnknownDirectivePolicy::Reject, &mut second).expect("mission");
        prop_assert_eq!(first.reports(), second.reports());
    }
}
