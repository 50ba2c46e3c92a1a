use super::context::SearchContext;
use super::types::Frame;
use super::ExactOptions;
use log::{trace, warn};
use tspp_core::{distance, is_hop_valid, Optimality, PointSet, Solution, SolveError};

pub(crate) fn run(set: &PointSet, options: &ExactOptions) -> Result<Solution, SolveError> {
    let mut ctx = SearchContext::new(set, options.use_memo);
    let clock = options.budget.start();

    let mut stack = vec![Frame::root(set.len())];
    let mut children = Vec::new();

    while let Some(frame) = stack.pop() {
        let last = ctx.last_point(&frame);

        // Base case: every intermediate placed, close the route at the end point
        if frame.remaining.is_clear() {
            let total = frame.distance + distance(last, set.end());
            trace!("[Exact] complete route {:?} length {}", frame.path, total);
            ctx.offer(&frame.path, total);
            continue;
        }

        if !ctx.admit(&frame) {
            continue;
        }

        for slot in frame.remaining.ones() {
            if clock.exhausted(ctx.stats.explored) {
                warn!(
                    "[Exact] budget exhausted after {} expansions ({} states memoised)",
                    ctx.stats.explored,
                    ctx.memo_len()
                );
                return Err(SolveError::BudgetExhausted { best: ctx.best_path(), stats: ctx.stats });
            }
            ctx.stats.explored += 1;

            let next = set.point(slot);
            let blockers = frame.remaining.ones().map(|i| set.point(i));
            if is_hop_valid(last, next, blockers) {
                children.push(frame.child(slot, distance(last, next)));
            }
        }

        // Reversed so the lowest slot is expanded first, as recursion would.
        stack.extend(children.drain(..).rev());
    }

    match ctx.best_path() {
        Some(path) => Ok(Solution { path, stats: ctx.stats, optimality: Optimality::Proven }),
        None => Err(SolveError::NoFeasiblePath { stats: ctx.stats }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tspp_core::{Point, SearchBudget};

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn single_intermediate() {
        let set = PointSet::new(p(0, 0), p(0, 10), vec![p(5, 5)]).unwrap();
        let solution = run(&set, &ExactOptions::default()).unwrap();
        assert_eq!(solution.path.points(), &[p(0, 0), p(5, 5), p(0, 10)]);
        assert_eq!(solution.path.total_distance(), 20);
        assert_eq!(solution.stats.explored, 1);
        assert_eq!(solution.stats.pruned, 0);
    }

    #[test]
    fn empty_set_is_a_direct_hop() {
        let set = PointSet::new(p(3, 4), p(-2, 9), Vec::new()).unwrap();
        let solution = run(&set, &ExactOptions::default()).unwrap();
        assert_eq!(solution.path.points(), &[p(3, 4), p(-2, 9)]);
        assert_eq!(solution.path.total_distance(), 10);
        assert_eq!(solution.stats.explored, 0);
    }

    #[test]
    fn zero_budget_aborts_without_candidate() {
        let set = PointSet::new(p(0, 0), p(10, 0), vec![p(5, 1), p(5, -1)]).unwrap();
        let options = ExactOptions {
            budget: SearchBudget::default().with_max_expansions(0),
            use_memo: true,
        };
        match run(&set, &options) {
            Err(SolveError::BudgetExhausted { best, stats }) => {
                assert!(best.is_none());
                assert_eq!(stats.explored, 0);
            }
            other => panic!("expected budget exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn repeated_states_are_pruned() {
        // s -> a -> b -> c and s -> b -> a -> c reach (c, {a, b, c}) at equal cost.
        let set = PointSet::new(
            p(0, 0),
            p(100, 100),
            vec![p(10, 0), p(0, 10), p(20, 20), p(30, 30)],
        )
        .unwrap();
        let solution = run(&set, &ExactOptions::default()).unwrap();
        assert!(solution.stats.pruned > 0);
        assert_eq!(solution.path.verify(&set), Ok(()));
    }
}
