//! Property-based tests for chain execution.
//!
//! These tests use proptest to verify ordering and short-circuit
//! properties hold across many randomly generated chains.

use chainer::{start_chain, ValidationError};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Form {
    values: Vec<i64>,
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

/// Expected records: one per property with a failing rule, naming the first one.
fn expected_errors(plans: &[Vec<bool>]) -> Vec<ValidationError> {
    plans
        .iter()
        .enumerate()
        .filter_map(|(i, plan)| {
            plan.iter().position(|passes| !passes).map(|j| {
                ValidationError::new(format!("field{i}"), format!("field{i} rule{j}"))
            })
        })
        .collect()
}

fn run_plans(plans: &[Vec<bool>], calls: &Arc<AtomicUsize>) -> Vec<ValidationError> {
    let mut form = Form {
        values: vec![0; plans.len()],
    };
    let mut chain = start_chain(&mut form);

    for (i, plan) in plans.iter().enumerate() {
        let mut property = chain.check(format!("field{i}"), move |f: &mut Form| &mut f.values[i]);
        for (j, passes) in plan.iter().copied().enumerate() {
            let calls = Arc::clone(calls);
            property = property.validate(
                move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    passes
                },
                format!("field{i} rule{j}"),
            );
        }
        chain = property.done();
    }

    block_on(chain.pack()).unwrap()
}

fn arbitrary_plans() -> impl Strategy<Value = Vec<Vec<bool>>> {
    prop::collection::vec(prop::collection::vec(any::<bool>(), 0..6), 0..8)
}

proptest! {
    #[test]
    fn records_follow_declaration_order(plans in arbitrary_plans()) {
        let calls = Arc::new(AtomicUsize::new(0));
        let errors = run_plans(&plans, &calls);
        prop_assert_eq!(errors, expected_errors(&plans));
    }

    #[test]
    fn at_most_one_record_per_check(plans in arbitrary_plans()) {
        let calls = Arc::new(AtomicUsize::new(0));
        let errors = run_plans(&plans, &calls);

        prop_assert!(errors.len() <= plans.len());
        for (i, _) in plans.iter().enumerate() {
            let property = format!("field{i}");
            prop_assert!(errors.iter().filter(|e| e.property == property).count() <= 1);
        }
    }

    #[test]
    fn nothing_runs_after_first_failure(plans in arbitrary_plans()) {
        let calls = Arc::new(AtomicUsize::new(0));
        run_plans(&plans, &calls);

        let expected: usize = plans
            .iter()
            .map(|plan| plan.iter().position(|passes| !passes).map_or(plan.len(), |j| j + 1))
            .sum();
        prop_assert_eq!(calls.load(Ordering::SeqCst), expected);
    }

    #[test]
    fn repacking_is_structurally_stable(plans in arbitrary_plans()) {
        let mut form = Form {
            values: vec![0; plans.len()],
        };
        let mut chain = start_chain(&mut form);
        for (i, plan) in plans.iter().enumerate() {
            let mut property = chain.check(format!("field{i}"), move |f: &mut Form| &mut f.values[i]);
            for (j, passes) in plan.iter().copied().enumerate() {
                property = property.validate(move |_| passes, format!("field{i} rule{j}"));
            }
            chain = property.done();
        }

        let first = block_on(chain.pack()).unwrap();
        let second = block_on(chain.pack()).unwrap();
        prop_assert_eq!(first, second);
    }
}
