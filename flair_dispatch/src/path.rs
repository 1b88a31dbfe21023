// Copyright 2026 the Flair Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Propagation chain construction.
//!
//! ## Overview
//!
//! Walks parents from the target to the root and emits the legacy chain:
//!
//! - Capturing: root → target's parent. The target itself is excluded.
//! - At target: the target.
//! - Bubbling: target's parent → root, only when the event bubbles.
//!
//! The chain is computed once, before any listener runs. Listeners that reparent
//! nodes during a dispatch do not change the chain of that dispatch.

use alloc::vec::Vec;

use flair_event::TargetId;

use crate::error::DispatchError;
use crate::types::{ParentLookup, Step};

/// Build the propagation chain for `target`.
///
/// Fails with [`DispatchError::AncestryTooDeep`] when more than `max_depth` ancestors
/// are found, which also catches cyclic parent lookups.
pub fn propagation_path(
    target: TargetId,
    parents: &impl ParentLookup<TargetId>,
    bubbles: bool,
    max_depth: usize,
) -> Result<Vec<Step>, DispatchError> {
    let ancestors = ancestors(target, parents, max_depth)?;
    let mut out = Vec::with_capacity(ancestors.len() * 2 + 1);
    // Capture: root→parent
    for &n in ancestors.iter().rev() {
        out.push(Step::capture(n));
    }
    // Target
    out.push(Step::target(target));
    // Bubble: parent→root
    if bubbles {
        for &n in &ancestors {
            out.push(Step::bubble(n));
        }
    }
    Ok(out)
}

/// Ancestors of `target`, nearest first.
pub(crate) fn ancestors(
    target: TargetId,
    parents: &impl ParentLookup<TargetId>,
    max_depth: usize,
) -> Result<Vec<TargetId>, DispatchError> {
    let mut out = Vec::new();
    let mut cur = target;
    while let Some(p) = parents.parent_of(&cur) {
        if out.len() == max_depth {
            return Err(DispatchError::AncestryTooDeep {
                target,
                limit: max_depth,
            });
        }
        out.push(p);
        cur = p;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoParent;
    use alloc::vec;
    use flair_event::EventPhase;

    struct Chain;
    impl ParentLookup<TargetId> for Chain {
        fn parent_of(&self, node: &TargetId) -> Option<TargetId> {
            match node.get() {
                3 => Some(TargetId::new(2)),
                2 => Some(TargetId::new(1)),
                _ => None,
            }
        }
    }

    struct Cycle;
    impl ParentLookup<TargetId> for Cycle {
        fn parent_of(&self, node: &TargetId) -> Option<TargetId> {
            Some(TargetId::new(node.get() ^ 1))
        }
    }

    fn phases(path: &[Step]) -> Vec<(EventPhase, u64)> {
        path.iter().map(|s| (s.phase, s.node.get())).collect()
    }

    #[test]
    fn bubbling_chain_excludes_target_from_capture_and_bubble() {
        let path = propagation_path(TargetId::new(3), &Chain, true, 16).unwrap();
        assert_eq!(
            phases(&path),
            vec![
                (EventPhase::Capturing, 1),
                (EventPhase::Capturing, 2),
                (EventPhase::AtTarget, 3),
                (EventPhase::Bubbling, 2),
                (EventPhase::Bubbling, 1),
            ]
        );
    }

    #[test]
    fn non_bubbling_chain_still_captures() {
        let path = propagation_path(TargetId::new(3), &Chain, false, 16).unwrap();
        assert_eq!(
            phases(&path),
            vec![
                (EventPhase::Capturing, 1),
                (EventPhase::Capturing, 2),
                (EventPhase::AtTarget, 3),
            ]
        );
    }

    #[test]
    fn root_target_is_a_singleton_chain() {
        let path = propagation_path(TargetId::new(9), &NoParent, true, 16).unwrap();
        assert_eq!(phases(&path), vec![(EventPhase::AtTarget, 9)]);
    }

    #[test]
    fn cyclic_ancestry_hits_depth_limit() {
        let err = propagation_path(TargetId::new(4), &Cycle, true, 8).unwrap_err();
        assert_eq!(
            err,
            DispatchError::AncestryTooDeep {
                target: TargetId::new(4),
                limit: 8,
            }
        );
    }

    #[test]
    fn depth_limit_is_inclusive() {
        assert!(propagation_path(TargetId::new(3), &Chain, true, 2).is_ok());
        assert!(propagation_path(TargetId::new(3), &Chain, true, 1).is_err());
    }
}
