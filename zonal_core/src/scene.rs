// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained mark set and keyed reconciliation.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Point;

use crate::mark::{Mark, MarkId, MarkPayload};

/// A live mark in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkNode {
    /// Rendering order hint.
    pub z_index: i32,
    /// Current (on-screen) attribute state.
    pub payload: MarkPayload,
}

/// One reconciliation outcome for a mark id.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// The id is new: the mark was inserted directly at its target state.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Render order.
        z_index: i32,
        /// Initial (and current) attribute state.
        new: MarkPayload,
    },
    /// The id persists: the retained state was left in place and the new
    /// target is reported for the caller to apply or animate.
    Update {
        /// Mark id.
        id: MarkId,
        /// Render order (applied immediately).
        z_index: i32,
        /// Retained on-screen state at reconciliation time.
        old: MarkPayload,
        /// Target attribute state.
        new: MarkPayload,
    },
    /// The id disappeared: the mark was removed from the scene.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Last on-screen state.
        old: MarkPayload,
    },
}

impl MarkDiff {
    /// The id this diff concerns.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The retained scene: every live mark, keyed by identity.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, MarkNode>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the scene holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Whether `id` is live.
    pub fn contains(&self, id: MarkId) -> bool {
        self.marks.contains_key(&id)
    }

    /// Current state of a live mark.
    pub fn payload(&self, id: MarkId) -> Option<&MarkPayload> {
        self.marks.get(&id).map(|n| &n.payload)
    }

    /// Iterates live mark ids in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = MarkId> + '_ {
        self.marks.keys().copied()
    }

    /// Overwrites the current state of a live mark.
    ///
    /// Returns `false` if the id is not live (the write is dropped).
    pub fn set_payload(&mut self, id: MarkId, payload: MarkPayload) -> bool {
        match self.marks.get_mut(&id) {
            Some(node) => {
                node.payload = payload;
                true
            }
            None => false,
        }
    }

    /// Reconciles the scene against a freshly generated mark set.
    ///
    /// Marks are matched by id:
    /// - unknown ids enter, inserted directly at their target state;
    /// - persisting ids keep their retained state (only `z_index` is applied)
    ///   and report an [`MarkDiff::Update`] with the new target;
    /// - ids absent from `marks` exit and are removed immediately.
    ///
    /// Enter/update diffs follow the order of `marks`; exits are appended in
    /// id order for determinism. Afterwards the live id set equals the id set
    /// of `marks` exactly.
    pub fn reconcile(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut diffs = Vec::with_capacity(marks.len());
        let mut seen: HashSet<MarkId> = HashSet::with_capacity(marks.len());

        for mark in marks {
            seen.insert(mark.id);
            match self.marks.get_mut(&mark.id) {
                Some(node) => {
                    node.z_index = mark.z_index;
                    diffs.push(MarkDiff::Update {
                        id: mark.id,
                        z_index: mark.z_index,
                        old: node.payload.clone(),
                        new: mark.payload,
                    });
                }
                None => {
                    self.marks.insert(
                        mark.id,
                        MarkNode {
                            z_index: mark.z_index,
                            payload: mark.payload.clone(),
                        },
                    );
                    diffs.push(MarkDiff::Enter {
                        id: mark.id,
                        z_index: mark.z_index,
                        new: mark.payload,
                    });
                }
            }
        }

        let mut exited: Vec<MarkId> = self
            .marks
            .keys()
            .copied()
            .filter(|id| !seen.contains(id))
            .collect();
        exited.sort_unstable();
        for id in exited {
            let node = self.marks.remove(&id).expect("id collected from the map");
            diffs.push(MarkDiff::Exit {
                id,
                old: node.payload,
            });
        }

        diffs
    }

    /// Returns the topmost mark hit by `pos`, if any.
    ///
    /// Ties resolve by `(z_index, id)`, matching render order, so the mark
    /// painted last wins.
    pub fn pick(&self, pos: Point, slop: f64) -> Option<MarkId> {
        self.marks
            .iter()
            .filter(|(_, node)| node.payload.hit(pos, slop))
            .max_by_key(|(id, node)| (node.z_index, **id))
            .map(|(id, _)| *id)
    }

    /// Live marks in render order: ascending `(z_index, id)`.
    pub fn ordered(&self) -> Vec<(MarkId, &MarkNode)> {
        let mut out: Vec<_> = self.marks.iter().map(|(id, node)| (*id, node)).collect();
        out.sort_by_key(|(id, node)| (node.z_index, *id));
        out
    }
}
