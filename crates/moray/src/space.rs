//! Coordinate spaces for nested diagram elements.
//!
//! Every bounded element lives in its parent's coordinate space. A [`CoordinateSpace`] pins an
//! element's local space down as the containment chain from the diagram root: one
//! `(element id, origin)` entry per ancestor, root-first, where `origin` is that ancestor's
//! position inside *its* parent. Spaces are plain values; nothing here references a live model.
//!
//! Transforms are pure translations. Diagram nesting never rotates or scales, so moving a point
//! between spaces is a walk up to the common ancestor and back down, adding and subtracting
//! origins.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordinateSpace {
    chain: Vec<(String, Point)>,
}

impl CoordinateSpace {
    /// The diagram root space (empty chain).
    pub fn root() -> Self {
        CoordinateSpace { chain: Vec::new() }
    }

    /// The space of a child element placed at `origin` inside `self`.
    pub fn child(&self, id: impl Into<String>, origin: Point) -> Self {
        let mut chain = self.chain.clone();
        chain.push((id.into(), origin));
        CoordinateSpace { chain }
    }

    /// The parent space, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.chain.is_empty() {
            return None;
        }
        Some(CoordinateSpace {
            chain: self.chain[..self.chain.len() - 1].to_vec(),
        })
    }

    pub fn is_root(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    /// Converts a point in this space into the parent space. Identity at the root.
    pub fn local_to_parent(&self, p: Point) -> Point {
        match self.chain.last() {
            Some((_, origin)) => Point {
                x: p.x + origin.x,
                y: p.y + origin.y,
            },
            None => p,
        }
    }

    /// Converts a point in the parent space into this space. Identity at the root.
    pub fn parent_to_local(&self, p: Point) -> Point {
        match self.chain.last() {
            Some((_, origin)) => Point {
                x: p.x - origin.x,
                y: p.y - origin.y,
            },
            None => p,
        }
    }

    fn common_prefix_len(&self, other: &CoordinateSpace) -> usize {
        self.chain
            .iter()
            .zip(other.chain.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }
}

/// Translates `p` from `from` into `to` by composing the origin offsets up to the lowest common
/// ancestor and back down. Chains that disagree about a shared ancestor's origin are treated as
/// unrelated below that point and resolved through the root.
pub fn translate_point(p: Point, from: &CoordinateSpace, to: &CoordinateSpace) -> Point {
    let common = from.common_prefix_len(to);
    let mut q = p;
    for (_, origin) in from.chain[common..].iter().rev() {
        q.x += origin.x;
        q.y += origin.y;
    }
    for (_, origin) in to.chain[common..].iter() {
        q.x -= origin.x;
        q.y -= origin.y;
    }
    q
}
