//! A statically checked rendition of the node linkage behind [`crate::List`].
//!
//! The main list proves its invariants with raw pointers, `unsafe` blocks
//! and debug assertions. This module expresses the same double links with no
//! `unsafe` at all: each node is a branded [`GhostCell`] owned by exactly
//! two [`StaticRc`] halves, one held by each neighbour (or by the list's end
//! anchors), and every read or write goes through the list's [`GhostToken`].
//! Relinking a node means literally handing its ownership halves around, so
//! a dangling link cannot be expressed.
//!
//! It stays an experiment: threading the token through every call makes the
//! API too noisy to replace the cursor-based container, but it is kept
//! compiled and tested as a reference point for the linkage algebra.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

/// The two ends of a chain, also used to index a node's neighbour links.
const FRONT: usize = 0;
const BACK: usize = 1;

/// A doubly-linked chain whose links are ownership halves.
pub struct TokenList<'id, T> {
    ends: [Option<NodePtr<'id, T>>; 2],
    len: usize,
}

/// `links[side]` holds a half of the neighbour towards `side`, or `None` at
/// that end of the chain. Every node is owned by exactly two halves: one per
/// neighbour, with the list's `ends` standing in at the rims.
struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    value: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(value: T) -> Self {
        Self {
            links: [None, None],
            value,
        }
    }
}

impl<'id, T> Default for TokenList<'id, T> {
    fn default() -> Self {
        Self {
            ends: [None, None],
            len: 0,
        }
    }
}

// The side-generic core; `oppo = 1 - side` is the other direction.
impl<'id, T> TokenList<'id, T> {
    fn push_at(&mut self, side: usize, value: T, token: &mut GhostToken<'id>) {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(value))));
        match self.ends[side].take() {
            // The old end node gains a link towards `side`; the new node
            // links back towards the middle with the half just taken.
            Some(old_end) => {
                old_end.deref().borrow_mut(token).links[side] = Some(left);
                right.deref().borrow_mut(token).links[oppo] = Some(old_end);
            }
            // First node: its other half becomes the opposite end anchor.
            None => self.ends[oppo] = Some(left),
        }
        self.ends[side] = Some(right);
        self.len += 1;
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let outer = self.ends[side].take()?;
        let inner = match outer.deref().borrow_mut(token).links[oppo].take() {
            // The neighbour releases its half of the popped node and takes
            // over as the end anchor.
            Some(neighbour) => {
                let inner = neighbour.deref().borrow_mut(token).links[side]
                    .take()
                    .expect("end neighbour must link back to the end node");
                self.ends[side] = Some(neighbour);
                inner
            }
            // Last node: the opposite anchor held its other half.
            None => self.ends[oppo]
                .take()
                .expect("a single node must be anchored at both ends"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(outer, inner)).into_inner().value)
    }

    fn peek_at<'a>(&'a self, side: usize, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.ends[side]
            .as_ref()
            .map(|end| &end.deref().borrow(token).value)
    }
}

impl<'id, T> TokenList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push_at(FRONT, value, token);
    }

    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push_at(BACK, value, token);
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(FRONT, token)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(BACK, token)
    }

    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.peek_at(FRONT, token)
    }

    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.peek_at(BACK, token)
    }

    /// Pop every node, releasing both halves of each. Without this the
    /// chain's nodes would leak on drop: `StaticRc` cannot free a node from
    /// a lone half.
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_back(token).is_some() {}
    }
}
