//! Two cursors over one line source.
//!
//! Every item one active cursor pulls from the source is queued for its
//! sibling, so both observe the same sequence in the same order no matter
//! how their reads interleave. A parked cursor is not fed; it picks up at
//! whatever position the source has reached when it is resumed.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

struct Shared<I: Iterator> {
    source: I,
    pending: [VecDeque<I::Item>; 2],
    parked: [bool; 2],
}

/// One read position over a replay-buffered source, created by [`tee`].
pub struct Cursor<I: Iterator> {
    side: usize,
    shared: Rc<RefCell<Shared<I>>>,
}

/// Splits `source` into two independently paced cursors.
///
/// # Example
/// ```
/// use splice_blocks::tee::tee;
///
/// let (mut a, mut b) = tee(["one", "two", "three"].into_iter());
/// assert_eq!(a.next(), Some("one"));
/// assert_eq!(a.next(), Some("two"));
/// assert_eq!(b.next(), Some("one"));
/// assert_eq!(b.next(), Some("two"));
/// assert_eq!(b.next(), Some("three"));
/// assert_eq!(a.next(), Some("three"));
/// ```
pub fn tee<I>(source: I) -> (Cursor<I>, Cursor<I>)
where
    I: Iterator,
    I::Item: Clone,
{
    let shared = Rc::new(RefCell::new(Shared {
        source,
        pending: [VecDeque::new(), VecDeque::new()],
        parked: [false, false],
    }));

    (
        Cursor {
            side: 0,
            shared: Rc::clone(&shared),
        },
        Cursor { side: 1, shared },
    )
}

impl<I: Iterator> Cursor<I> {
    /// Stops buffering the sibling's reads for this cursor and drops
    /// anything already queued.
    pub fn park(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.parked[self.side] = true;
        shared.pending[self.side].clear();
    }

    /// Starts buffering again from the source's current position.
    pub fn resume(&mut self) {
        self.shared.borrow_mut().parked[self.side] = false;
    }

    pub fn is_parked(&self) -> bool {
        self.shared.borrow().parked[self.side]
    }

    /// Number of items read by the sibling and not yet consumed here.
    pub fn buffered(&self) -> usize {
        self.shared.borrow().pending[self.side].len()
    }
}

impl<I> Iterator for Cursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut shared = self.shared.borrow_mut();
        if let Some(item) = shared.pending[self.side].pop_front() {
            return Some(item);
        }

        let item = shared.source.next()?;
        let sibling = 1 - self.side;
        if !shared.parked[sibling] {
            shared.pending[sibling].push_back(item.clone());
        }
        Some(item)
    }
}
