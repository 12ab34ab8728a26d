//! Write Order Module
//!
//! Tracks the order in which names were written, for eviction.
//!
//! Implemented as an arena-backed doubly-linked list: slots live in a `Vec`
//! and link to each other by index, so a slot handle stays valid no matter
//! what happens to the rest of the list. Front = least recently written,
//! back = most recently written. All operations are O(1).

/// Sentinel index marking the absence of a link.
const NIL: usize = usize::MAX;

/// One arena slot holding a name and its neighbor links.
#[derive(Debug)]
struct Slot {
    /// The cached name this slot tracks
    name: String,
    /// Index of the next-older slot (toward the front)
    prev: usize,
    /// Index of the next-newer slot (toward the back)
    next: usize,
}

// == Write Order ==
/// Eviction-order tracker with stable integer handles.
///
/// Slots are allocated from the arena and recycled through a free list
/// threaded over the `next` links, so the arena never shrinks and handles
/// held by the store never move.
#[derive(Debug)]
pub struct WriteOrder {
    /// Slot arena
    slots: Vec<Slot>,
    /// Index of the least recently written slot
    head: usize,
    /// Index of the most recently written slot
    tail: usize,
    /// Head of the free list
    free: usize,
    /// Number of live slots
    len: usize,
}

impl WriteOrder {
    // == Constructor ==
    /// Creates an empty tracker with room for `slots` entries.
    ///
    /// The arena is pre-allocated so that no growth happens as long as at
    /// most `slots` entries are live at once.
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            slots: Vec::with_capacity(slots),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    // == Push Back ==
    /// Appends a name at the back (most recently written) and returns its
    /// slot handle.
    pub fn push_back(&mut self, name: String) -> usize {
        let handle = self.alloc(name);
        self.link_back(handle);
        self.len += 1;
        handle
    }

    // == Move To Back ==
    /// Splices an existing slot to the back, making it most recent.
    ///
    /// No other handle is invalidated by the move.
    pub fn move_to_back(&mut self, handle: usize) {
        if self.tail == handle {
            return;
        }
        self.unlink(handle);
        self.link_back(handle);
    }

    // == Pop Front ==
    /// Removes the least recently written slot and returns its name.
    ///
    /// Returns None if the tracker is empty. The slot is recycled.
    pub fn pop_front(&mut self) -> Option<String> {
        if self.head == NIL {
            return None;
        }
        let handle = self.head;
        self.unlink(handle);
        let name = std::mem::take(&mut self.slots[handle].name);
        // Recycle the slot
        self.slots[handle].next = self.free;
        self.free = handle;
        self.len -= 1;
        Some(name)
    }

    // == Peek Front ==
    /// Returns the least recently written name without removing it.
    pub fn peek_front(&self) -> Option<&str> {
        if self.head == NIL {
            None
        } else {
            Some(self.slots[self.head].name.as_str())
        }
    }

    // == Length ==
    /// Returns the number of tracked names.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops all slots. Arena storage is retained for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.len = 0;
    }

    // == Internal Helpers ==

    /// Takes a slot from the free list, or grows the arena by one.
    fn alloc(&mut self, name: String) -> usize {
        if self.free != NIL {
            let handle = self.free;
            self.free = self.slots[handle].next;
            self.slots[handle] = Slot {
                name,
                prev: NIL,
                next: NIL,
            };
            handle
        } else {
            self.slots.push(Slot {
                name,
                prev: NIL,
                next: NIL,
            });
            self.slots.len() - 1
        }
    }

    /// Detaches a slot from the list, fixing up head/tail and neighbors.
    fn unlink(&mut self, handle: usize) {
        let prev = self.slots[handle].prev;
        let next = self.slots[handle].next;

        if prev != NIL {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.slots[handle].prev = NIL;
        self.slots[handle].next = NIL;
    }

    /// Attaches a detached slot at the back of the list.
    fn link_back(&mut self, handle: usize) {
        self.slots[handle].prev = self.tail;
        self.slots[handle].next = NIL;

        if self.tail != NIL {
            self.slots[self.tail].next = handle;
        }
        self.tail = handle;

        if self.head == NIL {
            self.head = handle;
        }
    }
}
