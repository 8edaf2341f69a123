use core::cmp::Ordering;
use core::fmt;
use core::hash::{self, Hash};
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ops;
use core::ptr;

use alloc::boxed::Box;

use static_assertions::const_assert_eq;

use crate::layout;
use crate::space::S4;
use crate::traits::Semiregular;

/// An owning handle that hides its body behind a fixed-size footprint.
///
/// The body lives directly inside the footprint when it fits (by size and
/// alignment) and behind a uniquely-owned box otherwise. The representation
/// is fixed per `(B, Space)` instantiation; instances of the same handle type
/// never differ in where they keep their body.
///
/// Handles are value types: cloning clones the body, dropping destroys it
/// exactly once, and [`take`](Handle::take)/[`take_from`](Handle::take_from)
/// express the move protocol explicitly.
///
/// # Example
///
/// ```
/// use handlebox::Handle;
/// use handlebox::space::S4;
///
/// let mut counter: Handle<u32, S4> = Handle::new();
/// *counter += 1;
///
/// let snapshot = counter.clone();
/// *counter += 1;
///
/// assert_eq!(*counter, 2);
/// assert_eq!(*snapshot, 1);
/// ```
pub struct Handle<B, Space = S4> {
    storage: MaybeUninit<Space>,
    _body: PhantomData<B>,
}

// The footprint is the whole handle: no discriminant, no side table.
const_assert_eq!(
    mem::size_of::<Handle<u8, S4>>(),
    mem::size_of::<S4>()
);
const_assert_eq!(
    mem::size_of::<Handle<[u64; 32], S4>>(),
    mem::size_of::<S4>()
);

impl<B, Space> Handle<B, Space> {
    /// Fixed per instantiation; every branch on it folds away at codegen.
    const INLINE: bool = layout::fits::<B, Space>();

    /// The footprint must hold a pointer no matter which representation is
    /// selected; when the body spills, the boxed slot must also be placeable.
    /// Referenced from every constructing operation so that a violation is a
    /// compile error, never a runtime one.
    const LAYOUT_OK: () = {
        assert!(
            mem::size_of::<Space>() >= mem::size_of::<*const ()>(),
            "`Space` must be large enough to hold a pointer",
        );
        if !layout::fits::<B, Space>() {
            assert!(
                layout::fits::<Option<Box<B>>, Space>(),
                "`Space` cannot hold the boxed body slot",
            );
        }
    };

    // Typed views of the raw footprint. Callers must match the representation
    // selected for this instantiation: `body`/`body_mut` are meaningful only
    // when `INLINE`, `slot`/`slot_mut` only when boxed.

    unsafe fn body(&self) -> &B {
        &*self.storage.as_ptr().cast()
    }

    unsafe fn body_mut(&mut self) -> &mut B {
        &mut *self.storage.as_mut_ptr().cast()
    }

    unsafe fn slot(&self) -> &Option<Box<B>> {
        &*self.storage.as_ptr().cast()
    }

    unsafe fn slot_mut(&mut self) -> &mut Option<Box<B>> {
        &mut *self.storage.as_mut_ptr().cast()
    }

    /// Returns true if the body is heap-allocated.
    ///
    /// The answer is a property of the `(B, Space)` pair, not of the
    /// instance.
    pub const fn is_heap(&self) -> bool {
        !Self::INLINE
    }

    /// Returns true if this handle was left empty by a move.
    ///
    /// Only heap-backed handles can be vacant; an in-place slot keeps holding
    /// a live body even after [`take`](Handle::take).
    pub fn is_vacant(&self) -> bool {
        if Self::INLINE {
            false
        } else {
            unsafe { self.slot() }.is_none()
        }
    }

    /// Returns a reference to the body, or `None` if this handle is vacant.
    ///
    /// # Example
    ///
    /// ```
    /// use handlebox::Handle;
    /// use handlebox::space::S4;
    ///
    /// let mut handle: Handle<[u64; 32], S4> = Handle::new();
    /// assert!(handle.get().is_some());
    ///
    /// let _moved = handle.take();
    /// assert!(handle.get().is_none());
    /// ```
    pub fn get(&self) -> Option<&B> {
        if Self::INLINE {
            Some(unsafe { self.body() })
        } else {
            unsafe { self.slot() }.as_deref()
        }
    }

    /// Mutable counterpart of [`get`](Handle::get).
    pub fn get_mut(&mut self) -> Option<&mut B> {
        if Self::INLINE {
            Some(unsafe { self.body_mut() })
        } else {
            unsafe { self.slot_mut() }.as_deref_mut()
        }
    }

    /// Returns a reference to the body without checking for vacancy.
    ///
    /// # Safety
    ///
    /// The handle must not be vacant. The precondition is verified by a
    /// `debug_assert!` only; release builds perform no check.
    pub unsafe fn get_unchecked(&self) -> &B {
        debug_assert!(!self.is_vacant(), "dereferenced a vacant (moved-from) handle");
        if Self::INLINE {
            self.body()
        } else {
            self.slot().as_deref().unwrap_unchecked()
        }
    }

    /// Mutable counterpart of [`get_unchecked`](Handle::get_unchecked).
    ///
    /// # Safety
    ///
    /// Same as [`get_unchecked`](Handle::get_unchecked): the handle must not
    /// be vacant.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut B {
        debug_assert!(!self.is_vacant(), "dereferenced a vacant (moved-from) handle");
        if Self::INLINE {
            self.body_mut()
        } else {
            self.slot_mut().as_deref_mut().unwrap_unchecked()
        }
    }
}

impl<B: Semiregular, Space> Handle<B, Space> {
    /// Creates a handle over a default-constructed body.
    ///
    /// The body is stored in place when it fits the footprint and boxed
    /// otherwise. A panic from `B::default()` (or an allocation failure)
    /// propagates unchanged and constructs nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use handlebox::Handle;
    /// use handlebox::space::S4;
    ///
    /// let handle: Handle<u64, S4> = Handle::new();
    /// assert_eq!(*handle, 0);
    /// ```
    pub fn new() -> Self {
        let () = Self::LAYOUT_OK;
        let mut storage = MaybeUninit::<Space>::uninit();
        if Self::INLINE {
            unsafe { storage.as_mut_ptr().cast::<B>().write(B::default()) };
        } else {
            let slot = Some(Box::new(B::default()));
            unsafe { storage.as_mut_ptr().cast::<Option<Box<B>>>().write(slot) };
        }
        Handle {
            storage,
            _body: PhantomData,
        }
    }

    /// Moves the body out into a new handle, leaving `self` moved-from.
    ///
    /// A heap-backed body is transferred by pointer, without touching the
    /// heap; `self` becomes vacant. An in-place body is moved out and the
    /// slot is refilled with `B::default()`, so `self` stays dereferenceable.
    /// Either way `self` remains valid to drop, clone, and reassign.
    ///
    /// # Example
    ///
    /// ```
    /// use handlebox::Handle;
    /// use handlebox::space::S4;
    ///
    /// let mut large: Handle<[u64; 32], S4> = Handle::new();
    /// let moved = large.take();
    ///
    /// assert!(large.is_vacant());
    /// assert_eq!(moved[0], 0);
    /// ```
    pub fn take(&mut self) -> Self {
        let () = Self::LAYOUT_OK;
        let mut storage = MaybeUninit::<Space>::uninit();
        if Self::INLINE {
            let body = mem::take(unsafe { self.body_mut() });
            unsafe { storage.as_mut_ptr().cast::<B>().write(body) };
        } else {
            let slot = unsafe { self.slot_mut() }.take();
            unsafe { storage.as_mut_ptr().cast::<Option<Box<B>>>().write(slot) };
        }
        Handle {
            storage,
            _body: PhantomData,
        }
    }

    /// Move-assigns the body out of `source`, dropping the previously owned
    /// body.
    ///
    /// `source` is left moved-from exactly as by [`take`](Handle::take).
    /// Mirrors [`Clone::clone_from`] the way `take` mirrors [`Clone::clone`].
    pub fn take_from(&mut self, source: &mut Self) {
        if Self::INLINE {
            unsafe { *self.body_mut() = mem::take(source.body_mut()) };
        } else {
            unsafe { *self.slot_mut() = source.slot_mut().take() };
        }
    }
}

impl<B: Semiregular, Space> Default for Handle<B, Space> {
    fn default() -> Self {
        Handle::new()
    }
}

impl<B: Semiregular, Space> Clone for Handle<B, Space> {
    fn clone(&self) -> Self {
        let () = Self::LAYOUT_OK;
        let mut storage = MaybeUninit::<Space>::uninit();
        if Self::INLINE {
            let body = unsafe { self.body() }.clone();
            unsafe { storage.as_mut_ptr().cast::<B>().write(body) };
        } else {
            // A vacant source yields a vacant clone: copying a moved-from
            // handle must stay well-defined.
            let slot = unsafe { self.slot() }
                .as_ref()
                .map(|body| Box::new(B::clone(body)));
            unsafe { storage.as_mut_ptr().cast::<Option<Box<B>>>().write(slot) };
        }
        Handle {
            storage,
            _body: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Copy-and-swap: a panicking body clone leaves `self` untouched.
        let mut copied = source.clone();
        self.take_from(&mut copied);
    }
}

impl<B, Space> Drop for Handle<B, Space> {
    fn drop(&mut self) {
        if Self::INLINE {
            // The in-place slot is live even after a move-out.
            unsafe { ptr::drop_in_place(self.storage.as_mut_ptr().cast::<B>()) };
        } else {
            // Dropping the slot frees the body exactly once when present and
            // is a no-op for a vacant handle.
            unsafe { ptr::drop_in_place(self.storage.as_mut_ptr().cast::<Option<Box<B>>>()) };
        }
    }
}

impl<B, Space> ops::Deref for Handle<B, Space> {
    type Target = B;

    fn deref(&self) -> &B {
        self.get().expect("dereferenced a vacant (moved-from) handle")
    }
}

impl<B, Space> ops::DerefMut for Handle<B, Space> {
    fn deref_mut(&mut self) -> &mut B {
        self.get_mut().expect("dereferenced a vacant (moved-from) handle")
    }
}

impl<B: fmt::Debug, Space> fmt::Debug for Handle<B, Space> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(body) => fmt::Debug::fmt(body, f),
            None => f.write_str("<vacant>"),
        }
    }
}

impl<B: fmt::Display, Space> fmt::Display for Handle<B, Space> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl<B, Space> fmt::Pointer for Handle<B, Space> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptr = match self.get() {
            Some(body) => ptr::from_ref(body),
            None => ptr::null(),
        };
        fmt::Pointer::fmt(&ptr, f)
    }
}

// Comparisons and hashing go through `get()` so vacant handles stay
// well-defined: vacancy equals vacancy and sorts before any value.

impl<B: PartialEq, Space> PartialEq for Handle<B, Space> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<B: Eq, Space> Eq for Handle<B, Space> {}

impl<B: PartialOrd, Space> PartialOrd for Handle<B, Space> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<B: Ord, Space> Ord for Handle<B, Space> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<B: Hash, Space> Hash for Handle<B, Space> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}
