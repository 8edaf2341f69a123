//! The contract required of body types.

use static_assertions::assert_impl_all;

/// Value-semantic contract required of every body type.
///
/// A semiregular type is default-constructible and copyable; Rust supplies
/// destruction, moves, and swaps for every owned type, so `Default + Clone`
/// covers the rest of the classical requirement. Equality is deliberately
/// not part of the contract; a [`Handle`](crate::Handle) merely forwards
/// comparisons when the body happens to support them.
///
/// This is an alias trait: every `Default + Clone` type implements it
/// automatically.
pub trait Semiregular: Default + Clone {}

impl<T: Default + Clone> Semiregular for T {}

assert_impl_all!(u64: Semiregular);
assert_impl_all!((): Semiregular);
assert_impl_all!(alloc::string::String: Semiregular);

#[cfg(test)]
mod tests {
    use super::Semiregular;

    fn requires_semiregular<T: Semiregular>() {}

    #[test]
    fn compound_bodies_qualify() {
        #[derive(Clone, Default)]
        struct Compound {
            _text: alloc::string::String,
            _values: alloc::vec::Vec<u32>,
        }

        requires_semiregular::<Compound>();
        requires_semiregular::<Option<u8>>();
    }
}
