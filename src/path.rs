use alloc::{string::String, vec::Vec};

/// A path addressing a single value inside a JSON document.
pub type Path = Vec<PathComponent>;

/// One step of a [`Path`].
///
/// Array indices are 1-based: `Index(1)` addresses the first element. An
/// `Index` component never matches an object member and a `Key` component
/// never matches an array element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathComponent {
    /// An object member, matched byte-for-byte against the decoded key.
    Key(String),
    /// A 1-based array position.
    Index(usize),
}

impl From<&str> for PathComponent {
    fn from(s: &str) -> Self {
        Self::Key(s.into())
    }
}

impl From<String> for PathComponent {
    fn from(s: String) -> Self {
        Self::Key(s)
    }
}

impl From<usize> for PathComponent {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

/// Conversion used by the [`path!`](crate::path!) macro so components can be
/// written as bare string and integer literals.
pub trait PathComponentFrom<T> {
    fn from_component(value: T) -> PathComponent;
}

impl PathComponentFrom<&str> for PathComponent {
    fn from_component(value: &str) -> Self {
        PathComponent::Key(value.into())
    }
}

impl PathComponentFrom<String> for PathComponent {
    fn from_component(value: String) -> Self {
        PathComponent::Key(value)
    }
}

// Any integer literal works as an index. Values with no usize counterpart
// (negative ones) clamp to index 0, which addresses nothing since elements
// count from 1.
macro_rules! index_component {
    ($($int:ty)+) => {$(
        impl PathComponentFrom<$int> for PathComponent {
            fn from_component(value: $int) -> Self {
                PathComponent::Index(usize::try_from(value).unwrap_or(0))
            }
        }
    )+};
}
index_component!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize);

/// Builds a [`Path`] from bare key and index literals.
///
/// ```
/// use jsonpluck::{path, PathComponent};
///
/// let p = path!["users", 3, "name"];
/// assert_eq!(
///     p,
///     vec![
///         PathComponent::Key("users".into()),
///         PathComponent::Index(3),
///         PathComponent::Key("name".into()),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ($($component:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut path = $crate::Path::new();
        $(path.push(<$crate::PathComponent as $crate::PathComponentFrom<_>>::from_component($component));)*
        path
    }};
}

#[cfg(test)]
mod test {
    use alloc::vec;

    use super::*;

    #[test]
    fn test_path_component_from() {
        let key = PathComponent::from_component("test");
        assert_eq!(key, PathComponent::Key("test".into()));
        let index = PathComponent::from_component(8u8);
        assert_eq!(index, PathComponent::Index(8usize));
    }

    #[test]
    fn test_path_macro() {
        let p: Path = path![1, "foo", 2];
        assert_eq!(
            p,
            vec![
                PathComponent::Index(1),
                PathComponent::Key("foo".into()),
                PathComponent::Index(2)
            ]
        );
        assert!(path![].is_empty());
    }
}
