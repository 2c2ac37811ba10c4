/// Constructs a union type from an interpretation and a list of alternatives.
///
/// `Union![F; A, B, C]` expands to `Cons<F, A, Cons<F, B, Cons<F, C, Nil>>>`,
/// the same type as [`Union<F, T![A, B, C]>`](type@crate::Union).
///
/// # Examples
///
/// ```rust
/// use tunion::{Identity, Union};
///
/// type MyUnion = Union![Identity; i32, u32, f64];
/// let u = MyUnion::lift::<u32, _>(42);
/// assert_eq!(u.project::<u32, _>(), Some(42));
/// ```
#[macro_export]
macro_rules! Union {
    [$f:ty] => [$crate::Nil];
    [$f:ty;] => [$crate::Nil];
    [$f:ty; $head:ty $(, $t:ty)* $(,)?] => [$crate::Cons<$f, $head, $crate::Union![$f; $($t),*]>];
}

/// Constructs an [open union](crate::open) type from a list of alternatives.
///
/// # Examples
///
/// ```rust
/// use tunion::OpenUnion;
///
/// type MyUnion = OpenUnion![i32, u32, f64];
/// let u = MyUnion::new(42u32);
/// assert_eq!(u.extract::<u32, _>(), Some(42));
/// ```
#[macro_export]
macro_rules! OpenUnion {
    [$($t:ty),* $(,)?] => [$crate::Union![$crate::Identity; $($t),*]];
}

/// Constructs a tuple list (heterogeneous list) type from a list of types.
///
/// The value version of the macro is [`t`].
///
/// # Examples
///
/// ```rust
/// use tunion::T;
///
/// type MyList = T![i32, u32, f64];
/// let list: MyList = (42i32, (42u32, (42.0f64, ())));
/// ```
#[macro_export]
macro_rules! T {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::T!($($t,)*))];
}

/// Constructs a tuple list (heterogeneous list) value from a list of values.
///
/// The type version of the macro is [`T`]. Its main use is handing one
/// closure per alternative to [`Fold`](crate::union::Fold).
///
/// # Examples
///
/// ```rust
/// use tunion::t;
///
/// type MyList = (i32, (u32, (f64, ())));
/// let list: MyList = t![42i32, 42u32, 42.0f64];
/// ```
#[macro_export]
macro_rules! t {
    [] => [()];
    [$head:expr $(, $t:expr)* $(,)?] => [($head, $crate::t!($($t,)*))];
}
