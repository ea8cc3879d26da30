//! Declarative macros that write the descriptor table and trait impls for plain
//! structs.

/// Build an [`AttributeMap`](crate::AttributeMap) literal.
///
/// ```ignore
/// let attrs = attributes! { "foo" => "x", "bar" => 2 };
/// ```
#[macro_export]
macro_rules! attributes {
    () => {
        $crate::AttributeMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::AttributeMap::new();
        $(
            attrs.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        attrs
    }};
}

/// Declare a data object struct.
///
/// Every field is a constructor parameter and a public attribute, in
/// declaration order. `= expr` declares a default. An optional trailing
/// `equality = Strict;` selects the strict [`EqualityStrategy`](crate::EqualityStrategy).
///
/// ```ignore
/// data_object! {
///     pub struct SimpleClass {
///         pub foo: Value,
///         pub bar: Value = "xyz",
///     }
/// }
/// ```
///
/// Generates `new`, [`AsJson`](crate::AsJson), [`DataObject`](crate::DataObject),
/// and `PartialEq`/`Eq`/`Hash`/`Display`/`Debug` derived from the attribute
/// mapping. Field types need `Clone`, `Into<Value>` and [`FromValue`](crate::FromValue).
#[macro_export]
macro_rules! data_object {
    (@default) => {
        ::core::option::Option::None
    };
    (@default $default:expr) => {
        ::core::option::Option::Some($crate::Value::from($default))
    };
    (@equality) => {};
    (@equality $equality:ident) => {
        const EQUALITY: $crate::EqualityStrategy = $crate::EqualityStrategy::$equality;
    };
    (@identity $name:ident) => {
        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::AsJson::as_json(self) == $crate::AsJson::as_json(other)
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::AsJson::hash_code(self));
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::AsJson::to_display_string(self))
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::AsJson::to_debug_string(self))
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
        $(equality = $equality:ident;)?
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: impl ::core::convert::Into<$ty>),*) -> Self {
                Self {
                    $($field: $field.into(),)*
                }
            }
        }

        impl $crate::AsJson for $name {
            fn type_name(&self) -> &str {
                stringify!($name)
            }

            fn as_json(&self) -> $crate::AttributeMap {
                #[allow(unused_mut)]
                let mut attrs = $crate::AttributeMap::new();
                $(
                    attrs.insert(
                        ::std::string::String::from(stringify!($field)),
                        $crate::Value::from(::core::clone::Clone::clone(&self.$field)),
                    );
                )*
                attrs
            }
        }

        impl $crate::DataObject for $name {
            $crate::data_object!(@equality $($equality)?);

            fn signature() -> $crate::Signature {
                $crate::Signature::new()
                    $(.param(stringify!($field), $crate::data_object!(@default $($default)?)))*
            }

            #[allow(unused_mut, unused_variables)]
            fn construct(mut args: $crate::BoundArguments) -> $crate::DataObjectResult<Self> {
                ::core::result::Result::Ok(Self {
                    $($field: args.take(stringify!($field))?,)*
                })
            }
        }

        $crate::data_object!(@identity $name);
    };
}

/// Declare an immutable data object struct.
///
/// Same grammar as [`data_object!`], but every field is stored in a
/// [`WriteOnce`](crate::WriteOnce) cell and exposed through a getter of the
/// same name. `new` and `from_dict` assign each cell once; any later write
/// through [`ImmutableDataObject::assign`](crate::ImmutableDataObject::assign)
/// fails with `ImmutableObjectViolation`.
#[macro_export]
macro_rules! immutable_data_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
        $(equality = $equality:ident;)?
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $field: $crate::WriteOnce<$ty>,
            )*
        }

        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: impl ::core::convert::Into<$ty>),*) -> $crate::DataObjectResult<Self> {
                let this = Self {
                    $($field: $crate::WriteOnce::new(),)*
                };
                $(this.$field.set(stringify!($field), $field.into())?;)*
                ::core::result::Result::Ok(this)
            }

            $(
                pub fn $field(&self) -> ::core::option::Option<&$ty> {
                    self.$field.get()
                }
            )*
        }

        impl $crate::AsJson for $name {
            fn type_name(&self) -> &str {
                stringify!($name)
            }

            fn as_json(&self) -> $crate::AttributeMap {
                #[allow(unused_mut)]
                let mut attrs = $crate::AttributeMap::new();
                $(
                    if let ::core::option::Option::Some(value) = self.$field.get() {
                        attrs.insert(
                            ::std::string::String::from(stringify!($field)),
                            $crate::Value::from(::core::clone::Clone::clone(value)),
                        );
                    }
                )*
                attrs
            }
        }

        impl $crate::DataObject for $name {
            $crate::data_object!(@equality $($equality)?);

            fn signature() -> $crate::Signature {
                $crate::Signature::new()
                    $(.param(stringify!($field), $crate::data_object!(@default $($default)?)))*
            }

            #[allow(unused_mut, unused_variables)]
            fn construct(mut args: $crate::BoundArguments) -> $crate::DataObjectResult<Self> {
                let this = Self {
                    $($field: $crate::WriteOnce::new(),)*
                };
                $(this.$field.set(stringify!($field), args.take(stringify!($field))?)?;)*
                ::core::result::Result::Ok(this)
            }
        }

        impl $crate::ImmutableDataObject for $name {
            fn assign(&self, name: &str, value: $crate::Value) -> $crate::DataObjectResult<()> {
                match name {
                    $(stringify!($field) => self.$field.assign(name, value),)*
                    _ => ::core::result::Result::Err($crate::DataObjectError::unknown_attribute(name)),
                }
            }
        }

        $crate::data_object!(@identity $name);
    };
}
