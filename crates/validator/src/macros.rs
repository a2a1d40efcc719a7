//! Macros generating the argument-validator family.
//!
//! - [`arguments_validator!`]: one arity: the `ArgumentsN` holder, the
//!   `ArgumentsNValidator` trait, its default and boxed implementations and
//!   `Validator<ArgumentsN<..>>::apply`
//! - [`combine_validators!`]: the `combineN` function of one arity
//!
//! Both are invoked once per arity in [`crate::arguments`].

/// `A1` for one argument, `(A1, A2, ..)` otherwise.
macro_rules! args_tuple {
    ($single:ty) => { $single };
    ($($many:ty),+) => { ($($many),+) };
}

/// Pattern counterpart of [`args_tuple!`].
macro_rules! args_pattern {
    ($single:ident) => { $single };
    ($($many:ident),+) => { ($($many),+) };
}

// ============================================================================
// ARGUMENTS VALIDATOR MACRO
// ============================================================================

/// Generates one arity of the argument-validator family.
///
/// ```rust,ignore
/// arguments_validator! {
///     2 => Arguments2, Arguments2Validator, DefaultArguments2Validator, BoxedArguments2Validator;
///     (A1, a1, arg1), (A2, a2, arg2)
/// }
/// ```
macro_rules! arguments_validator {
    (
        $n:literal => $holder:ident, $tr:ident, $default:ident, $boxed:ident;
        $(($A:ident, $a:ident, $field:ident)),+
    ) => {
        #[doc = concat!("Positional holder of ", $n, " inputs.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $holder<$($A),+> {
            $(pub $field: $A,)+
        }

        impl<$($A),+> $holder<$($A),+> {
            /// Creates the holder.
            pub fn new($($a: $A),+) -> Self {
                Self { $($field: $a),+ }
            }

            /// Consumes the holder into a tuple.
            pub fn into_tuple(self) -> ($($A,)+) {
                ($(self.$field,)+)
            }
        }

        #[doc = concat!("Validates ", $n, " inputs and produces an `X` on success.")]
        ///
        /// Only [`validate_with`](Self::validate_with) is required; every
        /// combinator is derived from it.
        pub trait $tr<$($A,)+ X>: Send + Sync {
            /// Validates the inputs under `locale` and `group`.
            fn validate_with(
                &self,
                $($a: $A,)+
                locale: &$crate::message::Locale,
                group: &$crate::foundation::ConstraintGroup,
            ) -> $crate::foundation::Validated<X>;

            /// Locale used by [`validate`](Self::validate).
            fn default_locale(&self) -> $crate::message::Locale {
                $crate::message::Locale::ROOT
            }

            /// Validates the inputs under the default locale and group.
            fn validate(&self, $($a: $A),+) -> $crate::foundation::Validated<X> {
                let locale = self.default_locale();
                self.validate_with(
                    $($a,)+
                    &locale,
                    &$crate::foundation::ConstraintGroup::DEFAULT,
                )
            }

            /// Validates the inputs and converts violations into an error.
            fn validated(
                &self,
                $($a: $A),+
            ) -> Result<X, $crate::foundation::ConstraintViolationsError> {
                self.validate($($a),+).into_error_result()
            }

            /// Maps the success value with `f`. Violations are unchanged.
            fn and_then<Y, F>(self, f: F) -> $boxed<$($A,)+ Y>
            where
                Self: Sized + 'static,
                F: Fn(X) -> Y + Send + Sync + 'static,
            {
                let locale = self.default_locale();
                $boxed::new(locale, move |$($a,)+ locale, group| {
                    self.validate_with($($a,)+ locale, group).map(&f)
                })
            }

            /// Validates an `S` by first extracting the inputs with `g`.
            fn compose<S, G>(self, g: G) -> BoxedArguments1Validator<S, X>
            where
                Self: Sized + 'static,
                G: Fn(S) -> $crate::macros::args_tuple!($($A),+) + Send + Sync + 'static,
            {
                let locale = self.default_locale();
                BoxedArguments1Validator::new(locale, move |source, locale, group| {
                    let $crate::macros::args_pattern!($($a),+) = g(source);
                    self.validate_with($($a,)+ locale, group)
                })
            }

            /// Prefixes every violation name with `[index]`.
            fn indexed(self, index: usize) -> $boxed<$($A,)+ X>
            where
                Self: Sized + 'static,
            {
                let locale = self.default_locale();
                $boxed::new(locale, move |$($a,)+ locale, group| {
                    self.validate_with($($a,)+ locale, group)
                        .map_errors(|violations| violations.indexed(index))
                })
            }

            /// Wraps the success value in a [`Supplier`] that hands out
            /// clones of it.
            ///
            /// The inherent `lazy` of validators built with `apply` defers
            /// the mapper itself until the supplier is forced.
            ///
            /// [`Supplier`]: $crate::arguments::Supplier
            fn lazy(self) -> $boxed<$($A,)+ $crate::arguments::Supplier<X>>
            where
                Self: Sized + 'static,
                X: Clone + Send + Sync + 'static,
            {
                let locale = self.default_locale();
                $boxed::new(locale, move |$($a,)+ locale, group| {
                    self.validate_with($($a,)+ locale, group)
                        .map(|value| $crate::arguments::Supplier::new(move || value.clone()))
                })
            }

            /// Erases the concrete type.
            fn boxed(self) -> $boxed<$($A,)+ X>
            where
                Self: Sized + 'static,
            {
                let locale = self.default_locale();
                $boxed::new(locale, move |$($a,)+ locale, group| {
                    self.validate_with($($a,)+ locale, group)
                })
            }
        }

        #[doc = concat!("Type-erased [`", stringify!($tr), "`], cheap to clone.")]
        pub struct $boxed<$($A,)+ X> {
            default_locale: $crate::message::Locale,
            validate: ::std::sync::Arc<
                dyn Fn(
                        $($A,)+
                        &$crate::message::Locale,
                        &$crate::foundation::ConstraintGroup,
                    ) -> $crate::foundation::Validated<X>
                    + Send
                    + Sync,
            >,
        }

        impl<$($A,)+ X> $boxed<$($A,)+ X> {
            /// Wraps a validation function.
            pub fn new(
                default_locale: $crate::message::Locale,
                validate: impl Fn(
                        $($A,)+
                        &$crate::message::Locale,
                        &$crate::foundation::ConstraintGroup,
                    ) -> $crate::foundation::Validated<X>
                    + Send
                    + Sync
                    + 'static,
            ) -> Self {
                Self {
                    default_locale,
                    validate: ::std::sync::Arc::new(validate),
                }
            }
        }

        impl<$($A,)+ X> Clone for $boxed<$($A,)+ X> {
            fn clone(&self) -> Self {
                Self {
                    default_locale: self.default_locale.clone(),
                    validate: ::std::sync::Arc::clone(&self.validate),
                }
            }
        }

        impl<$($A,)+ X> ::std::fmt::Debug for $boxed<$($A,)+ X> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($boxed))
                    .field("default_locale", &self.default_locale)
                    .finish_non_exhaustive()
            }
        }

        impl<$($A,)+ X> $tr<$($A,)+ X> for $boxed<$($A,)+ X> {
            fn validate_with(
                &self,
                $($a: $A,)+
                locale: &$crate::message::Locale,
                group: &$crate::foundation::ConstraintGroup,
            ) -> $crate::foundation::Validated<X> {
                (self.validate)($($a,)+ locale, group)
            }

            fn default_locale(&self) -> $crate::message::Locale {
                self.default_locale.clone()
            }
        }

        #[doc = concat!(
            "A `Validator<", stringify!($holder), ">` paired with the mapper that builds the result."
        )]
        ///
        /// The mapper runs exactly once per successful call and never on a
        /// failed one.
        pub struct $default<$($A,)+ X> {
            validator: $crate::validator::Validator<$holder<$($A),+>>,
            mapper: ::std::sync::Arc<dyn Fn($($A),+) -> X + Send + Sync>,
        }

        impl<$($A: 'static,)+ X: 'static> $default<$($A,)+ X> {
            /// Pairs `validator` with `mapper`.
            pub fn new(
                validator: $crate::validator::Validator<$holder<$($A),+>>,
                mapper: impl Fn($($A),+) -> X + Send + Sync + 'static,
            ) -> Self {
                Self {
                    validator,
                    mapper: ::std::sync::Arc::new(mapper),
                }
            }

            /// The validator over the argument holder.
            pub fn validator(&self) -> &$crate::validator::Validator<$holder<$($A),+>> {
                &self.validator
            }

            /// Composes `f` after the mapper.
            pub fn and_then<Y: 'static>(
                self,
                f: impl Fn(X) -> Y + Send + Sync + 'static,
            ) -> $default<$($A,)+ Y> {
                let mapper = self.mapper;
                $default::new(self.validator, move |$($a),+| f(mapper($($a),+)))
            }

            /// Defers the mapper: the success value is a [`Supplier`] that
            /// runs the mapper on the validated inputs each time it is
            /// forced.
            ///
            /// [`Supplier`]: $crate::arguments::Supplier
            pub fn lazy(self) -> $boxed<$($A,)+ $crate::arguments::Supplier<X>>
            where
                $($A: Clone + Send + Sync,)+
            {
                let locale = self.validator.config().default_locale.clone();
                $boxed::new(locale, move |$($a,)+ locale, group| {
                    let args = $holder::new($($a),+);
                    let violations = self.validator.violations_with(&args, locale, group);
                    if !violations.is_empty() {
                        return $crate::foundation::Validated::Invalid(violations);
                    }
                    let $holder { $($field: $a),+ } = args;
                    let mapper = ::std::sync::Arc::clone(&self.mapper);
                    $crate::foundation::Validated::Valid($crate::arguments::Supplier::new(
                        move || mapper($($a.clone()),+),
                    ))
                })
            }
        }

        impl<$($A: 'static,)+ X: 'static> $tr<$($A,)+ X> for $default<$($A,)+ X> {
            fn validate_with(
                &self,
                $($a: $A,)+
                locale: &$crate::message::Locale,
                group: &$crate::foundation::ConstraintGroup,
            ) -> $crate::foundation::Validated<X> {
                let args = $holder::new($($a),+);
                let violations = self.validator.violations_with(&args, locale, group);
                if violations.is_empty() {
                    let $holder { $($field: $a),+ } = args;
                    $crate::foundation::Validated::Valid((self.mapper)($($a),+))
                } else {
                    $crate::foundation::Validated::Invalid(violations)
                }
            }

            fn default_locale(&self) -> $crate::message::Locale {
                self.validator.config().default_locale.clone()
            }
        }

        impl<$($A,)+ X> Clone for $default<$($A,)+ X> {
            fn clone(&self) -> Self {
                Self {
                    validator: self.validator.clone(),
                    mapper: ::std::sync::Arc::clone(&self.mapper),
                }
            }
        }

        impl<$($A,)+ X> ::std::fmt::Debug for $default<$($A,)+ X> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($default))
                    .field("validator", &self.validator)
                    .finish_non_exhaustive()
            }
        }

        impl<$($A: 'static),+> $crate::validator::Validator<$holder<$($A),+>> {
            /// Attaches the mapper producing the success value.
            pub fn apply<X: 'static>(
                self,
                mapper: impl Fn($($A),+) -> X + Send + Sync + 'static,
            ) -> $default<$($A,)+ X> {
                $default::new(self, mapper)
            }
        }
    };
}

// ============================================================================
// COMBINE MACRO
// ============================================================================

/// Generates `combineN`.
macro_rules! combine_validators {
    (
        $n:literal => $name:ident, $boxed:ident;
        $(($A:ident, $a:ident, $R:ident, $r:ident, $V:ident, $v:ident)),+
    ) => {
        #[doc = concat!("Combines ", $n, " one-argument validators into one ", $n, "-argument validator.")]
        ///
        /// Every validator runs; their violations are concatenated in argument
        /// order. `mapper` receives the individual results and runs only when
        /// all of them are valid.
        pub fn $name<$($A,)+ $($R,)+ $($V,)+ X, F>(
            $($v: $V,)+
            mapper: F,
        ) -> $boxed<$($A,)+ X>
        where
            $($V: Arguments1Validator<$A, $R> + 'static,)+
            F: Fn($($R),+) -> X + Send + Sync + 'static,
        {
            let locale = $crate::macros::first_locale!($($v),+);
            $boxed::new(locale, move |$($a,)+ locale, group| {
                let mut violations = $crate::foundation::ConstraintViolations::new();
                $(let $r = accumulate($v.validate_with($a, locale, group), &mut violations);)+
                match ($($r,)+) {
                    ($(Some($r),)+) => $crate::foundation::Validated::Valid(mapper($($r),+)),
                    _ => $crate::foundation::Validated::Invalid(violations),
                }
            })
        }
    };
}

/// Default locale of the first validator.
macro_rules! first_locale {
    ($first:ident $(, $rest:ident)*) => {
        $first.default_locale()
    };
}

pub(crate) use {args_pattern, args_tuple, arguments_validator, combine_validators, first_locale};
