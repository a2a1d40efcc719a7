//! Validators over several independent inputs.
//!
//! `ArgumentsN` holds N inputs, `ArgumentsNValidator` validates them and
//! produces a value on success. The family is generated for N in 1..=16 and
//! behaves identically across arities.
//!
//! There are two ways to obtain one:
//!
//! - attach a mapper to a validator over the holder with
//!   [`Validator::apply`](crate::validator::Validator), giving a
//!   `DefaultArgumentsNValidator`
//! - join independent one-argument validators with `combineN`
//!
//! ```rust,ignore
//! let range = ValidatorBuilder::<Arguments2<i32, i32>>::new()
//!     .constraint("from", |a: &Arguments2<i32, i32>| &a.arg1, |c| c.greater_than_or_equal(0))
//!     .constraint("to", |a: &Arguments2<i32, i32>| &a.arg2, |c| c.less_than(100))
//!     .build()
//!     .apply(|from, to| from..to);
//!
//! let span = range.validate(3, 7);
//! ```

mod supplier;

pub use supplier::{MemoizedSupplier, Supplier};

use crate::foundation::{ConstraintGroup, ConstraintViolations, Validated};
use crate::macros::{arguments_validator, combine_validators};
use crate::message::Locale;
use crate::validator::{ApplicativeValidator, Validator};

/// A validator of one value, possibly producing a different type.
pub type ObjectValidator<T, X = T> = BoxedArguments1Validator<T, X>;

/// Moves the violations of `result` into `violations`.
fn accumulate<R>(result: Validated<R>, violations: &mut ConstraintViolations) -> Option<R> {
    match result {
        Validated::Valid(value) => Some(value),
        Validated::Invalid(found) => {
            violations.append(found);
            None
        }
    }
}

arguments_validator! {
    1 => Arguments1, Arguments1Validator, DefaultArguments1Validator, BoxedArguments1Validator;
    (A1, a1, arg1)
}

arguments_validator! {
    2 => Arguments2, Arguments2Validator, DefaultArguments2Validator, BoxedArguments2Validator;
    (A1, a1, arg1), (A2, a2, arg2)
}

arguments_validator! {
    3 => Arguments3, Arguments3Validator, DefaultArguments3Validator, BoxedArguments3Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3)
}

arguments_validator! {
    4 => Arguments4, Arguments4Validator, DefaultArguments4Validator, BoxedArguments4Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4)
}

arguments_validator! {
    5 => Arguments5, Arguments5Validator, DefaultArguments5Validator, BoxedArguments5Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5)
}

arguments_validator! {
    6 => Arguments6, Arguments6Validator, DefaultArguments6Validator, BoxedArguments6Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6)
}

arguments_validator! {
    7 => Arguments7, Arguments7Validator, DefaultArguments7Validator, BoxedArguments7Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7)
}

arguments_validator! {
    8 => Arguments8, Arguments8Validator, DefaultArguments8Validator, BoxedArguments8Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7), (A8, a8, arg8)
}

arguments_validator! {
    9 => Arguments9, Arguments9Validator, DefaultArguments9Validator, BoxedArguments9Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7), (A8, a8, arg8), (A9, a9, arg9)
}

arguments_validator! {
    10 => Arguments10, Arguments10Validator, DefaultArguments10Validator, BoxedArguments10Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7), (A8, a8, arg8), (A9, a9, arg9), (A10, a10, arg10)
}

arguments_validator! {
    11 => Arguments11, Arguments11Validator, DefaultArguments11Validator, BoxedArguments11Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7), (A8, a8, arg8), (A9, a9, arg9), (A10, a10, arg10), (A11, a11, arg11)
}

arguments_validator! {
    12 => Arguments12, Arguments12Validator, DefaultArguments12Validator, BoxedArguments12Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7), (A8, a8, arg8), (A9, a9, arg9), (A10, a10, arg10), (A11, a11, arg11), (A12, a12, arg12)
}

arguments_validator! {
    13 => Arguments13, Arguments13Validator, DefaultArguments13Validator, BoxedArguments13Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7), (A8, a8, arg8), (A9, a9, arg9), (A10, a10, arg10), (A11, a11, arg11), (A12, a12, arg12), (A13, a13, arg13)
}

arguments_validator! {
    14 => Arguments14, Arguments14Validator, DefaultArguments14Validator, BoxedArguments14Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7), (A8, a8, arg8), (A9, a9, arg9), (A10, a10, arg10), (A11, a11, arg11), (A12, a12, arg12), (A13, a13, arg13), (A14, a14, arg14)
}

arguments_validator! {
    15 => Arguments15, Arguments15Validator, DefaultArguments15Validator, BoxedArguments15Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7), (A8, a8, arg8), (A9, a9, arg9), (A10, a10, arg10), (A11, a11, arg11), (A12, a12, arg12), (A13, a13, arg13), (A14, a14, arg14), (A15, a15, arg15)
}

arguments_validator! {
    16 => Arguments16, Arguments16Validator, DefaultArguments16Validator, BoxedArguments16Validator;
    (A1, a1, arg1), (A2, a2, arg2), (A3, a3, arg3), (A4, a4, arg4), (A5, a5, arg5), (A6, a6, arg6), (A7, a7, arg7), (A8, a8, arg8), (A9, a9, arg9), (A10, a10, arg10), (A11, a11, arg11), (A12, a12, arg12), (A13, a13, arg13), (A14, a14, arg14), (A15, a15, arg15), (A16, a16, arg16)
}

combine_validators! {
    2 => combine2, BoxedArguments2Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2)
}

combine_validators! {
    3 => combine3, BoxedArguments3Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3)
}

combine_validators! {
    4 => combine4, BoxedArguments4Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4)
}

combine_validators! {
    5 => combine5, BoxedArguments5Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5)
}

combine_validators! {
    6 => combine6, BoxedArguments6Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6)
}

combine_validators! {
    7 => combine7, BoxedArguments7Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7)
}

combine_validators! {
    8 => combine8, BoxedArguments8Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7), (A8, a8, R8, r8, V8, v8)
}

combine_validators! {
    9 => combine9, BoxedArguments9Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7), (A8, a8, R8, r8, V8, v8), (A9, a9, R9, r9, V9, v9)
}

combine_validators! {
    10 => combine10, BoxedArguments10Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7), (A8, a8, R8, r8, V8, v8), (A9, a9, R9, r9, V9, v9), (A10, a10, R10, r10, V10, v10)
}

combine_validators! {
    11 => combine11, BoxedArguments11Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7), (A8, a8, R8, r8, V8, v8), (A9, a9, R9, r9, V9, v9), (A10, a10, R10, r10, V10, v10), (A11, a11, R11, r11, V11, v11)
}

combine_validators! {
    12 => combine12, BoxedArguments12Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7), (A8, a8, R8, r8, V8, v8), (A9, a9, R9, r9, V9, v9), (A10, a10, R10, r10, V10, v10), (A11, a11, R11, r11, V11, v11), (A12, a12, R12, r12, V12, v12)
}

combine_validators! {
    13 => combine13, BoxedArguments13Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7), (A8, a8, R8, r8, V8, v8), (A9, a9, R9, r9, V9, v9), (A10, a10, R10, r10, V10, v10), (A11, a11, R11, r11, V11, v11), (A12, a12, R12, r12, V12, v12), (A13, a13, R13, r13, V13, v13)
}

combine_validators! {
    14 => combine14, BoxedArguments14Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7), (A8, a8, R8, r8, V8, v8), (A9, a9, R9, r9, V9, v9), (A10, a10, R10, r10, V10, v10), (A11, a11, R11, r11, V11, v11), (A12, a12, R12, r12, V12, v12), (A13, a13, R13, r13, V13, v13), (A14, a14, R14, r14, V14, v14)
}

combine_validators! {
    15 => combine15, BoxedArguments15Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7), (A8, a8, R8, r8, V8, v8), (A9, a9, R9, r9, V9, v9), (A10, a10, R10, r10, V10, v10), (A11, a11, R11, r11, V11, v11), (A12, a12, R12, r12, V12, v12), (A13, a13, R13, r13, V13, v13), (A14, a14, R14, r14, V14, v14), (A15, a15, R15, r15, V15, v15)
}

combine_validators! {
    16 => combine16, BoxedArguments16Validator;
    (A1, a1, R1, r1, V1, v1), (A2, a2, R2, r2, V2, v2), (A3, a3, R3, r3, V3, v3), (A4, a4, R4, r4, V4, v4), (A5, a5, R5, r5, V5, v5), (A6, a6, R6, r6, V6, v6), (A7, a7, R7, r7, V7, v7), (A8, a8, R8, r8, V8, v8), (A9, a9, R9, r9, V9, v9), (A10, a10, R10, r10, V10, v10), (A11, a11, R11, r11, V11, v11), (A12, a12, R12, r12, V12, v12), (A13, a13, R13, r13, V13, v13), (A14, a14, R14, r14, V14, v14), (A15, a15, R15, r15, V15, v15), (A16, a16, R16, r16, V16, v16)
}

// ============================================================================
// PLAIN VALIDATORS AS ONE-ARGUMENT VALIDATORS
// ============================================================================

impl<T: 'static> Arguments1Validator<T, T> for Validator<T> {
    fn validate_with(&self, a1: T, locale: &Locale, group: &ConstraintGroup) -> Validated<T> {
        Validator::validate_with(self, a1, locale, group)
    }

    fn default_locale(&self) -> Locale {
        self.config().default_locale.clone()
    }
}

impl<T: 'static> Arguments1Validator<T, T> for ApplicativeValidator<T> {
    fn validate_with(&self, a1: T, locale: &Locale, group: &ConstraintGroup) -> Validated<T> {
        self.validator().validate_with(a1, locale, group)
    }

    fn default_locale(&self) -> Locale {
        self.validator().config().default_locale.clone()
    }
}
