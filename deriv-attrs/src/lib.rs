mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields. The generated
/// `build_report` labels each span of the error with the matching entry of `labels`.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use deriv_attrs::ErrorKind;
/// use deriv_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "exponent is not a constant",
///     labels = ["expected a number here"],
///     note = "only `e` can be raised to an expression",
/// )]
/// pub struct NonConstantExponent;
///
/// let err = deriv_error::Error::new(vec![2..3], NonConstantExponent);
/// assert!(err.is::<NonConstantExponent>());
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The text of the labels that point to each span of the error, in order.       |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
/// | `note`      | Optional note with background on why the input was rejected.                 |
///
/// Each tag accepts an expression. `message`, `help` and `note` should evaluate to something
/// implementing [`ToString`], and `labels` to an iterable of such values. For structs with named
/// fields, the expression is evaluated with the members of the struct in scope, so they can be
/// used in the expression.
///
/// [`ErrorKind`]: https://docs.rs/deriv-error/latest/deriv_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
