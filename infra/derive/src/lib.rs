#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the workspace. For now this is the
//! `#[p2h_error]` attribute that every library error enum is declared with.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a context-carrying error type.
///
/// # Features
///
/// * **Automatic Derives**: Injects `Debug` and `thiserror::Error` unless already derived.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants made of exactly a
///   `source` and a `context` field, so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. Variants wrapping another error (a field named `source`, or marked `#[source]`/`#[from]`)
///    must also have a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use p2h_derive::p2h_error;
/// use std::borrow::Cow;
///
/// #[p2h_error]
/// pub enum FetchError {
///     #[error("Request failed{}: {source}", format_context(.context))]
///     Request { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// async fn fetch(client: &reqwest::Client) -> Result<String, FetchError> {
///     let res = client.get("https://example.com").send().await.context("Fetching page")?;
///     res.text().await.map_err(FetchError::from)
/// }
/// ```
#[proc_macro_attribute]
pub fn p2h_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
