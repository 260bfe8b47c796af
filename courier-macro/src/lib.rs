/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
#![forbid(unsafe_code)]

//! Courier Macro Library
//!
//! Attribute macros that remove the derive boilerplate from Courier message and
//! actor types.
//!
//! ```ignore
//! #[courier_message]
//! pub struct Ping;
//!
//! #[courier_actor]
//! pub struct Echo {
//!     replies: usize,
//! }
//! ```

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, DeriveInput};

fn has_derive(input: &DeriveInput, trait_name: &str) -> bool {
    input.attrs.iter().any(|attr| {
        if attr.path().is_ident("derive") {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(trait_name) {
                    found = true;
                }
                Ok(())
            });
            found
        } else {
            false
        }
    })
}

/// Options parsed from `#[courier_actor(...)]`.
#[derive(Default)]
struct ActorOptions {
    /// Skip deriving `Default`.
    no_default: bool,
}

impl ActorOptions {
    fn parse(attr: &TokenStream) -> Self {
        let mut options = Self::default();
        for part in attr.to_string().split(',') {
            if part.trim() == "no_default" {
                options.no_default = true;
            }
        }
        options
    }
}

/// Turns a struct or enum into a Courier message.
///
/// Expands to `#[derive(Clone, Debug)]` (only the traits not already derived) and a
/// compile-time check that the type is `Send + Sync + 'static`, which is everything
/// the blanket `CourierMessage` implementation needs.
///
/// ```ignore
/// use courier_macro::courier_message;
///
/// #[courier_message]
/// pub struct Increment {
///     pub amount: u32,
/// }
/// ```
#[proc_macro_attribute]
pub fn courier_message(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut traits = Vec::new();
    if !has_derive(&input, "Clone") {
        traits.push(quote!(Clone));
    }
    if !has_derive(&input, "Debug") {
        traits.push(quote!(Debug));
    }
    let derives = if traits.is_empty() {
        quote!()
    } else {
        quote!(#[derive(#(#traits),*)])
    };

    let assert_ident = quote::format_ident!("_AssertCourierMessage_{}", name);

    let expanded = quote! {
        #derives
        #input

        #[doc(hidden)]
        #[allow(dead_code, non_camel_case_types, non_snake_case, clippy::needless_lifetimes)]
        const _: () = {
            fn #assert_ident #impl_generics () #where_clause {
                fn assert_bounds<T: Send + Sync + 'static>() {}
                assert_bounds::<#name #ty_generics>();
            }
        };
    };

    TokenStream::from(expanded)
}

/// Derives the boilerplate for a type used as actor state.
///
/// Expands to `#[derive(Default, Debug)]` (only what is missing) and a compile-time
/// check that the type is `Send + 'static`. Pass `no_default` when the type
/// provides its own `Default`.
///
/// ```ignore
/// use courier_macro::courier_actor;
///
/// #[courier_actor]
/// pub struct Counter {
///     count: usize,
/// }
/// ```
#[proc_macro_attribute]
pub fn courier_actor(attr: TokenStream, item: TokenStream) -> TokenStream {
    let options = ActorOptions::parse(&attr);
    let input = parse_macro_input!(item as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut traits = Vec::new();
    if !options.no_default && !has_derive(&input, "Default") {
        traits.push(quote!(Default));
    }
    if !has_derive(&input, "Debug") {
        traits.push(quote!(Debug));
    }
    let derives = if traits.is_empty() {
        quote!()
    } else {
        quote!(#[derive(#(#traits),*)])
    };

    let assert_ident = quote::format_ident!("_AssertCourierActor_{}", name);

    let expanded = quote! {
        #derives
        #input

        #[doc(hidden)]
        #[allow(dead_code, non_camel_case_types, non_snake_case, clippy::needless_lifetimes)]
        const _: () = {
            fn #assert_ident #impl_generics () #where_clause {
                fn assert_bounds<T: Send + 'static>() {}
                assert_bounds::<#name #ty_generics>();
            }
        };
    };

    TokenStream::from(expanded)
}
