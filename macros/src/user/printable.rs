use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Path};

/// How the derived hook renders the value.
enum Strategy {
    /// Through `core::fmt::Display` (default).
    Display,
    /// Through `core::fmt::Debug`.
    Debug,
    /// Through a free function `fn(&Self, &mut Formatter) -> fmt::Result`.
    With(Path),
    /// Prints nothing.
    Empty,
}

fn parse_strategy(input: &DeriveInput) -> syn::Result<Strategy> {
    let mut strategy = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("printable")) {
        attr.parse_nested_meta(|meta| {
            let parsed = if meta.path.is_ident("debug") {
                Strategy::Debug
            } else if meta.path.is_ident("display") {
                Strategy::Display
            } else if meta.path.is_ident("empty") {
                Strategy::Empty
            } else if meta.path.is_ident("with") {
                let value = meta.value()?;
                // Accept both `with = path` and `with = "path"`
                if value.peek(syn::LitStr) {
                    let lit: syn::LitStr = value.parse()?;
                    Strategy::With(lit.parse()?)
                } else {
                    Strategy::With(value.parse()?)
                }
            } else {
                return Err(meta.error("expected one of `display`, `debug`, `empty`, `with = path`"));
            };

            if strategy.replace(parsed).is_some() {
                return Err(meta.error("conflicting `printable` strategies"));
            }
            Ok(())
        })?;
    }

    Ok(strategy.unwrap_or(Strategy::Display))
}

pub fn expand_derive_printable(input: DeriveInput) -> TokenStream2 {
    let strategy = match parse_strategy(&input) {
        Ok(s) => s,
        Err(e) => return e.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match strategy {
        Strategy::Display => quote! { ::core::fmt::Display::fmt(self, f) },
        Strategy::Debug => quote! { ::core::fmt::Debug::fmt(self, f) },
        Strategy::With(path) => quote! { #path(self, f) },
        Strategy::Empty => quote! {
            let _ = f;
            ::core::result::Result::Ok(())
        },
    };

    quote! {
        impl #impl_generics ::valsem::format::Printable for #ident #ty_generics #where_clause {
            #[inline]
            fn fmt_value(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #body
            }
        }
    }
}
