// Boolean expression parsing and probe generation for concept constraints

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Concept(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Concept(ty))
    }
}

// =============================================================================
// Concept Resolution
// =============================================================================

/// Concepts defined in `valsem::concepts`, addressable by bare name.
const CONCEPTS: &[&str] = &[
    "Movable",
    "Copyable",
    "Semiregular",
    "EqualityComparable",
    "Regular",
    "Adaptable",
];

/// Resolve a bare concept name to its absolute path.
///
/// Anything else (`Copy`, `Send`, `my_mod::MyTrait`) is used as written.
fn resolve_concept(ty: &Type) -> TokenStream {
    let name = quote!(#ty).to_string();
    match name.as_str() {
        "Printable" => quote! { ::valsem::format::Printable },
        n if CONCEPTS.contains(&n) => {
            let ident = syn::Ident::new(n, proc_macro2::Span::call_site());
            quote! { ::valsem::concepts::#ident }
        }
        _ => quote! { #ty },
    }
}

// =============================================================================
// Probe Generation
// =============================================================================

/// Generate a const-evaluable `bool` for `expr` applied to `ty`.
///
/// Every atom becomes its own probe; operators combine the probe results, so
/// `!X` is the negation of "`ty` implements `X`".
pub fn generate_check(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Concept(concept) => generate_single_probe(&resolve_concept(concept), ty),
        BoolExpr::And(lhs, rhs) => {
            let l = generate_check(lhs, ty);
            let r = generate_check(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_check(lhs, ty);
            let r = generate_check(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_check(operand, ty);
            quote! { (!#o) }
        }
    }
}

/// Generate a single probe for one trait bound
fn generate_single_probe(bound: &TokenStream, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #bound> __Probe<X> {
                #[allow(dead_code)]
                const VAL: bool = true;
            }
            __Probe::<#ty>::VAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(expr: &str) -> String {
        let parsed: BoolExpr = syn::parse_str(expr).unwrap();
        to_string(&parsed)
    }

    fn to_string(expr: &BoolExpr) -> String {
        match expr {
            BoolExpr::Concept(ty) => quote!(#ty).to_string(),
            BoolExpr::And(l, r) => format!("({} & {})", to_string(l), to_string(r)),
            BoolExpr::Or(l, r) => format!("({} | {})", to_string(l), to_string(r)),
            BoolExpr::Not(o) => format!("!{}", to_string(o)),
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(render("A | B & C"), "(A | (B & C))");
        assert_eq!(render("!A & B"), "(!A & B)");
        assert_eq!(render("!(A | B)"), "!(A | B)");
    }

    #[test]
    fn test_concept_resolution() {
        let ty: Type = syn::parse_str("Regular").unwrap();
        assert_eq!(resolve_concept(&ty).to_string(), ":: valsem :: concepts :: Regular");

        let ty: Type = syn::parse_str("Printable").unwrap();
        assert_eq!(resolve_concept(&ty).to_string(), ":: valsem :: format :: Printable");

        let ty: Type = syn::parse_str("Send").unwrap();
        assert_eq!(resolve_concept(&ty).to_string(), "Send");
    }
}
