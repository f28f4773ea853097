use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use crate::common::{generate_check, BoolExpr};

/// One `Type: Expr` clause.
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// Comma-separated clauses; all of them must hold.
pub struct SatisfiesInput {
    pub checks: Vec<TypeCheck>,
}

impl Parse for SatisfiesInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut checks = Vec::new();

        // First clause is required
        checks.push(input.parse()?);

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            checks.push(input.parse()?);
        }

        Ok(SatisfiesInput { checks })
    }
}

pub fn expand_satisfies(input: SatisfiesInput) -> TokenStream2 {
    let clauses = input.checks.iter().map(|check| generate_check(&check.expr, &check.ty));

    quote! {
        {
            true #( && #clauses )*
        }
    }
}
