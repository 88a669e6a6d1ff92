//! Derive macro implementation used by `metra-core`.
//!
//! `metra-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit` and `crate::Ratio`, so it is intended to be used by `metra-core` (or by crates that expose an
//! identical crate-root API).
//!
//! Most users should depend on `metra` instead and use the predefined catalogs.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `crate::Unit for MyUnit`. Formatting of quantities is
//! generic over the unit and needs no generated code.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = SomeDim`: dimension marker type
//! - `scale = ...`: exact factor to the SI unit of the dimension, written as
//!   - an integer literal (`scale = 1000`),
//!   - a `(numerator, denominator)` pair (`scale = (254, 10_000)`), or
//!   - any other `const` expression of type `crate::Ratio`.
//!
//! Floating-point literals are rejected because they cannot state a scale exactly.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, ExprLit, Ident, Lit, LitStr, Token, Type,
};

/// Derive `crate::Unit` for a unit marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `scale`.
///
/// This macro is intended for use by `metra-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let scale = scale_tokens(&unit_attr.scale)?;

    Ok(quote! {
        impl #impl_generics crate::Unit for #name #ty_generics #where_clause {
            type Dim = #dimension;
            const SCALE: crate::Ratio = #scale;
            const SYMBOL: &'static str = #symbol;
        }
    })
}

/// Lowers the `scale` expression to a `crate::Ratio` constructor.
fn scale_tokens(scale: &Expr) -> syn::Result<TokenStream2> {
    match scale {
        Expr::Lit(ExprLit { lit: Lit::Int(int), .. }) => {
            if int.base10_parse::<i128>()? == 0 {
                return Err(syn::Error::new(int.span(), "unit scale must be non-zero"));
            }
            Ok(quote! { crate::Ratio::integer(#int) })
        }
        Expr::Lit(ExprLit { lit: Lit::Float(float), .. }) => Err(syn::Error::new(
            float.span(),
            "floating-point scales are not exact; use (numerator, denominator)",
        )),
        Expr::Tuple(tuple) => {
            if tuple.elems.len() != 2 {
                return Err(syn::Error::new_spanned(
                    tuple,
                    "scale pair must be (numerator, denominator)",
                ));
            }
            let num = &tuple.elems[0];
            let den = &tuple.elems[1];
            Ok(quote! { crate::Ratio::new(#num, #den) })
        }
        other => Ok(quote! { #other }),
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Type,
    scale: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Type> = None;
        let mut scale: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "scale" => {
                    scale = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let scale = scale
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `scale`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            scale,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        derive_unit_impl(input).unwrap().to_string()
    }

    fn expand_err(input: DeriveInput) -> String {
        derive_unit_impl(input).err().unwrap().to_string()
    }

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, scale = 1)]
            pub struct Metre;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Metre;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Length, scale = 1)]
            pub struct Metre;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", scale = 1)]
            pub struct Metre;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_scale() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length)]
            pub struct Metre;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `scale`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, scale = 1, ratio = 1.0)]
            pub struct Metre;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("unknown attribute `ratio`"));
    }

    #[test]
    fn test_derive_unit_impl_integer_scale() {
        let code = expand(parse_quote! {
            #[unit(symbol = "km", dimension = Length, scale = 1000)]
            pub struct Kilometre;
        });
        assert!(code.contains("impl crate :: Unit for Kilometre"));
        assert!(code.contains("const SCALE : crate :: Ratio = crate :: Ratio :: integer (1000)"));
        assert!(code.contains("const SYMBOL : & 'static str = \"km\""));
        assert!(code.contains("type Dim = Length"));
    }

    #[test]
    fn test_derive_unit_impl_pair_scale() {
        let code = expand(parse_quote! {
            #[unit(symbol = "in", dimension = Length, scale = (254, 10_000))]
            pub struct Inch;
        });
        assert!(code.contains("crate :: Ratio :: new (254 , 10_000)"));
    }

    #[test]
    fn test_derive_unit_impl_expression_scale_is_verbatim() {
        let code = expand(parse_quote! {
            #[unit(symbol = "ft^2", dimension = Area, scale = FOOT.mul(FOOT))]
            pub struct SquareFoot;
        });
        assert!(code.contains("const SCALE : crate :: Ratio = FOOT . mul (FOOT)"));
    }

    #[test]
    fn test_derive_unit_impl_path_dimension() {
        let code = expand(parse_quote! {
            #[unit(symbol = "m/s", dimension = crate::DivDim<Length, Time>, scale = 1)]
            pub struct MetrePerSecond;
        });
        assert!(code.contains("type Dim = crate :: DivDim < Length , Time >"));
    }

    #[test]
    fn test_derive_unit_impl_rejects_float_scale() {
        let err = expand_err(parse_quote! {
            #[unit(symbol = "in", dimension = Length, scale = 0.0254)]
            pub struct Inch;
        });
        assert!(err.contains("floating-point scales are not exact"));
    }

    #[test]
    fn test_derive_unit_impl_rejects_zero_scale() {
        let err = expand_err(parse_quote! {
            #[unit(symbol = "z", dimension = Length, scale = 0)]
            pub struct Zero;
        });
        assert!(err.contains("unit scale must be non-zero"));
    }

    #[test]
    fn test_derive_unit_impl_rejects_bad_pair() {
        let err = expand_err(parse_quote! {
            #[unit(symbol = "x", dimension = Length, scale = (1, 2, 3))]
            pub struct Odd;
        });
        assert!(err.contains("scale pair must be (numerator, denominator)"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "m", dimension = Length, scale = 1,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_unit_attribute_parse_duplicate_symbol() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            symbol = "m", symbol = "km", dimension = Length, scale = 1
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "km");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Metre;
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
