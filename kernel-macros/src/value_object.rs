use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Generics, Ident, Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[value_object] 宏实现
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if cfg.derive_debug {
        required.insert(0, syn::parse_quote!(Debug));
    }

    let (ident, generics) = match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            (st.ident.clone(), st.generics.clone())
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            (en.ident.clone(), en.generics.clone())
        }
        other => {
            return syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
                .to_compile_error()
                .into();
        }
    };

    if cfg.validated {
        return TokenStream::from(quote! { #input });
    }

    let trait_impl = infallible_impl(&ident, &generics);
    TokenStream::from(quote! {
        #input
        #trait_impl
    })
}

// 无额外不变量的值对象：校验恒成功
fn infallible_impl(ident: &Ident, generics: &Generics) -> proc_macro2::TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    quote! {
        impl #impl_generics ::kernel_domain::value_object::ValueObject for #ident #ty_generics #where_clause {
            type Error = ::std::convert::Infallible;

            fn validate(&self) -> ::std::result::Result<(), Self::Error> {
                ::std::result::Result::Ok(())
            }
        }
    }
}

// -------- parsing --------

struct ValueObjectAttrConfig {
    derive_debug: bool,
    validated: bool,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut derive_debug: Option<bool> = None;
        let mut validated = false;

        let elems: Punctuated<ValueObjectAttrElem, Token![,]> =
            Punctuated::parse_terminated(input)?;

        for elem in elems {
            match elem {
                ValueObjectAttrElem::Debug(b) => {
                    if derive_debug.replace(b).is_some() {
                        return Err(syn::Error::new(
                            proc_macro2::Span::call_site(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                }
                ValueObjectAttrElem::Validated(span) => {
                    if validated {
                        return Err(syn::Error::new(span, "duplicate key 'validated' in attribute"));
                    }
                    validated = true;
                }
            }
        }

        Ok(Self {
            derive_debug: derive_debug.unwrap_or(true),
            validated,
        })
    }
}

enum ValueObjectAttrElem {
    Debug(bool),
    Validated(proc_macro2::Span),
}

impl Parse for ValueObjectAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        if key == "validated" {
            return Ok(Self::Validated(key.span()));
        }
        if key != "debug" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'debug' or 'validated'",
            ));
        }

        let _eq: Token![=] = input.parse()?;
        match input.parse::<syn::Expr>()? {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Bool(b),
                ..
            }) => Ok(Self::Debug(b.value())),
            other => Err(syn::Error::new(
                other.span(),
                "expected boolean literal for 'debug'",
            )),
        }
    }
}
