use darling::ast::NestedMeta;
use darling::{Error, FromDeriveInput as _, FromMeta as _};
use proc_macro2::TokenStream;
use quote::format_ident;
use syn::ext::IdentExt as _;
use syn::{Data, Fields};

use crate::args::{
    AccessorField, FieldMeta, FieldOptionMeta, FlattenedField, OptionsArgs, OptionsMeta,
};

pub fn entry_point(input: syn::DeriveInput) -> darling::Result<TokenStream> {
    let meta = OptionsMeta::from_derive_input(&input)?;
    let crate_ = meta
        .crate_
        .unwrap_or_else(|| syn::parse_quote!(::options_model));

    let Data::Struct(data) = input.data else {
        let err = Error::custom("`Options` can only be derived for structs with named fields");
        return Err(err.with_span(&input.ident));
    };

    let Fields::Named(fields) = data.fields else {
        let err = Error::custom("`Options` can only be derived for structs with named fields");
        return Err(err.with_span(&input.ident));
    };

    let mut acc = Error::accumulator();

    let mut accessors = Vec::new();
    let mut flattened = Vec::new();

    for field in fields.named {
        let attrs: Vec<_> = field
            .attrs
            .into_iter()
            .map(|attr| NestedMeta::Meta(attr.meta))
            .collect();

        let Some(args) = acc.handle(FieldMeta::from_list(&attrs)) else {
            continue;
        };
        let args = FieldOptionMeta::merge(args.option);

        let Some(ident) = field.ident else {
            acc.push(Error::custom("all fields must have a name"));
            continue;
        };

        if args.flatten.is_present() {
            if args.conflicts_with_flatten() {
                let err =
                    Error::custom("`flatten` cannot be combined with other option attributes");
                acc.push(err.with_span(&ident));
                continue;
            }

            flattened.push(FlattenedField {
                ident,
                ty: field.ty,
            });
            continue;
        }

        if args.skip.is_present() || (args.skip_set.is_present() && args.skip_get.is_present()) {
            continue;
        }

        let name = match &args.rename {
            Some(rename) => rename.clone(),
            None => ident.unraw().to_string(),
        };

        let key = option_key(&name);
        if key.is_empty() {
            let err = Error::custom(format!(
                "the option name `{name}` contains no alphanumeric characters"
            ));
            acc.push(err.with_span(&ident));
            continue;
        }

        accessors.push(AccessorField {
            ident,
            name,
            key,
            args,
        });
    }

    accessors.sort_by(|a, b| a.key.cmp(&b.key));

    for pair in accessors.windows(2) {
        if let [a, b] = pair
            && a.key == b.key
        {
            let err = Error::custom(format!(
                "`{}` and `{}` normalize to the same option key `{}`",
                a.ident, b.ident, b.key
            ));
            acc.push(err.with_span(&b.ident));
        }
    }

    let args = OptionsArgs {
        ty_name: &input.ident,
        generics: &input.generics,
        internals_name: format_ident!("__{}_options_internals", input.ident),
        accessors,
        flattened,
        strict: meta.strict,
        crate_,
    };

    let internals = emit_internals(&args);
    let options_impl = emit_options_impl(&args);

    let errors = acc.finish().err().map(|e| e.write_errors());
    Ok(quote::quote! {
        #internals
        #options_impl
        #errors
    })
}

fn emit_internals(args: &OptionsArgs<'_>) -> TokenStream {
    let OptionsArgs {
        ty_name,
        generics,
        internals_name,
        accessors,
        crate_,
        ..
    } = args;

    let (impl_gen, ty_gen, where_clause) = generics.split_for_impl();
    let aug_where = augmented_where_clause(args);

    let field_methods = accessors.iter().map(|field| {
        let AccessorField { ident, name, args, .. } = field;

        let set = (!args.skip_set.is_present() && args.set_with.is_none()).then(|| {
            let set_ident = format_ident!("set_{}", ident.unraw());
            quote::quote! {
                fn #set_ident(
                    this: &mut #ty_name #ty_gen,
                    value: #crate_::private::serde_json::Value,
                ) -> ::std::result::Result<(), #crate_::Error> {
                    this.#ident = #crate_::private::from_value(#name, value)?;
                    ::std::result::Result::Ok(())
                }
            }
        });

        let get = (!args.skip_get.is_present() && args.get_with.is_none()).then(|| {
            let get_ident = format_ident!("get_{}", ident.unraw());
            quote::quote! {
                fn #get_ident(
                    this: &#ty_name #ty_gen,
                ) -> ::std::result::Result<#crate_::private::serde_json::Value, #crate_::Error> {
                    #crate_::private::to_value(#name, &this.#ident)
                }
            }
        });

        quote::quote! {
            #set
            #get
        }
    });

    quote::quote! {
        /// Not intended for use. Implementation detail of the `options_model` macro expansion.
        #[doc(hidden)]
        #[allow(non_camel_case_types, dead_code)]
        struct #internals_name #impl_gen (
            ::std::convert::Infallible,
            ::std::marker::PhantomData<#ty_name #ty_gen>,
        ) #where_clause;

        impl #impl_gen #internals_name #ty_gen #aug_where {
            #( #field_methods )*
        }
    }
}

fn emit_options_impl(args: &OptionsArgs<'_>) -> TokenStream {
    let OptionsArgs {
        ty_name,
        generics,
        internals_name,
        accessors,
        flattened,
        strict,
        crate_,
    } = args;

    let (impl_gen, ty_gen, _) = generics.split_for_impl();
    let turbo_fish = ty_gen.as_turbofish();
    let aug_where = augmented_where_clause(args);

    let accessor_entries = accessors.iter().map(|field| {
        let AccessorField {
            ident,
            name,
            key,
            args,
        } = field;

        let set = (!args.skip_set.is_present())
            .then(|| match &args.set_with {
                Some(path) => quote::quote! { #path },
                None => {
                    let set_ident = format_ident!("set_{}", ident.unraw());
                    quote::quote! { #internals_name #turbo_fish::#set_ident }
                },
            })
            .into_iter();

        let get = (!args.skip_get.is_present())
            .then(|| match &args.get_with {
                Some(path) => quote::quote! { #path },
                None => {
                    let get_ident = format_ident!("get_{}", ident.unraw());
                    quote::quote! { #internals_name #turbo_fish::#get_ident }
                },
            })
            .into_iter();

        quote::quote! {
            #crate_::FieldAccessor::new(#name, #key)
                #( .with_set(#set) )*
                #( .with_get(#get) )*
        }
    });

    let flattened_const = (!flattened.is_empty()).then(|| {
        let entries = flattened.iter().map(|field| {
            let ident = &field.ident;
            quote::quote! {
                #crate_::Flattened::new(
                    |this: &Self| &this.#ident,
                    |this: &mut Self| &mut this.#ident,
                )
            }
        });

        quote::quote! {
            const FLATTENED: &'static [#crate_::Flattened<Self>] = &[
                #( #entries, )*
            ];
        }
    });

    let strict_const = strict.map(|strict| {
        quote::quote! {
            const STRICT: bool = #strict;
        }
    });

    quote::quote! {
        #[automatically_derived]
        impl #impl_gen #crate_::Options for #ty_name #ty_gen #aug_where {
            const ACCESSORS: &'static [#crate_::FieldAccessor<Self>] = &[
                #( #accessor_entries, )*
            ];

            #flattened_const
            #strict_const
        }
    }
}

/// Adds the bounds the expansion itself relies on to the `where` clause.
fn augmented_where_clause(args: &OptionsArgs<'_>) -> syn::WhereClause {
    let OptionsArgs {
        generics,
        flattened,
        crate_,
        ..
    } = args;

    let (_, _, where_clause) = generics.split_for_impl();
    let mut where_clause = where_clause
        .cloned()
        .unwrap_or_else(|| syn::parse_quote!(where));

    for param in generics.type_params() {
        let ident = &param.ident;
        where_clause.predicates.push(syn::parse_quote! {
            #ident: #crate_::private::serde::Serialize
                + #crate_::private::serde::de::DeserializeOwned
                + 'static
        });
    }

    for field in flattened {
        let ty = &field.ty;
        where_clause
            .predicates
            .push(syn::parse_quote!(#ty: #crate_::Options));
    }

    where_clause
}

/// Mirrors the option key normalization in the `options_model` runtime.
fn option_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
