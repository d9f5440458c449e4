use darling::{ast::Data, util::Ignored, FromDeriveInput, FromField};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{parse_quote, DeriveInput, Error, Generics, Index, Member, Result as SynResult};

#[derive(FromDeriveInput)]
#[darling(supports(struct_any))]
struct IsZeroInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, IsZeroField>,
}

#[derive(FromField)]
struct IsZeroField {
    ident: Option<Ident>,
}

pub fn is_zero_impl(input: DeriveInput) -> SynResult<TokenStream> {
    let IsZeroInput {
        ident,
        mut generics,
        data,
    } = IsZeroInput::from_derive_input(&input)?;

    let fields = data
        .take_struct()
        .ok_or_else(|| Error::new(ident.span(), "can only derive on structs"))?;

    // Tuple fields are accessed by position.
    let accessors = fields
        .fields
        .into_iter()
        .enumerate()
        .map(|(idx, field)| match field.ident {
            Some(ident) => Member::Named(ident),
            None => Member::Unnamed(Index::from(idx)),
        });

    let type_params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for param in type_params {
        where_clause.predicates.push(parse_quote!(#param: ::genson::IsZero));
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::genson::IsZero for #ident #ty_generics #where_clause {
            fn is_zero(&self) -> bool {
                true #(&& ::genson::IsZero::is_zero(&self.#accessors))*
            }
        }
    };

    Ok(expanded)
}
