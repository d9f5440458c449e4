use darling::{ast::Data, util::Ignored, FromDeriveInput, FromField};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{ext::IdentExt, parse_quote, DeriveInput, Error, Generics, Result as SynResult};

/// Matches the input from deriving the macro on a record.
#[derive(FromDeriveInput)]
#[darling(attributes(candidate), supports(struct_named))]
struct CandidatesInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, CandidateField>,
}

#[derive(FromField)]
#[darling(attributes(candidate))]
struct CandidateField {
    ident: Option<Ident>,
    #[darling(default)]
    rename: Option<String>,
    #[darling(default)]
    skip: bool,
}

pub fn candidates_impl(input: DeriveInput) -> SynResult<TokenStream> {
    let CandidatesInput {
        ident,
        mut generics,
        data,
    } = CandidatesInput::from_derive_input(&input)?;

    let fields = data
        .take_struct()
        .ok_or_else(|| Error::new(ident.span(), "can only derive on structs with named fields"))?;

    let mut names: Vec<String> = Vec::new();
    let mut members = TokenStream::new();

    for field in fields.fields.into_iter().filter(|f| !f.skip) {
        let field_ident = field
            .ident
            .ok_or_else(|| Error::new(ident.span(), "can only derive on structs with named fields"))?;

        let name = field.rename.unwrap_or_else(|| field_ident.unraw().to_string());

        if names.contains(&name) {
            return Err(Error::new(field_ident.span(), format!("duplicate member name \"{name}\"")));
        }

        members.extend(quote! {
            ::genson::Member {
                name: #name,
                is_zero: |record: &Self| ::genson::IsZero::is_zero(&record.#field_ident),
                encode: |record: &Self| ::genson::__private::encode_member(&record.#field_ident),
                decode: |record: &mut Self, value: &::genson::__private::Value| {
                    ::genson::__private::decode_member(&mut record.#field_ident, value)
                },
            },
        });

        names.push(name);
    }

    if names.is_empty() {
        return Err(Error::new(ident.span(), "expecting at least one member"));
    }

    // Every type parameter may end up as a member type.
    let type_params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for param in type_params {
        where_clause.predicates.push(parse_quote! {
            #param: ::genson::IsZero
                + ::genson::__private::Serialize
                + ::genson::__private::DeserializeOwned
                + 'static
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::genson::Candidates for #ident #ty_generics #where_clause {
            const MEMBERS: &'static [::genson::Member<Self>] = &[#members];
        }
    };

    Ok(expanded)
}
