use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, Index, LitInt, LitStr, Result, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
};

pub(crate) fn expand_sentence(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`Sentence` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`Sentence` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let descriptors = fields.iter().map(|field| {
        let name = field.name.unraw().to_string();

        match &field.tag {
            FieldTag::Checksum => quote! {
                ::bosun::schema::FieldDescriptor::checksum(#name)
            },
            tag => {
                let position = &field.position;

                let tag = match tag {
                    FieldTag::Literal(text) => quote! {
                        ::bosun::schema::Tag::Type(::bosun::schema::TypeMatcher::literal(#text))
                    },
                    FieldTag::Pattern(expr) => quote! {
                        ::bosun::schema::Tag::Type(::bosun::schema::TypeMatcher::pattern(#expr)?)
                    },
                    FieldTag::Number => quote! { ::bosun::schema::Tag::Number },
                    FieldTag::Text => quote! { ::bosun::schema::Tag::Text },
                    FieldTag::LatLon => quote! { ::bosun::schema::Tag::LatLon },
                    FieldTag::Date => quote! { ::bosun::schema::Tag::Date },
                    FieldTag::Time => quote! { ::bosun::schema::Tag::Time },
                    FieldTag::Checksum => unreachable!(),
                };

                quote! {
                    ::bosun::schema::FieldDescriptor::at(#position, #name, #tag)
                }
            }
        }
    });

    let slots = fields.iter().enumerate().map(|(index, field)| {
        let index = Index::from(index);
        let name = &field.name;

        quote! {
            #index => ::core::option::Option::Some(::bosun::convert::AsSlot::as_slot(&mut self.#name))
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::bosun::Sentence for #name #ty_generics #where_clause {
            fn schema(
                &self,
            ) -> ::core::result::Result<&'static ::bosun::schema::Schema, ::bosun::schema::SchemaError> {
                static SCHEMA: ::std::sync::OnceLock<
                    ::core::result::Result<::bosun::schema::Schema, ::bosun::schema::SchemaError>,
                > = ::std::sync::OnceLock::new();

                SCHEMA
                    .get_or_init(|| -> ::core::result::Result<
                        ::bosun::schema::Schema,
                        ::bosun::schema::SchemaError,
                    > {
                        ::bosun::schema::Schema::new(::std::vec![#(#descriptors),*])
                    })
                    .as_ref()
                    .map_err(::core::clone::Clone::clone)
            }

            fn slot(&mut self, index: usize) -> ::core::option::Option<::bosun::convert::Slot<'_>> {
                match index {
                    #(#slots,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    position: Option<LitInt>,
    tag: FieldTag,
}

#[derive(Debug)]
enum FieldTag {
    Literal(LitStr),
    Pattern(LitStr),
    Number,
    Text,
    LatLon,
    Date,
    Time,
    Checksum,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("nmea")) else {
            return Ok(None);
        };

        let FieldAttribute { position, tag } = attr.meta.require_list()?.parse_args()?;

        Ok(Some(Self {
            name,
            position,
            tag,
        }))
    }
}

#[derive(Debug)]
struct FieldAttribute {
    position: Option<LitInt>,
    tag: FieldTag,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let position = if input.peek(LitInt) {
            let position = input.parse::<LitInt>()?;
            position.base10_parse::<usize>()?;
            input.parse::<Token![,]>()?;
            Some(position)
        } else {
            None
        };

        let ident = input.parse::<Ident>()?;

        let tag = match ident.to_string().as_str() {
            "sentence" => {
                input.parse::<Token![=]>()?;
                FieldTag::Literal(input.parse()?)
            }
            "pattern" => {
                input.parse::<Token![=]>()?;
                FieldTag::Pattern(input.parse()?)
            }
            "number" => FieldTag::Number,
            "string" => FieldTag::Text,
            "latlon" => FieldTag::LatLon,
            "date" => FieldTag::Date,
            "time" => FieldTag::Time,
            "checksum" => FieldTag::Checksum,
            _ => Err(Error::new_spanned(
                &ident,
                "Field tag must be one of `sentence = \"..\"`, `pattern = \"..\"`, `number`, \
                 `string`, `latlon`, `date`, `time` or `checksum`.",
            ))?,
        };

        match (&tag, &position) {
            (FieldTag::Checksum, Some(position)) => Err(Error::new_spanned(
                position,
                "A `checksum` field does not read a token, and takes no position.",
            ))?,
            (FieldTag::Checksum, None) | (_, Some(_)) => {}
            (_, None) => Err(Error::new_spanned(
                &ident,
                "Field must begin with its token position.",
            ))?,
        }

        if !input.is_empty() {
            Err(input.error("Unexpected tokens after field tag."))?;
        }

        Ok(Self { position, tag })
    }
}
