//! `#[derive(FhirSerde)]` for the Meridian FHIR model.
//!
//! Structs become complex types or resources: every named field is written
//! under its lowerCamelCase name, and the Rust type decides the cardinality.
//!
//! | field type        | cardinality |
//! |-------------------|-------------|
//! | `T`               | 1..1        |
//! | `Option<T>`       | 0..1        |
//! | `Vec<T>`          | 1..*        |
//! | `Option<Vec<T>>`  | 0..*        |
//!
//! Enums of single-field tuple variants become choice elements (`value[x]`):
//! the variant name is the type suffix appended to the field name.
//!
//! Attributes:
//! - `#[fhir_serde(resource = "Patient")]` on a struct marks a resource.
//! - `#[fhir_serde(rename = "...")]` on a field overrides its JSON name, on a
//!   variant its type suffix.
//!
//! Generated code refers to everything through absolute paths because the
//! model modules shadow prelude names such as `String`.

use heck::ToLowerCamelCase;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Attribute, Data, DataEnum, DataStruct, DeriveInput, Fields, GenericArgument, LitStr,
    PathArguments, Type, TypePath, parse_macro_input,
};

#[proc_macro_derive(FhirSerde, attributes(fhir_serde))]
pub fn fhir_serde_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = if !input.generics.params.is_empty() {
        Err(syn::Error::new_spanned(
            &input.generics,
            "FhirSerde cannot be derived for generic types",
        ))
    } else {
        match &input.data {
            Data::Struct(data) => expand_struct(&input, data),
            Data::Enum(data) => expand_choice(&input, data),
            Data::Union(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "FhirSerde cannot be derived for unions",
            )),
        }
    };

    expanded.unwrap_or_else(syn::Error::into_compile_error).into()
}

#[derive(Default)]
struct FhirSerdeAttrs {
    rename: Option<String>,
    resource: Option<String>,
}

fn parse_attrs(attrs: &[Attribute]) -> syn::Result<FhirSerdeAttrs> {
    let mut parsed = FhirSerdeAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("fhir_serde") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("resource") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.resource = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported fhir_serde attribute"))
            }
        })?;
    }
    Ok(parsed)
}

enum Shape {
    Required,
    Optional,
    List,
    OptionalList,
}

/// Returns the single type argument of `Wrapper<T>` when the last path segment is `wrapper`.
fn generic_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn shape_of(ty: &Type) -> Shape {
    match generic_arg(ty, "Option") {
        Some(inner) if generic_arg(inner, "Vec").is_some() => Shape::OptionalList,
        Some(_) => Shape::Optional,
        None if generic_arg(ty, "Vec").is_some() => Shape::List,
        None => Shape::Required,
    }
}

fn serde_impls(name: &syn::Ident) -> TokenStream2 {
    quote! {
        impl ::meridian_serde_support::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::meridian_serde_support::serde::Serializer,
            {
                ::meridian_serde_support::serialize_with(self, serializer)
            }
        }

        impl<'de> ::meridian_serde_support::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::meridian_serde_support::serde::Deserializer<'de>,
            {
                ::meridian_serde_support::deserialize_with(deserializer)
            }
        }
    }
}

fn expand_struct(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.to_string();
    let container = parse_attrs(&input.attrs)?;

    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            name,
            "FhirSerde structs must have named fields",
        ));
    };

    let mut writes = Vec::with_capacity(fields.named.len());
    let mut reads = Vec::with_capacity(fields.named.len());
    let mut idents = Vec::with_capacity(fields.named.len());

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = parse_attrs(&field.attrs)?;
        let json_name = attrs
            .rename
            .unwrap_or_else(|| ident.unraw().to_string().to_lower_camel_case());

        let (write, read) = match shape_of(&field.ty) {
            Shape::Required => (
                quote! { ::meridian_serde_support::write_field(&mut fhir_object, #json_name, &self.#ident)?; },
                quote! { ::meridian_serde_support::read_required(&mut fhir_object, #json_name)? },
            ),
            Shape::Optional => (
                quote! { ::meridian_serde_support::write_optional(&mut fhir_object, #json_name, &self.#ident)?; },
                quote! { ::meridian_serde_support::read_optional(&mut fhir_object, #json_name)? },
            ),
            Shape::List => (
                quote! { ::meridian_serde_support::write_list(&mut fhir_object, #json_name, self.#ident.as_slice())?; },
                quote! { ::meridian_serde_support::read_required_list(&mut fhir_object, #json_name)? },
            ),
            Shape::OptionalList => (
                quote! { ::meridian_serde_support::write_optional_list(&mut fhir_object, #json_name, self.#ident.as_deref())?; },
                quote! { ::meridian_serde_support::read_list(&mut fhir_object, #json_name)? },
            ),
        };
        writes.push(write);
        reads.push(read);
        idents.push(ident);
    }

    let (resource_write, resource_check, resource_impl, empty_check) = match &container.resource {
        Some(resource_type) => (
            quote! {
                fhir_object.insert(
                    ::std::string::String::from("resourceType"),
                    ::meridian_serde_support::serde_json::Value::String(
                        ::std::string::String::from(#resource_type),
                    ),
                );
            },
            quote! {
                ::meridian_serde_support::check_resource_type(&mut fhir_object, #resource_type)?;
            },
            quote! {
                impl ::meridian_serde_support::FhirResource for #name {
                    const RESOURCE_TYPE: &'static str = #resource_type;
                }
            },
            quote! {},
        ),
        // FHIR JSON has no empty objects; an element with no content is absent.
        None => (
            quote! {},
            quote! {},
            quote! {},
            quote! {
                if fhir_object.is_empty() {
                    return ::core::result::Result::Ok(::core::option::Option::None);
                }
            },
        ),
    };

    let serde = serde_impls(name);

    Ok(quote! {
        impl ::meridian_serde_support::FhirCodec for #name {
            fn encode_value(
                &self,
            ) -> ::meridian_serde_support::Result<
                ::core::option::Option<::meridian_serde_support::serde_json::Value>,
            > {
                let mut fhir_object = ::meridian_serde_support::Object::new();
                #resource_write
                #(#writes)*
                #empty_check
                ::core::result::Result::Ok(::core::option::Option::Some(
                    ::meridian_serde_support::serde_json::Value::Object(fhir_object),
                ))
            }

            fn decode_parts(
                value: ::core::option::Option<::meridian_serde_support::serde_json::Value>,
                _meta: ::core::option::Option<::meridian_serde_support::serde_json::Value>,
            ) -> ::meridian_serde_support::Result<Self> {
                let mut fhir_object = ::meridian_serde_support::expect_object(value, #name_str)?;
                #resource_check
                #(let #idents = #reads;)*
                ::core::result::Result::Ok(Self { #(#idents),* })
            }
        }

        #resource_impl

        #serde
    })
}

fn expand_choice(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.to_string();

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut suffixes = Vec::with_capacity(data.variants.len());
    let mut types = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        let Fields::Unnamed(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "choice variants must be single-field tuple variants",
            ));
        };
        if fields.unnamed.len() != 1 {
            return Err(syn::Error::new_spanned(
                variant,
                "choice variants must be single-field tuple variants",
            ));
        }
        let attrs = parse_attrs(&variant.attrs)?;
        suffixes.push(
            attrs
                .rename
                .unwrap_or_else(|| variant.ident.unraw().to_string()),
        );
        types.push(&fields.unnamed[0].ty);
        variants.push(&variant.ident);
    }

    Ok(quote! {
        impl ::meridian_serde_support::FhirChoice for #name {
            const TYPES: &'static [&'static str] = &[#(#suffixes),*];

            fn type_suffix(&self) -> &'static str {
                match self {
                    #(Self::#variants(_) => #suffixes,)*
                }
            }
        }

        impl ::meridian_serde_support::FhirCodec for #name {
            fn encode_value(
                &self,
            ) -> ::meridian_serde_support::Result<
                ::core::option::Option<::meridian_serde_support::serde_json::Value>,
            > {
                match self {
                    #(Self::#variants(inner) => ::meridian_serde_support::FhirCodec::encode_value(inner),)*
                }
            }

            fn encode_meta(
                &self,
            ) -> ::meridian_serde_support::Result<
                ::core::option::Option<::meridian_serde_support::serde_json::Value>,
            > {
                match self {
                    #(Self::#variants(inner) => ::meridian_serde_support::FhirCodec::encode_meta(inner),)*
                }
            }

            fn decode_parts(
                _value: ::core::option::Option<::meridian_serde_support::serde_json::Value>,
                _meta: ::core::option::Option<::meridian_serde_support::serde_json::Value>,
            ) -> ::meridian_serde_support::Result<Self> {
                ::core::result::Result::Err(::meridian_serde_support::CodecError::UntypedChoice(#name_str))
            }

            fn encode_field(
                &self,
                name: &str,
                object: &mut ::meridian_serde_support::Object,
            ) -> ::meridian_serde_support::Result<()> {
                let key = ::std::format!(
                    "{}{}",
                    name,
                    ::meridian_serde_support::FhirChoice::type_suffix(self)
                );
                match self {
                    #(Self::#variants(inner) => ::meridian_serde_support::FhirCodec::encode_field(inner, &key, object),)*
                }
            }

            fn decode_field(
                name: &str,
                object: &mut ::meridian_serde_support::Object,
            ) -> ::meridian_serde_support::Result<::core::option::Option<Self>> {
                let suffix = ::meridian_serde_support::select_choice(
                    object,
                    name,
                    <Self as ::meridian_serde_support::FhirChoice>::TYPES,
                )?;
                match suffix {
                    ::core::option::Option::None => ::core::result::Result::Ok(::core::option::Option::None),
                    #(::core::option::Option::Some(#suffixes) => {
                        let key = ::std::format!("{}{}", name, #suffixes);
                        <#types as ::meridian_serde_support::FhirCodec>::decode_field(&key, object)
                            .map(|inner| inner.map(Self::#variants))
                    })*
                    ::core::option::Option::Some(_) => ::core::result::Result::Err(
                        ::meridian_serde_support::CodecError::UntypedChoice(#name_str),
                    ),
                }
            }
        }
    })
}
