//! `#[derive(Record)]` for queryparam.
//!
//! Generates the static `RecordSchema` and the slot accessor of a struct with
//! named fields. Field binding directives use the `query` attribute:
//!
//! - `#[query("key")]` binds the field to `key`;
//! - `#[query("-")]` skips the field, nested records included;
//! - `#[query("")]` or no attribute leaves leaf fields unbound, while nested
//!   records are still decoded.
//!
//! Only fields declared `pub` (or `pub(...)`) are assignable; a private field
//! makes decoding fail.

mod field;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, parse_macro_input, spanned::Spanned};

use crate::field::ParsedField;

#[proc_macro_derive(Record, attributes(query))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_record(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand_record(input: DeriveInput) -> Result<proc_macro2::TokenStream, Error> {
    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.ident.span(),
            "#[derive(Record)] does not support generic structs",
        ));
    }

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unit | Fields::Unnamed(_) => {
                return Err(Error::new(
                    input.ident.span(),
                    "#[derive(Record)] requires a struct with named fields",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(Error::new(
                data.enum_token.span(),
                "#[derive(Record)] can only be used on structs",
            ));
        }
        Data::Union(data) => {
            return Err(Error::new(
                data.union_token.span(),
                "#[derive(Record)] can only be used on structs",
            ));
        }
    };

    let fields = named
        .iter()
        .map(ParsedField::from_field)
        .collect::<Result<Vec<_>, _>>()?;

    let ident = &input.ident;
    let record_name = ident.to_string();
    let defs = fields.iter().map(ParsedField::field_def);
    let arms = fields.iter().enumerate().map(|(index, field)| {
        let slot = field.slot();
        quote!(#index => #slot,)
    });

    Ok(quote! {
        impl ::queryparam::RecordType for #ident {
            const SCHEMA: &'static ::queryparam::RecordSchema = {
                #[allow(unused_imports)]
                use ::queryparam::__private::NotRecord as _;

                const FIELDS: &[::queryparam::FieldDef] = &[#(#defs),*];
                const RECORD: ::queryparam::RecordSchema =
                    ::queryparam::RecordSchema::new(#record_name, FIELDS);
                &RECORD
            };
        }

        impl ::queryparam::Record for #ident {
            fn schema(&self) -> &'static ::queryparam::RecordSchema {
                <Self as ::queryparam::RecordType>::SCHEMA
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<::queryparam::Slot<'_>> {
                #[allow(unused_imports)]
                use ::queryparam::__private::NotRecord as _;

                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
