//! Per-field parsing: binding directive, visibility and kind classification.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Field, GenericArgument, Ident, LitStr, PathArguments, Result, Type,
    Visibility, ext::IdentExt, spanned::Spanned,
};

const ATTR: &str = "query";

const INT_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Bool,
    Int,
    Text,
}

#[derive(Debug, Clone)]
pub enum TypeClass {
    Scalar(Scalar),
    List(Scalar),
    /// Any other path type: a nested record if it implements `RecordType`,
    /// unsupported otherwise. Carries the declared type for the latter.
    Path(String),
    Unsupported(String),
}

#[derive(Debug, Clone)]
pub enum BindingAttr {
    Key(String),
    Skip,
    Unbound,
}

pub struct ParsedField {
    pub ident: Ident,
    pub name: String,
    pub ty: Type,
    pub class: TypeClass,
    pub binding: BindingAttr,
    pub assignable: bool,
}

impl ParsedField {
    pub fn from_field(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "Record requires named fields"))?;
        let name = ident.unraw().to_string();

        Ok(Self {
            name,
            ty: field.ty.clone(),
            class: classify_type(&field.ty),
            binding: parse_binding(&field.attrs)?,
            assignable: !matches!(field.vis, Visibility::Inherited),
            ident,
        })
    }

    /// `FieldDef` constructor expression for the generated schema.
    pub fn field_def(&self) -> TokenStream {
        let name = &self.name;
        let kind = self.kind_tokens();
        let binding = match &self.binding {
            BindingAttr::Key(key) => quote!(::queryparam::Binding::Key(#key)),
            BindingAttr::Skip => quote!(::queryparam::Binding::Skip),
            BindingAttr::Unbound => quote!(::queryparam::Binding::Unbound),
        };
        let def = quote!(::queryparam::FieldDef::new(#name, #kind, #binding));
        if self.assignable {
            def
        } else {
            quote!(#def.read_only())
        }
    }

    /// `Slot` expression borrowing this field from `self`.
    pub fn slot(&self) -> TokenStream {
        let ident = &self.ident;
        let ty = &self.ty;
        if !self.assignable {
            return quote!(::core::option::Option::None);
        }
        let slot = match &self.class {
            TypeClass::Scalar(Scalar::Bool) => quote!(::queryparam::Slot::Bool(&mut self.#ident)),
            TypeClass::Scalar(Scalar::Int) => quote!(::queryparam::Slot::Int(&mut self.#ident)),
            TypeClass::Scalar(Scalar::Text) => quote!(::queryparam::Slot::Text(&mut self.#ident)),
            TypeClass::List(Scalar::Bool) => {
                quote!(::queryparam::Slot::BoolList(&mut self.#ident))
            }
            TypeClass::List(Scalar::Int) => quote!(::queryparam::Slot::IntList(&mut self.#ident)),
            TypeClass::List(Scalar::Text) => {
                quote!(::queryparam::Slot::TextList(&mut self.#ident))
            }
            TypeClass::Path(_) => {
                quote!(<::queryparam::__private::RecordOf<#ty>>::slot(&mut self.#ident))
            }
            TypeClass::Unsupported(_) => quote!(::queryparam::Slot::Opaque),
        };
        quote!(::core::option::Option::Some(#slot))
    }

    fn kind_tokens(&self) -> TokenStream {
        match &self.class {
            TypeClass::Scalar(scalar) => {
                let scalar = scalar_tokens(*scalar);
                quote!(::queryparam::FieldKind::Scalar(#scalar))
            }
            TypeClass::List(scalar) => {
                let scalar = scalar_tokens(*scalar);
                quote!(::queryparam::FieldKind::List(#scalar))
            }
            TypeClass::Path(declared) => {
                let ty = &self.ty;
                quote!(match <::queryparam::__private::RecordOf<#ty>>::SCHEMA {
                    ::core::option::Option::Some(schema) => ::queryparam::FieldKind::Record(schema),
                    ::core::option::Option::None => ::queryparam::FieldKind::Unsupported(#declared),
                })
            }
            TypeClass::Unsupported(declared) => {
                quote!(::queryparam::FieldKind::Unsupported(#declared))
            }
        }
    }
}

fn scalar_tokens(scalar: Scalar) -> TokenStream {
    match scalar {
        Scalar::Bool => quote!(::queryparam::ScalarKind::Bool),
        Scalar::Int => quote!(::queryparam::ScalarKind::Int),
        Scalar::Text => quote!(::queryparam::ScalarKind::Text),
    }
}

fn parse_binding(attrs: &[Attribute]) -> Result<BindingAttr> {
    let mut found: Option<LitStr> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        if found.is_some() {
            return Err(Error::new(
                attr.path().span(),
                "duplicate #[query(...)] attribute on field",
            ));
        }
        let tag: LitStr = attr.parse_args().map_err(|e| {
            Error::new(
                e.span(),
                "expected #[query(\"key\")], #[query(\"-\")] or #[query(\"\")]",
            )
        })?;
        found = Some(tag);
    }

    Ok(match found {
        None => BindingAttr::Unbound,
        Some(tag) => match tag.value().as_str() {
            "" => BindingAttr::Unbound,
            "-" => BindingAttr::Skip,
            key => BindingAttr::Key(key.to_string()),
        },
    })
}

/// Classify a field type by its syntax.
///
/// Path types that are neither scalars nor scalar lists are resolved by the
/// compiler: records nest, anything else is unsupported.
pub fn classify_type(ty: &Type) -> TypeClass {
    match ty {
        Type::Paren(inner) => classify_type(&inner.elem),
        Type::Group(inner) => classify_type(&inner.elem),
        Type::Path(path) if path.qself.is_none() => {
            let Some(segment) = path.path.segments.last() else {
                return unsupported(ty);
            };
            let ident = segment.ident.to_string();

            if let Some(scalar) = scalar_of(&ident, &segment.arguments) {
                return TypeClass::Scalar(scalar);
            }
            if ident == "Vec" {
                return match single_type_arg(&segment.arguments).map(classify_type) {
                    Some(TypeClass::Scalar(scalar)) => TypeClass::List(scalar),
                    _ => unsupported(ty),
                };
            }
            TypeClass::Path(declared_name(ty))
        }
        _ => unsupported(ty),
    }
}

fn scalar_of(ident: &str, arguments: &PathArguments) -> Option<Scalar> {
    if !matches!(arguments, PathArguments::None) {
        return None;
    }
    match ident {
        "bool" => Some(Scalar::Bool),
        "String" => Some(Scalar::Text),
        int if INT_TYPES.contains(&int) => Some(Scalar::Int),
        _ => None,
    }
}

fn single_type_arg(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first() {
        Some(GenericArgument::Type(ty)) => Some(ty),
        _ => None,
    }
}

fn unsupported(ty: &Type) -> TypeClass {
    TypeClass::Unsupported(declared_name(ty))
}

fn declared_name(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}
