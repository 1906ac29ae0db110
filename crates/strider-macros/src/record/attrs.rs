//! Attribute parsing for the Record derive macro.
//!
//! Parses the `#[record(...)]` field attributes:
//!
//! - `skip` - the field is not exposed
//! - `rename = "..."` - the field is exposed under another name
//! - `dynamic` - unmatched names are looked up in this field

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[record(...)]`.
#[derive(Debug, Clone)]
pub struct RecordAttr {
    /// Hide this field from selectors.
    pub skip: bool,
    /// Name the field is selected by (default: field name).
    pub rename: Option<String>,
    /// Resolve names not matched by any other field through this one.
    pub dynamic: bool,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for RecordAttr {
    fn default() -> Self {
        RecordAttr {
            skip: false,
            rename: None,
            dynamic: false,
            span: Span::call_site(),
        }
    }
}

impl Parse for RecordAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = RecordAttr {
            span: input.span(),
            ..RecordAttr::default()
        };

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => attr.skip = true,
                Meta::Path(p) if p.is_ident("dynamic") => attr.dynamic = true,

                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.rename = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown record attribute. Expected: skip, dynamic, or rename = \"...\"",
                    ));
                }
            }
        }

        if attr.dynamic && (attr.skip || attr.rename.is_some()) {
            return Err(Error::new(
                attr.span,
                "dynamic cannot be combined with skip or rename",
            ));
        }

        Ok(attr)
    }
}

/// Extract `#[record(...)]` attributes from a field's attributes.
pub fn parse_record_attrs(attrs: &[Attribute]) -> Result<RecordAttr> {
    for attr in attrs {
        if attr.path().is_ident("record") {
            return attr.parse_args::<RecordAttr>();
        }
    }
    Ok(RecordAttr::default())
}
