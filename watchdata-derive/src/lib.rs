use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that generates sheet column metadata and cell access from struct fields.
///
/// For each field, extracts:
/// - Header name (respects #[serde(rename = "...")])
/// - Description (from doc comments)
///
/// Generates an implementation of `crate::core::SheetRecord`, whose `columns()`
/// lists the fields in declaration order and whose `cells()` borrows the field
/// values in that same order. Every field must be `AsRef<str>`.
#[proc_macro_derive(SheetRecord, attributes(serde))]
pub fn derive_sheet_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "SheetRecord only supports named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "SheetRecord only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let idents: Vec<_> = fields.iter().filter_map(|field| field.ident.clone()).collect();

    let column_entries = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?.to_string();
        let header = get_serde_rename(&field.attrs).unwrap_or(field_name);
        let description = get_doc_comment(&field.attrs);
        Some(quote! {
            crate::core::Column {
                name: #header,
                description: #description,
            }
        })
    });

    let expanded = quote! {
        impl crate::core::SheetRecord for #name {
            fn columns() -> &'static [crate::core::Column] {
                static COLUMNS: &[crate::core::Column] = &[
                    #(#column_entries),*
                ];
                COLUMNS
            }

            fn cells(&self) -> Vec<&str> {
                vec![
                    #(::core::convert::AsRef::<str>::as_ref(&self.#idents)),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        let mut rename = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if let Lit::Str(lit) = meta.value()?.parse::<Lit>()? {
                    rename = Some(lit.value());
                }
            } else if meta.input.peek(syn::Token![=]) {
                // skip values of unrelated keys such as `default = "..."`
                meta.value()?.parse::<Lit>()?;
            }
            Ok(())
        });
        if rename.is_some() {
            return rename;
        }
    }
    None
}

fn get_doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}
