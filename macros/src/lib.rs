use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Lit, Meta, Type};

/// Derive `envbind::EnvRecord` for a struct of named `String` fields
///
/// Field attributes:
/// - `#[field(env = "NAME")]` reads `NAME` instead of the field identifier.
///   An empty name is ignored.
/// - `#[field(doc = "...")]` sets the description used in generated docs.
///   Defaults to the field's `///` comment.
///
/// Struct attributes:
/// - `#[field(rename_all = "SCREAMING_SNAKE_CASE")]` (or `"UPPERCASE"`)
///   upper-cases identifiers of fields without an explicit `env`.
#[proc_macro_derive(EnvRecord, attributes(field))]
pub fn derive_env_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_record(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_record(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let rename = parse_struct_config(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvRecord only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvRecord only supports structs",
            ));
        }
    };

    let mut specs = Vec::new();
    let mut assigns = Vec::new();

    for field in fields {
        let field_name = match &field.ident {
            Some(ident) => ident,
            None => {
                return Err(syn::Error::new_spanned(field, "expected a named field"));
            }
        };

        if !is_string(&field.ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "EnvRecord fields must be of type String",
            ));
        }

        let config = parse_field_config(&field.attrs)?;
        let ident = field_name.unraw().to_string();

        let key = match config.env_var {
            Some(env) if !env.is_empty() => env,
            _ => rename.apply(&ident),
        };
        let description = config
            .description
            .unwrap_or_else(|| doc_comment(&field.attrs));

        specs.push(quote! {
            ::envbind::FieldSpec {
                field: #ident,
                key: #key,
                description: #description,
            }
        });
        assigns.push(quote! {
            #field_name: values.next().unwrap_or_default()
        });
    }

    Ok(quote! {
        impl #impl_generics ::envbind::EnvRecord for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::envbind::FieldSpec] = &[
                #(#specs),*
            ];

            #[allow(unused_mut, unused_variables)]
            fn from_values(
                values: ::std::vec::Vec<::std::string::String>,
            ) -> Self {
                let mut values = values.into_iter();
                Self {
                    #(#assigns),*
                }
            }
        }
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenameRule {
    None,
    Uppercase,
}

impl RenameRule {
    fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::None => ident.to_string(),
            RenameRule::Uppercase => ident.to_uppercase(),
        }
    }
}

#[derive(Debug, Default)]
struct FieldConfig {
    env_var: Option<String>,
    description: Option<String>,
}

/// Parse the struct-level #[field(rename_all = "...")]
fn parse_struct_config(attrs: &[Attribute]) -> syn::Result<RenameRule> {
    let mut rule = RenameRule::None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("field")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: syn::LitStr = meta.value()?.parse()?;
                rule = match value.value().as_str() {
                    "SCREAMING_SNAKE_CASE" | "UPPERCASE" => RenameRule::Uppercase,
                    other => {
                        return Err(syn::Error::new_spanned(
                            &value,
                            format!(
                                "unsupported rename_all rule `{}`, expected \"SCREAMING_SNAKE_CASE\" or \"UPPERCASE\"",
                                other
                            ),
                        ));
                    }
                };
                Ok(())
            } else {
                Err(meta.error("expected `rename_all = \"...\"` on the struct"))
            }
        })?;
    }

    Ok(rule)
}

/// Parse #[field(env = "X", doc = "Y")] on a field
fn parse_field_config(attrs: &[Attribute]) -> syn::Result<FieldConfig> {
    let mut config = FieldConfig::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("field")) {
        if !matches!(attr.meta, Meta::List(_)) {
            return Err(syn::Error::new_spanned(
                attr,
                "field attribute must be a list: #[field(env = \"...\")]",
            ));
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("env") {
                let value: syn::LitStr = meta.value()?.parse()?;
                config.env_var = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("doc") {
                let value: syn::LitStr = meta.value()?.parse()?;
                config.description = Some(value.value().trim().to_string());
                Ok(())
            } else {
                Err(meta.error("unknown field option, expected `env` or `doc`"))
            }
        })?;
    }

    Ok(config)
}

/// Join the `///` lines on a field into one description
fn doc_comment(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => Some(s.value().trim().to_string()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Accepts `String` under any path, e.g. `std::string::String`
fn is_string(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "String" && segment.arguments.is_empty())
            .unwrap_or(false),
        _ => false,
    }
}
