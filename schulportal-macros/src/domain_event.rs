use crate::utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[domain_event] 宏实现
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EventAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(
                other.span(),
                "#[domain_event] can only be used on struct types",
            )
            .to_compile_error()
            .into();
        }
    };

    if !st.generics.params.is_empty() {
        return syn::Error::new(
            st.generics.span(),
            "#[domain_event] does not support generic structs",
        )
        .to_compile_error()
        .into();
    }

    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(
                st.span(),
                "#[domain_event] supports only named-field structs, e.g., struct E { x: T }",
            )
            .to_compile_error()
            .into();
        }
    };

    // 注入 meta 字段并置于最前（若已显式声明则复用原定义）
    let existed_meta = fields_named
        .named
        .iter()
        .find(|f| f.ident.as_ref().map(|i| i == "meta").unwrap_or(false))
        .cloned();

    let mut new_named: Punctuated<syn::Field, Token![,]> = Punctuated::new();
    if let Some(f) = existed_meta {
        new_named.push(f);
    } else {
        new_named
            .push(syn::parse_quote! { meta: ::schulportal_domain::domain_event::EventMeta });
    }
    for f in fields_named.named.clone().into_iter() {
        let is_meta = f.ident.as_ref().map(|i| i == "meta").unwrap_or(false);
        if !is_meta {
            new_named.push(f);
        }
    }
    fields_named.named = new_named;

    // 合并/追加默认派生：Debug, Clone, PartialEq, Serialize, Deserialize
    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    apply_derives(&mut st.attrs, required);

    // 生成 DomainEvent 实现（稳定类型名默认为结构体名）
    let ident = &st.ident;
    let type_lit = cfg
        .event_type
        .unwrap_or_else(|| syn::LitStr::new(&ident.to_string(), ident.span()));

    let out = quote! {
        #st

        impl ::schulportal_domain::domain_event::DomainEvent for #ident {
            const EVENT_TYPE: &'static str = #type_lit;

            fn event_id(&self) -> ::schulportal_domain::value_object::EventId {
                self.meta.event_id()
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.meta.created_at()
            }
        }
    };

    TokenStream::from(out)
}

// 属性配置：可选的稳定类型名覆写
struct EventAttrConfig {
    event_type: Option<syn::LitStr>,
}

impl Parse for EventAttrConfig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(Self { event_type: None });
        }

        let key: syn::Ident = input.parse()?;
        if key != "event_type" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key; expected 'event_type'",
            ));
        }
        let _eq: Token![=] = input.parse()?;
        let lit: syn::LitStr = input.parse()?;

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after 'event_type'"));
        }

        Ok(Self {
            event_type: Some(lit),
        })
    }
}
