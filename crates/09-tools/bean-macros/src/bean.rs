//! Bean 派生宏实现

use crate::utils::{hidden_ident, is_autowire_field};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    parenthesized, parse::Parse, parse::ParseStream, parse_quote, punctuated::Punctuated, Data,
    DeriveInput, Fields, Ident, Index, LitStr, Member, Path, Result, Token, Type, TypeParamBound,
};

/// Bean 类型属性参数
#[derive(Default)]
pub struct BeanArgs {
    /// 显式 Bean 名称
    pub name: Option<LitStr>,
    /// 额外提供的能力类型
    pub provides: Vec<Type>,
    /// 自定义构造函数
    pub constructor: Option<Path>,
}

impl BeanArgs {
    fn merge(&mut self, other: BeanArgs) -> Result<()> {
        if let Some(name) = other.name {
            if self.name.is_some() {
                return Err(syn::Error::new(name.span(), "Bean 名称重复指定"));
            }
            self.name = Some(name);
        }
        if let Some(constructor) = other.constructor {
            if self.constructor.is_some() {
                return Err(syn::Error::new_spanned(constructor, "构造函数重复指定"));
            }
            self.constructor = Some(constructor);
        }
        self.provides.extend(other.provides);
        Ok(())
    }
}

impl Parse for BeanArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = BeanArgs::default();

        while !input.is_empty() {
            if input.peek(LitStr) {
                args.merge(BeanArgs {
                    name: Some(input.parse()?),
                    ..BeanArgs::default()
                })?;
            } else {
                let key: Ident = input.parse()?;
                if key == "name" {
                    input.parse::<Token![=]>()?;
                    args.merge(BeanArgs {
                        name: Some(input.parse()?),
                        ..BeanArgs::default()
                    })?;
                } else if key == "provides" {
                    let content;
                    parenthesized!(content in input);
                    let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                    args.provides.extend(types);
                } else if key == "constructor" {
                    input.parse::<Token![=]>()?;
                    args.merge(BeanArgs {
                        constructor: Some(input.parse()?),
                        ..BeanArgs::default()
                    })?;
                } else {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("未知的 bean 参数: {}", key),
                    ));
                }
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}

/// 收集类型上所有 `#[bean(...)]` 属性
fn collect_args(input: &DeriveInput) -> Result<BeanArgs> {
    let mut args = BeanArgs::default();
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("bean")) {
        // `#[bean]` 不带参数
        if matches!(attr.meta, syn::Meta::Path(_)) {
            continue;
        }
        args.merge(attr.parse_args::<BeanArgs>()?)?;
    }
    Ok(args)
}

/// 为 `dyn Trait` 补齐 `Send + Sync` 标记
///
/// `dyn Trait` 与 `dyn Trait + Send + Sync` 的 `TypeId` 不同，槽位常用后一种写法。
/// 已经写全标记或不是 trait 对象时返回 `None`。
fn with_marker_bounds(ty: &Type) -> Option<Type> {
    let Type::TraitObject(object) = ty else {
        return None;
    };
    let has_bound = |marker: &str| {
        object.bounds.iter().any(|bound| match bound {
            TypeParamBound::Trait(trait_bound) => trait_bound
                .path
                .segments
                .last()
                .map_or(false, |segment| segment.ident == marker),
            _ => false,
        })
    };

    let mut extended = object.clone();
    if !has_bound("Send") {
        extended.bounds.push(parse_quote!(::core::marker::Send));
    }
    if !has_bound("Sync") {
        extended.bounds.push(parse_quote!(::core::marker::Sync));
    }
    if extended.bounds.len() == object.bounds.len() {
        return None;
    }
    if extended.dyn_token.is_none() {
        extended.dyn_token = Some(Default::default());
    }
    Some(Type::TraitObject(extended))
}

/// 展开能力列表：每个 `dyn Trait` 同时提供带 `Send + Sync` 的写法
fn expand_provides(provides: &[Type]) -> Vec<Type> {
    let mut expanded = Vec::with_capacity(provides.len() * 2);
    for ty in provides {
        expanded.push(ty.clone());
        expanded.extend(with_marker_bounds(ty));
    }
    expanded
}

/// 注入槽位
struct SlotField {
    id: String,
    member: Member,
    ty: Type,
}

fn collect_slots(fields: &Fields) -> Vec<SlotField> {
    fields
        .iter()
        .enumerate()
        .filter(|(_, field)| is_autowire_field(field))
        .map(|(index, field)| match &field.ident {
            Some(ident) => SlotField {
                id: ident.unraw().to_string(),
                member: Member::Named(ident.clone()),
                ty: field.ty.clone(),
            },
            None => SlotField {
                id: index.to_string(),
                member: Member::Unnamed(Index::from(index)),
                ty: field.ty.clone(),
            },
        })
        .collect()
}

/// 实现 #[derive(Bean)]
pub fn derive_bean_impl(input: &DeriveInput) -> Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(Bean)] 只能用于结构体",
            ))
        }
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Bean)] 不支持泛型类型",
        ));
    }

    let args = collect_args(input)?;
    let slots = collect_slots(fields);
    let bean_type = &input.ident;
    let simple_name = bean_type.to_string();

    let explicit_name = match &args.name {
        Some(name) => quote! { ::core::option::Option::Some(#name) },
        None => quote! { ::core::option::Option::None },
    };

    let construct_body = match &args.constructor {
        Some(constructor) => quote! {
            let bean: #bean_type = #constructor()
                .map_err(::core::convert::Into::<::di_common::BoxError>::into)?;
        },
        None => quote! {
            let bean: #bean_type = <#bean_type as ::core::default::Default>::default();
        },
    };

    let provided_types = expand_provides(&args.provides);
    let provide_fns: Vec<Ident> = (0..provided_types.len())
        .map(|index| format_ident!("__provide_{}", index))
        .collect();

    let slot_fns: Vec<Ident> = slots
        .iter()
        .map(|slot| Ident::new(&format!("__slot_{}", slot.id), Span::call_site()))
        .collect();
    let slot_ids: Vec<&String> = slots.iter().map(|slot| &slot.id).collect();
    let slot_members: Vec<&Member> = slots.iter().map(|slot| &slot.member).collect();
    let slot_types: Vec<&Type> = slots.iter().map(|slot| &slot.ty).collect();

    let register_fn = hidden_ident("register_bean", &simple_name);

    Ok(quote! {
        impl ::di_common::Bean for #bean_type {
            fn descriptor() -> ::di_common::BeanDescriptor {
                fn __construct() -> ::core::result::Result<
                    ::di_common::SharedInstance,
                    ::di_common::BoxError,
                > {
                    #construct_body
                    let instance: ::di_common::SharedInstance = ::std::sync::Arc::new(bean);
                    ::core::result::Result::Ok(instance)
                }

                #(
                    fn #provide_fns(
                        instance: ::di_common::SharedInstance,
                    ) -> ::core::option::Option<::std::boxed::Box<dyn ::std::any::Any>> {
                        let concrete: ::std::sync::Arc<#bean_type> =
                            instance.downcast::<#bean_type>().ok()?;
                        let provided: ::std::sync::Arc<#provided_types> = concrete;
                        let boxed: ::std::boxed::Box<dyn ::std::any::Any> =
                            ::std::boxed::Box::new(provided);
                        ::core::option::Option::Some(boxed)
                    }
                )*

                #(
                    fn #slot_fns(
                        instance: &(dyn ::std::any::Any + ::core::marker::Send + ::core::marker::Sync),
                    ) -> ::core::option::Option<&dyn ::di_common::AutowireSlot> {
                        let bean = instance.downcast_ref::<#bean_type>()?;
                        let slot: &dyn ::di_common::AutowireSlot = &bean.#slot_members;
                        ::core::option::Option::Some(slot)
                    }
                )*

                ::di_common::BeanDescriptor::new(
                    ::di_common::TypeInfo::of::<#bean_type>(),
                    #simple_name,
                    ::core::module_path!(),
                    __construct,
                )
                .with_explicit_name(#explicit_name)
                .with_capability(::di_common::Capability::of::<#bean_type>())
                #(
                    .with_capability(::di_common::Capability::new(
                        ::di_common::TypeInfo::of::<#provided_types>(),
                        #provide_fns,
                    ))
                )*
                #(
                    .with_slot(::di_common::SlotDescriptor::new(
                        #slot_ids,
                        <#slot_types as ::di_common::AutowireSlot>::slot_type(),
                        #slot_fns,
                    ))
                )*
            }
        }

        #[doc(hidden)]
        const _: () = {
            #[::ctor::ctor]
            fn #register_fn() {
                ::di_common::register_bean_descriptor(
                    <#bean_type as ::di_common::Bean>::descriptor(),
                );
            }
        };
    })
}
