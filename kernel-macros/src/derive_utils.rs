use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{Attribute, Path, Token};

// 拆出已有 derive 列表，其余属性原样保留
fn take_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("derive") {
            retained.push(attr.clone());
            continue;
        }
        if let Ok(list) = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
            existing.extend(list);
        }
    }
    (retained, existing)
}

// serde 派生无论是否带路径前缀都视为同一项
fn derive_key(path: &Path) -> String {
    match path.segments.last() {
        Some(last) => {
            let ident = last.ident.to_string();
            if ident == "Serialize" || ident == "Deserialize" {
                format!("serde::{ident}")
            } else {
                ident
            }
        }
        None => path.to_token_stream().to_string(),
    }
}

/// 合并必需派生与用户已写的派生（去重，required 在前），
/// 合并后的 `#[derive(..)]` 放在属性列表最前，保证 `#[serde(..)]` 等辅助属性可被识别
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<Path>) {
    let (retained, existing) = take_derives(attrs);

    let mut seen = std::collections::HashSet::new();
    let merged: Vec<Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(retained).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_without_duplicates() {
        let mut attrs: Vec<Attribute> = vec![
            syn::parse_quote!(#[derive(Serialize, Hash)]),
            syn::parse_quote!(#[serde(transparent)]),
        ];
        apply_derives(
            &mut attrs,
            vec![syn::parse_quote!(Clone), syn::parse_quote!(serde::Serialize)],
        );

        assert_eq!(attrs.len(), 2);
        assert!(attrs[1].path().is_ident("serde"));

        let (retained, merged) = take_derives(&attrs);
        assert_eq!(retained.len(), 1);
        let keys: Vec<String> = merged.iter().map(derive_key).collect();
        assert_eq!(keys, ["Clone", "serde::Serialize", "Hash"]);
    }
}
