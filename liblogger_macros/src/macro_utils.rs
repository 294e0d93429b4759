use syn::ItemFn;

/// Function name as written at the definition site
pub fn get_fn_name(func: &ItemFn) -> String {
    func.sig.ident.to_string()
}
