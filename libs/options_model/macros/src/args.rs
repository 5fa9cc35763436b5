use darling::util::Flag;
use syn::Path;

#[derive(Debug, darling::FromMeta)]
#[darling(allow_unknown_fields)]
pub struct FieldMeta {
    #[darling(multiple)]
    pub option: Vec<FieldOptionMeta>,
}

#[derive(Default, Debug, darling::FromMeta)]
pub struct FieldOptionMeta {
    pub rename: Option<String>,
    pub skip: Flag,
    pub skip_set: Flag,
    pub skip_get: Flag,
    pub flatten: Flag,
    pub set_with: Option<Path>,
    pub get_with: Option<Path>,
}

#[derive(Debug, darling::FromDeriveInput)]
#[darling(attributes(option))]
pub struct OptionsMeta {
    #[darling(rename = "crate")]
    pub crate_: Option<Path>,
    pub strict: Option<bool>,
}

impl FieldOptionMeta {
    /// Whether any attribute besides `flatten` itself is set.
    pub fn conflicts_with_flatten(&self) -> bool {
        self.rename.is_some()
            || self.skip.is_present()
            || self.skip_set.is_present()
            || self.skip_get.is_present()
            || self.set_with.is_some()
            || self.get_with.is_some()
    }

    pub fn merge(many: Vec<Self>) -> Self {
        let mut result = Self::default();
        for item in many {
            if item.rename.is_some() {
                result.rename = item.rename;
            }
            if item.skip.is_present() {
                result.skip = item.skip;
            }
            if item.skip_set.is_present() {
                result.skip_set = item.skip_set;
            }
            if item.skip_get.is_present() {
                result.skip_get = item.skip_get;
            }
            if item.flatten.is_present() {
                result.flatten = item.flatten;
            }
            if item.set_with.is_some() {
                result.set_with = item.set_with;
            }
            if item.get_with.is_some() {
                result.get_with = item.get_with;
            }
        }
        result
    }
}

/// A field that contributes an accessor table entry.
pub struct AccessorField {
    pub ident: syn::Ident,
    pub name: String,
    pub key: String,
    pub args: FieldOptionMeta,
}

/// A field whose own options resolve through the outer object.
pub struct FlattenedField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
}

pub struct OptionsArgs<'a> {
    pub ty_name: &'a syn::Ident,
    pub generics: &'a syn::Generics,
    pub internals_name: syn::Ident,
    pub accessors: Vec<AccessorField>,
    pub flattened: Vec<FlattenedField>,
    pub strict: Option<bool>,
    pub crate_: syn::Path,
}
