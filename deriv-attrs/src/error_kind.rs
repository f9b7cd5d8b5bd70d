use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// A single `tag = expr` pair inside the `error` attribute.
struct ErrorArg {
    tag: Ident,
    value: Expr,
}

impl Parse for ErrorArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let tag = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(Self { tag, value: input.parse()? })
    }
}

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
    pub note: Option<Expr>,
}

impl ErrorArgs {
    /// Stores the value of the given argument, rejecting unknown and repeated tags.
    fn apply(&mut self, arg: ErrorArg) -> Result<()> {
        let slot = match arg.tag.to_string().as_str() {
            "message" => &mut self.message,
            "labels" => &mut self.labels,
            "help" => &mut self.help,
            "note" => &mut self.note,
            other => return Err(syn::Error::new_spanned(&arg.tag, format!("unknown tag `{}`", other))),
        };

        if slot.is_some() {
            return Err(syn::Error::new_spanned(&arg.tag, format!("`{}` is specified more than once", arg.tag)));
        }
        *slot = Some(arg.value);
        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();
        for arg in Punctuated::<ErrorArg, Token![,]>::parse_terminated(input)? {
            args.apply(arg)?;
        }
        Ok(args)
    }
}

/// Creates a `let` statement that destructures `self` into the named fields of the struct, so
/// that the attribute expressions can refer to them directly.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| field.ident.as_ref());
            quote! { let #ident { #(#names),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// The target struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        let mut error_attrs = attributes.iter()
            .chain(item.attrs.iter())
            .filter(|attr| attr.path().is_ident("error"));
        let error_args = match error_attrs.next() {
            Some(attr) => attr.parse_args::<ErrorArgs>()?,
            None => return Err(syn::Error::new_spanned(&item.ident, "missing `#[error(...)]` attribute")),
        };
        if let Some(extra) = error_attrs.next() {
            return Err(syn::Error::new_spanned(extra, "only one `#[error(...)]` attribute is allowed"));
        }
        if error_args.message.is_none() {
            return Err(syn::Error::new_spanned(&item.ident, "missing `message` in `#[error(...)]`"));
        }

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            error_args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure = destructure_fields(&self.name, &self.fields);
        let message = &self.error_args.message;
        let labels = self.error_args.labels.as_ref()
            .map_or_else(|| quote! { [""] }, |labels| quote! { #labels });
        let help = self.error_args.help.as_ref().map(|help| quote! { builder.set_help(#help); });
        let note = self.error_args.note.as_ref().map(|note| quote! { builder.set_note(#note); });

        // spans without a matching label are highlighted without a message
        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #destructure

                let mut labels = IntoIterator::into_iter(#labels).map(|label| label.to_string());
                let offset = spans.first().map_or(0, |span| span.start);
                #[allow(unused_mut)]
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(spans.iter().map(|span| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(deriv_error::EXPR);
                        match labels.next() {
                            Some(text) if !text.is_empty() => label.with_message(text),
                            _ => label,
                        }
                    }));

                #help
                #note
                builder.finish()
            }
        });
    }
}
