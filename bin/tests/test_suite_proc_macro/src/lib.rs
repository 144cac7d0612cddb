use quote::{format_ident, quote};
use syn::{parse_macro_input, LitStr};

/// Generates one `#[test]` per `.expr` file found below the given directory
/// (relative to the calling crate's manifest). Each test calls `expr_expect`
/// with the file contents.
#[proc_macro]
pub fn generate_tests(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let dir = parse_macro_input!(input as LitStr).value();
    let root_dir = format!("{}/{}", std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default(), dir);

    let mut files = walkdir::WalkDir::new(&root_dir)
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("expr".as_ref()))
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();
    files.sort();

    let tests = files.iter().map(|path| {
        let test_file_path = path.to_string_lossy();
        let relative_test_path = path.strip_prefix(&root_dir).unwrap().to_string_lossy();
        let test_ident = format_ident!(
            "test_{}",
            relative_test_path.replace(".expr", "").replace(|c: char| !c.is_alphanumeric(), "_")
        );
        quote! {
            #[test]
            fn #test_ident() {
                expr_expect(std::fs::read_to_string(#test_file_path).unwrap().as_str());
            }
        }
    });

    let tests: proc_macro2::TokenStream = quote! {
        #[ctor::ctor]
        fn init() {
            let _ = env_logger::builder().is_test(true).try_init();
        }

        #(#tests)*
    };
    tests.into()
}
