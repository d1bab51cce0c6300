use quote::{format_ident, quote};

/// Expands to one `#[test]` per `.expr` fixture below the `tests` directory,
/// each of which hands the fixture's contents to `expr_expect`.
#[proc_macro]
pub fn generate_tests(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let root_dir = format!("{}/..", env!("CARGO_MANIFEST_DIR"));
    let mut fixtures = walkdir::WalkDir::new(root_dir.clone())
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("expr".as_ref()))
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();
    fixtures.sort();

    let tests = fixtures.iter().map(|path| {
        let test_file_path = path.to_string_lossy();
        let relative_test_path = path.strip_prefix(&root_dir).unwrap().to_string_lossy();
        let test_ident = format_ident!(
            "test_{}",
            relative_test_path.replace(&['/', '-'][..], "_").replace(".expr", "")
        );
        quote! {
            #[test]
            fn #test_ident() {
                expr_expect(std::fs::read_to_string(#test_file_path).unwrap().as_str());
            }
        }
    });

    quote! {
        #[ctor::ctor]
        fn init() {
            let _ = env_logger::builder().is_test(true).try_init();
        }

        #(#tests)*
    }
    .into()
}
