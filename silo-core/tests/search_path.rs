#[cfg(test)]
mod tests {
    use silo_core::{DEFAULT_NAMESPACE, SearchPath};

    fn namespaces(path: &SearchPath) -> Vec<&str> {
        path.ordered_namespaces()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn defaults_to_single_public_namespace() {
        let path = SearchPath::new();
        assert_eq!(path.get(), DEFAULT_NAMESPACE);
        assert_eq!(namespaces(&path), ["public"]);
    }

    #[test]
    fn round_trips_the_raw_string_exactly() {
        let mut path = SearchPath::new();
        path.set(r#""$user", public"#);
        assert_eq!(path.get(), r#""$user", public"#);
        // The placeholder is stored verbatim, expansion is the server's job.
        assert_eq!(namespaces(&path), [r#""$user""#, "public"]);
    }

    #[test]
    fn tokens_are_trimmed_but_not_rewritten() {
        let mut path = SearchPath::new();
        path.set("  public ,\ttest  , other");
        assert_eq!(path.get(), "  public ,\ttest  , other");
        assert_eq!(namespaces(&path), ["public", "test", "other"]);
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let mut path = SearchPath::new();
        path.set("test, public, test");
        assert_eq!(namespaces(&path), ["test", "public", "test"]);
    }

    #[test]
    fn empty_list_falls_back_to_the_default() {
        let mut path = SearchPath::new();
        path.set("");
        assert_eq!(path.get(), "");
        assert_eq!(namespaces(&path), ["public"]);

        path.set(" , ");
        assert_eq!(path.get(), " , ");
        assert_eq!(namespaces(&path), ["public"]);
    }

    #[test]
    fn replaced_wholesale_on_every_set() {
        let mut path = SearchPath::new();
        path.set("one, two");
        path.set("three");
        assert_eq!(path.get(), "three");
        assert_eq!(namespaces(&path), ["three"]);
    }
}
