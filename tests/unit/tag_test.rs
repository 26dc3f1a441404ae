#[cfg(test)]
mod tests {
    use crate::record::SourceLocation;
    use crate::tag::{effective_tag, synthesized_tag};

    #[test]
    fn test_explicit_tag_is_kept() {
        let location = SourceLocation::new("Foo.cs", 42);
        assert_eq!(effective_tag("mytag", &location), "mytag");
    }

    #[test]
    fn test_empty_tag_is_synthesized() {
        let location = SourceLocation::new("X", 7);
        assert_eq!(effective_tag("", &location), "File: X, Line: 7");
    }

    #[test]
    fn test_whitespace_tag_is_not_trimmed() {
        let location = SourceLocation::new("X", 7);
        assert_eq!(effective_tag("  ", &location), "  ");
    }

    #[test]
    fn test_synthesized_tag_uses_file_name_only() {
        let unix = SourceLocation::new("src/pipelines/run.rs", 12);
        assert_eq!(synthesized_tag(&unix), "File: run.rs, Line: 12");

        let windows = SourceLocation::new(r"C:\work\app\Foo.cs", 42);
        assert_eq!(synthesized_tag(&windows), "File: Foo.cs, Line: 42");
    }

    #[test]
    fn test_unknown_location() {
        assert_eq!(synthesized_tag(&SourceLocation::unknown()), "File: unknown, Line: 0");
        assert_eq!(SourceLocation::default(), SourceLocation::unknown());
    }

    #[test]
    fn test_caller_location_points_here() {
        let line = line!() + 1;
        let location = SourceLocation::caller();
        assert_eq!(location.line, line);
        assert!(location.file.ends_with("tag_test.rs"));
    }
}
